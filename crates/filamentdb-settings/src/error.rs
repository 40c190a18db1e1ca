//! Error types for the settings crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while loading, saving or validating settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("Invalid TOML config: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("Failed to serialize config: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// The file extension is neither `.json` nor `.toml`.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    Invalid { key: String, reason: String },
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_error_display() {
        let err = SettingsError::Invalid {
            key: "display.bar_width".to_string(),
            reason: "must be between 5 and 100".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid setting 'display.bar_width': must be between 5 and 100"
        );

        let err = SettingsError::UnsupportedFormat("yaml".to_string());
        assert_eq!(err.to_string(), "Unsupported config format: yaml");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: SettingsError = io_err.into();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
