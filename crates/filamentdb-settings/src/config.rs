//! Configuration for FilamentDB
//!
//! Display preferences: which family and view open first, how bars treat
//! values beyond their scale, and the geometry of the plain-text renderer.
//! Files are JSON or TOML, chosen by extension, and are validated after
//! loading and before saving.

use crate::error::{SettingsError, SettingsResult};
use filamentdb_core::{BarOverflow, MaterialFamily, TICK_SEGMENTS};
use filamentdb_ui::{BarStyle, ViewMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const BAR_WIDTH_MAX: usize = 100;
const COLUMN_WIDTH_MIN: usize = 8;
const COLUMN_WIDTH_MAX: usize = 60;

/// Display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Family shown when none is given
    pub default_family: MaterialFamily,
    /// View shown when none is given
    pub default_view: ViewMode,
    /// Policy for values beyond a bar's scale
    pub bar_overflow: BarOverflow,
    /// Draw the tick grid over bars
    pub show_ticks: bool,
    /// Bar width in characters for text output
    pub bar_width: usize,
    /// Table column width in characters for text output
    pub column_width: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            default_family: MaterialFamily::Generic,
            default_view: ViewMode::Grid,
            bar_overflow: BarOverflow::Clamp,
            show_ticks: true,
            bar_width: 20,
            column_width: 22,
        }
    }
}

impl DisplaySettings {
    pub fn bar_style(&self) -> BarStyle {
        BarStyle {
            overflow: self.bar_overflow,
            ticks: self.show_ticks,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplaySettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let display = &self.display;

        if !(TICK_SEGMENTS..=BAR_WIDTH_MAX).contains(&display.bar_width) {
            return Err(SettingsError::Invalid {
                key: "display.bar_width".to_string(),
                reason: format!("must be between {} and {}", TICK_SEGMENTS, BAR_WIDTH_MAX),
            });
        }

        if !(COLUMN_WIDTH_MIN..=COLUMN_WIDTH_MAX).contains(&display.column_width) {
            return Err(SettingsError::Invalid {
                key: "display.column_width".to_string(),
                reason: format!(
                    "must be between {} and {}",
                    COLUMN_WIDTH_MIN, COLUMN_WIDTH_MAX
                ),
            });
        }

        Ok(())
    }

    /// Platform config file location, e.g. `~/.config/filamentdb/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("filamentdb");
        path.push("config.toml");
        Some(path)
    }

    /// Load `path` if given, else the platform config file if it exists,
    /// else defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => {
                tracing::debug!("No config file; using defaults");
                Ok(Self::default())
            }
        }
    }
}
