//! # FilamentDB Settings
//!
//! Display preferences for the catalog views, stored as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, DisplaySettings};
pub use error::{SettingsError, SettingsResult};
