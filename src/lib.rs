//! # FilamentDB
//!
//! A reference catalog of 3D-printing filament datasheets with card grids
//! and comparison tables for three material families:
//! - Generic material classes (PLA, PETG, ABS, ...)
//! - Bambu Lab filaments
//! - eSun filaments
//!
//! ## Architecture
//!
//! FilamentDB is organized as a workspace with multiple crates:
//!
//! 1. **filamentdb-core** - Record schemas, static datasets, parsing, property info
//! 2. **filamentdb-ui** - Selection, section and info dialog state; card/grid/table view models
//! 3. **filamentdb-settings** - Display configuration (JSON/TOML)
//! 4. **filamentdb** - Command-line binary with a plain-text renderer

pub mod commands;
pub mod render;

pub use filamentdb_core::{
    catalog, property_info, BambuMaterial, Catalog, CatalogError, EsunMaterial, GenericMaterial,
    MaterialFamily, MaterialRecord, PropertyInfo, SectionId,
};
pub use filamentdb_settings::{Config, DisplaySettings, SettingsError};
pub use filamentdb_ui::{BarStyle, Page, ViewMode, ViewModel};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, so command output stays clean on stdout
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
