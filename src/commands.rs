//! Command implementations for the `filamentdb` binary.
//!
//! Each command returns the text to print. View commands replay the given
//! selections and toggles through the same state the interactive views use.

use crate::render;
use anyhow::{Context, Result};
use filamentdb_core::{catalog, property_info, MaterialFamily, SectionId};
use filamentdb_settings::Config;
use filamentdb_ui::{Page, ViewMode};
use std::path::Path;

/// UI actions to replay before rendering.
#[derive(Debug, Clone, Default)]
pub struct ViewActions {
    pub select: Vec<String>,
    pub compare: bool,
    pub section: Option<SectionId>,
    pub info: Option<String>,
}

pub fn show(
    config: &Config,
    mode: ViewMode,
    family: Option<MaterialFamily>,
    actions: &ViewActions,
    json: bool,
) -> Result<String> {
    let display = &config.display;
    let family = family.unwrap_or(display.default_family);
    let catalog = catalog();
    let mut page = Page::new(catalog, family, mode, display.bar_style());

    let names = catalog.family_names(family);
    for name in &actions.select {
        if !names.contains(&name.as_str()) {
            tracing::warn!(family = %family, name = %name, "No such material; selection skipped");
            continue;
        }
        page.view_mut().toggle_select(name);
    }
    if actions.compare && !page.view_mut().compare() {
        tracing::warn!("Compare needs at least 2 selected materials");
    }
    if let Some(section) = actions.section {
        page.view_mut().toggle_section(section);
    }
    if let Some(key) = &actions.info {
        if !page.view_mut().toggle_info(key) {
            tracing::warn!(key = %key, "No property info for key");
        }
    }

    let model = page.render();
    if json {
        return serde_json::to_string_pretty(&model).context("Failed to serialize view");
    }
    Ok(render::view(&model, display))
}

pub fn info(key: &str) -> Result<String> {
    let entry = property_info::get(key)?;
    Ok(render::property_info(entry))
}

/// JSON dump of one family, or of the whole catalog. Written to `output`
/// when given, else returned.
pub fn export(family: Option<MaterialFamily>, output: Option<&Path>) -> Result<String> {
    let json = match family {
        Some(family) => catalog().family_to_json(family)?,
        None => catalog().to_json()?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = json.len(), "Exported catalog");
            Ok(format!("Wrote {}", path.display()))
        }
        None => Ok(json),
    }
}

pub fn validate() -> Result<String> {
    let catalog = catalog();
    catalog.validate().context("Catalog validation failed")?;

    let counts: Vec<String> = MaterialFamily::ALL
        .iter()
        .map(|f| format!("{}: {}", f, catalog.len(*f)))
        .collect();
    Ok(format!(
        "Catalog OK ({}; {} property info entries)",
        counts.join(", "),
        property_info::all().len()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_unknown_key_fails() {
        let err = info("toughnes").unwrap_err();
        assert_eq!(err.to_string(), "Unknown property: toughnes");
        assert!(info("toughness").unwrap().starts_with("Toughness\n"));
    }

    #[test]
    fn test_validate_reports_counts() {
        let out = validate().unwrap();
        assert!(out.starts_with("Catalog OK"));
        assert!(out.contains("Bambu Lab: "));
    }
}
