//! Material data
//!
//! This module provides:
//! - The three material families and their record schemas
//! - The static datasets authored for each family
//! - The [`Catalog`] holding every dataset, built once per process
//! - Dataset validation

pub mod bambu;
pub mod bambu_static;
pub mod esun;
pub mod esun_static;
pub mod generic;
pub mod generic_static;
pub mod measure;
pub mod validate;

use crate::error::{CatalogError, Result};
use crate::record::MaterialRecord;
use bambu::BambuMaterial;
use esun::EsunMaterial;
use generic::GenericMaterial;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// The independent material families in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MaterialFamily {
    /// Generic material classes
    #[default]
    Generic,
    /// Bambu Lab filament line
    Bambu,
    /// eSun filament line
    Esun,
}

impl MaterialFamily {
    pub const ALL: [MaterialFamily; 3] = [Self::Generic, Self::Bambu, Self::Esun];

    /// Stable identifier used on the command line and in config files.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Bambu => "bambu",
            Self::Esun => "esun",
        }
    }
}

impl std::fmt::Display for MaterialFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generic => write!(f, "Generic"),
            Self::Bambu => write!(f, "Bambu Lab"),
            Self::Esun => write!(f, "eSun"),
        }
    }
}

impl std::str::FromStr for MaterialFamily {
    type Err = CatalogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" => Ok(Self::Generic),
            "bambu" | "bambulab" => Ok(Self::Bambu),
            "esun" => Ok(Self::Esun),
            _ => Err(CatalogError::UnknownFamily(s.to_string())),
        }
    }
}

/// Two-valued requirement flag used across all families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Requirement {
    Required,
    Optional,
}

impl Requirement {
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required)
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "Required"),
            Self::Optional => write!(f, "Optional"),
        }
    }
}

/// Every dataset in the catalog. Built once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    generic: Vec<GenericMaterial>,
    bambu: Vec<BambuMaterial>,
    esun: Vec<EsunMaterial>,
}

impl Catalog {
    /// Build the catalog from explicit datasets.
    pub fn new(
        generic: Vec<GenericMaterial>,
        bambu: Vec<BambuMaterial>,
        esun: Vec<EsunMaterial>,
    ) -> Self {
        Self {
            generic,
            bambu,
            esun,
        }
    }

    /// Build the catalog from the bundled datasets.
    pub fn standard() -> Self {
        Self::new(
            generic_static::load_generic_materials(),
            bambu_static::load_bambu_materials(),
            esun_static::load_esun_materials(),
        )
    }

    pub fn generic(&self) -> &[GenericMaterial] {
        &self.generic
    }

    pub fn bambu(&self) -> &[BambuMaterial] {
        &self.bambu
    }

    pub fn esun(&self) -> &[EsunMaterial] {
        &self.esun
    }

    pub fn find_generic(&self, name: &str) -> Option<&GenericMaterial> {
        find_by_name(&self.generic, name)
    }

    pub fn find_bambu(&self, name: &str) -> Option<&BambuMaterial> {
        find_by_name(&self.bambu, name)
    }

    pub fn find_esun(&self, name: &str) -> Option<&EsunMaterial> {
        find_by_name(&self.esun, name)
    }

    /// Number of records in a family's dataset.
    pub fn len(&self, family: MaterialFamily) -> usize {
        match family {
            MaterialFamily::Generic => self.generic.len(),
            MaterialFamily::Bambu => self.bambu.len(),
            MaterialFamily::Esun => self.esun.len(),
        }
    }

    /// Whether every dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.generic.is_empty() && self.bambu.is_empty() && self.esun.is_empty()
    }

    /// Names in a family's dataset, in authoring order.
    pub fn family_names(&self, family: MaterialFamily) -> Vec<&str> {
        match family {
            MaterialFamily::Generic => names(&self.generic),
            MaterialFamily::Bambu => names(&self.bambu),
            MaterialFamily::Esun => names(&self.esun),
        }
    }

    /// Search names (partial match, case-insensitive), keeping dataset order.
    pub fn search(&self, family: MaterialFamily, query: &str) -> Vec<&str> {
        let query_lower = query.trim().to_lowercase();
        self.family_names(family)
            .into_iter()
            .filter(|name| name.to_lowercase().contains(&query_lower))
            .collect()
    }

    /// Serialize one family's dataset as pretty JSON.
    pub fn family_to_json(&self, family: MaterialFamily) -> Result<String> {
        let json = match family {
            MaterialFamily::Generic => serde_json::to_string_pretty(&self.generic)?,
            MaterialFamily::Bambu => serde_json::to_string_pretty(&self.bambu)?,
            MaterialFamily::Esun => serde_json::to_string_pretty(&self.esun)?,
        };
        Ok(json)
    }

    /// Serialize the whole catalog as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every dataset and its info coverage.
    pub fn validate(&self) -> Result<()> {
        validate::validate_dataset(&self.generic)?;
        validate::validate_dataset(&self.bambu)?;
        validate::validate_dataset(&self.esun)?;
        validate::validate_info_coverage::<GenericMaterial>()?;
        validate::validate_info_coverage::<BambuMaterial>()?;
        validate::validate_info_coverage::<EsunMaterial>()?;

        tracing::info!(
            generic = self.generic.len(),
            bambu = self.bambu.len(),
            esun = self.esun.len(),
            "Material catalog validated"
        );
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// The process-wide catalog built from the bundled datasets.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let catalog = Catalog::standard();
        tracing::debug!(
            generic = catalog.generic.len(),
            bambu = catalog.bambu.len(),
            esun = catalog.esun.len(),
            "Loaded bundled material datasets"
        );
        catalog
    })
}

fn find_by_name<'a, R: MaterialRecord>(dataset: &'a [R], name: &str) -> Option<&'a R> {
    dataset.iter().find(|m| m.name() == name)
}

fn names<R: MaterialRecord>(dataset: &[R]) -> Vec<&str> {
    dataset.iter().map(|m| m.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_parse_and_display() {
        assert_eq!("bambu".parse::<MaterialFamily>().unwrap(), MaterialFamily::Bambu);
        assert_eq!("ESUN".parse::<MaterialFamily>().unwrap(), MaterialFamily::Esun);
        assert!("prusament".parse::<MaterialFamily>().is_err());
        assert_eq!(MaterialFamily::Bambu.to_string(), "Bambu Lab");
        for family in MaterialFamily::ALL {
            assert_eq!(family.id().parse::<MaterialFamily>().unwrap(), family);
        }
    }

    #[test]
    fn test_requirement_serde_names() {
        let json = serde_json::to_string(&Requirement::Required).unwrap();
        assert_eq!(json, "\"Required\"");
        let parsed: Requirement = serde_json::from_str("\"Optional\"").unwrap();
        assert_eq!(parsed, Requirement::Optional);
        assert!(serde_json::from_str::<Requirement>("\"Sometimes\"").is_err());
    }

    #[test]
    fn test_catalog_search_preserves_order() {
        let catalog = Catalog::standard();
        let names = catalog.search(MaterialFamily::Bambu, "pla");
        assert!(names.len() >= 2);
        let all = catalog.family_names(MaterialFamily::Bambu);
        let positions: Vec<usize> = names
            .iter()
            .map(|n| all.iter().position(|a| a == n).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_catalog_singleton_is_shared() {
        assert!(std::ptr::eq(catalog(), catalog()));
        assert!(!catalog().is_empty());
    }
}
