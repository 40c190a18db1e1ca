//! Dataset validation
//!
//! Checks the invariants the UI relies on: names are non-empty and unique
//! within a family, ratings sit on their scale, and every info affordance a
//! family declares has an entry in the property info lookup.

use crate::error::{CatalogError, Result};
use crate::property_info;
use crate::record::{FieldValue, MaterialRecord};
use std::collections::HashSet;

/// Validate names (and bar values) of one family's dataset.
pub fn validate_dataset<R: MaterialRecord>(dataset: &[R]) -> Result<()> {
    let family = R::FAMILY.to_string();
    let mut seen = HashSet::new();

    for (index, record) in dataset.iter().enumerate() {
        let name = record.name();
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName {
                family: family.clone(),
                index,
            });
        }
        if !seen.insert(name) {
            return Err(CatalogError::DuplicateName {
                family: family.clone(),
                name: name.to_string(),
            });
        }
        validate_rated_fields(record)?;
    }

    tracing::debug!(family = %family, records = dataset.len(), "Dataset validated");
    Ok(())
}

/// Explicit bar values must be finite and non-negative with a positive scale.
fn validate_rated_fields<R: MaterialRecord>(record: &R) -> Result<()> {
    for field in R::fields() {
        if let FieldValue::Rated { value, max, .. } = field.value(record) {
            let in_range = value.is_finite() && max.is_finite() && max > 0.0 && value >= 0.0;
            if !in_range || value > max {
                return Err(CatalogError::RatingOutOfRange {
                    name: record.name().to_string(),
                    field: field.key.to_string(),
                    value,
                });
            }
        }
    }
    Ok(())
}

/// Every declared `info_key` must resolve in the property info lookup.
pub fn validate_info_coverage<R: MaterialRecord>() -> Result<()> {
    for field in R::fields() {
        if let Some(key) = field.info_key {
            if !property_info::contains(key) {
                tracing::warn!(family = %R::FAMILY, key, "Field references missing property info");
                return Err(CatalogError::MissingPropertyInfo {
                    family: R::FAMILY.to_string(),
                    key: key.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::bambu::BambuMaterial;
    use crate::data::generic::GenericMaterial;

    #[test]
    fn test_duplicate_names_rejected() {
        let dataset = vec![BambuMaterial::new("PLA Basic"), BambuMaterial::new("PLA Basic")];
        let err = validate_dataset(&dataset).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { ref name, .. } if name == "PLA Basic"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let dataset = vec![BambuMaterial::new("PLA Basic"), BambuMaterial::new("  ")];
        let err = validate_dataset(&dataset).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyName { index: 1, .. }));
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut m = GenericMaterial::new("Overrated");
        m.stiffness = 12.0;
        let err = validate_dataset(&[m]).unwrap_err();
        assert!(matches!(err, CatalogError::RatingOutOfRange { ref field, .. } if field == "stiffness"));
    }

    #[test]
    fn test_empty_dataset_is_valid() {
        let dataset: Vec<BambuMaterial> = Vec::new();
        assert!(validate_dataset(&dataset).is_ok());
    }
}
