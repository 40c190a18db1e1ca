use filamentdb_core::data::validate::{validate_dataset, validate_info_coverage};
use filamentdb_core::*;
use std::collections::HashSet;

fn assert_unique<R: MaterialRecord>(dataset: &[R]) {
    let mut seen = HashSet::new();
    for m in dataset {
        assert!(!m.name().trim().is_empty(), "empty name in {}", R::FAMILY);
        assert!(seen.insert(m.name()), "duplicate {} in {}", m.name(), R::FAMILY);
    }
}

#[test]
fn test_names_are_pairwise_distinct() {
    let catalog = Catalog::standard();
    assert_unique(catalog.generic());
    assert_unique(catalog.bambu());
    assert_unique(catalog.esun());
}

#[test]
fn test_standard_catalog_validates() {
    let catalog = Catalog::standard();
    catalog.validate().unwrap();
    validate_dataset(catalog.generic()).unwrap();
    validate_info_coverage::<GenericMaterial>().unwrap();
}

#[test]
fn test_every_family_is_populated() {
    let catalog = catalog();
    for family in MaterialFamily::ALL {
        assert!(catalog.len(family) > 0, "{family} dataset is empty");
    }
}

#[test]
fn test_generic_dataset_contains_pla_and_abs_in_order() {
    let names = catalog().family_names(MaterialFamily::Generic);
    let pla = names.iter().position(|n| *n == "PLA").unwrap();
    let abs = names.iter().position(|n| *n == "ABS").unwrap();
    assert!(pla < abs);
}

#[test]
fn test_primary_list_entry_is_first_authored() {
    let pla = catalog().find_bambu("PLA Basic").unwrap();
    assert_eq!(pla.primary_build_plate(), Some("Textured PEI Plate"));

    let abs = catalog().find_generic("ABS").unwrap();
    assert_eq!(abs.primary_build_surface(), Some("Kapton Tape"));

    let mut empty = GenericMaterial::new("Bare");
    empty.build_surfaces.clear();
    assert_eq!(empty.primary_build_surface(), None);
}

#[test]
fn test_esun_characteristics_fully_populated() {
    for m in catalog().esun() {
        assert_eq!(m.traits().len(), 13, "{}", m.name);
    }
}

#[test]
fn test_generic_traits_are_explicit() {
    let pla = catalog().find_generic("PLA").unwrap();
    let flags = pla.characteristic_flags();
    assert_eq!(flags.len(), GenericTrait::ALL.len());
    assert!(pla.has(GenericTrait::Biodegradable));
    assert!(!pla.has(GenericTrait::Flexible));
}

#[test]
fn test_search_is_case_insensitive() {
    let names = catalog().search(MaterialFamily::Esun, "PLA");
    assert!(names.contains(&"PLA+"));
    assert!(names.contains(&"ePLA-Matte"));
    assert!(catalog().search(MaterialFamily::Esun, "unobtainium").is_empty());
}

#[test]
fn test_json_export_uses_property_identifiers() {
    let json = catalog().family_to_json(MaterialFamily::Bambu).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let first = &value[0];
    assert_eq!(first["name"], "PLA Basic");
    assert_eq!(first["properties"]["toughness"], "26.6 kJ/m²");
    assert_eq!(first["printerSettings"]["enclosureRequired"], "Optional");
}

#[test]
fn test_records_deserialize_from_export() {
    let json = catalog().family_to_json(MaterialFamily::Esun).unwrap();
    let parsed: Vec<EsunMaterial> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_slice(), catalog().esun());
}
