use filamentdb_core::property_info::{self, lookup};
use filamentdb_core::*;

fn assert_info_keys_resolve<R: MaterialRecord>() {
    for field in R::fields() {
        if let Some(key) = field.info_key {
            assert!(lookup(key).is_some(), "{} field {} -> {key}", R::FAMILY, field.key);
        }
    }
}

#[test]
fn test_every_descriptor_info_key_resolves() {
    assert_info_keys_resolve::<GenericMaterial>();
    assert_info_keys_resolve::<BambuMaterial>();
    assert_info_keys_resolve::<EsunMaterial>();
}

#[test]
fn test_bambu_identifiers_covered() {
    for key in [
        "toughness",
        "strength",
        "stiffness",
        "layerAdhesion",
        "heatResistance",
        "waterAbsorption",
        "drying",
        "dryingCondition",
        "amsCompatibility",
        "nozzleSize",
        "buildPlate",
        "adhesionMethods",
        "enclosure",
        "printSpeed",
        "nozzleTemp",
        "partCooling",
        "desiccant",
        "annealing",
    ] {
        assert!(property_info::contains(key), "missing {key}");
    }
}

#[test]
fn test_esun_identifiers_covered() {
    for key in [
        "density",
        "heatDistortion",
        "meltFlow",
        "tensileStrength",
        "elongation",
        "bendingStrength",
        "flexuralModulus",
        "izodImpact",
        "weatherResistance",
        "printability",
        "printTemp",
        "bedTemp",
        "fanSpeed",
        "printSpeed",
        "heatBed",
    ] {
        assert!(property_info::contains(key), "missing {key}");
    }
}

#[test]
fn test_misspelled_key_has_no_entry() {
    assert!(lookup("toughnes").is_none());
    assert!(lookup("Toughness").is_none());
}

#[test]
fn test_entry_key_matches_lookup_key() {
    for key in property_info::keys() {
        assert_eq!(lookup(key).unwrap().key, key);
    }
}

#[test]
fn test_get_reports_unknown_property() {
    assert_eq!(property_info::get("strength").unwrap().title, "Strength");
    let err = property_info::get("strenght").unwrap_err();
    assert_eq!(err.to_string(), "Unknown property: strenght");
}

#[test]
fn test_generic_rating_rows_explain_rating_scale() {
    use filamentdb_core::data::generic::RATING_MAX;

    let pla = catalog().find_generic("PLA").unwrap();
    let mut rating_rows = 0;
    for field in GenericMaterial::fields() {
        if let FieldValue::Rated { max, .. } = field.value(pla) {
            if max != RATING_MAX {
                continue;
            }
            rating_rows += 1;
            let info = lookup(field.info_key.unwrap()).unwrap();
            assert!(
                info.measurement.contains("0-10 scale"),
                "{} -> {}: {}",
                field.key,
                info.key,
                info.measurement
            );
        }
    }
    assert_eq!(rating_rows, 3);
}

#[test]
fn test_generic_ratings_do_not_borrow_vendor_entries() {
    let generic = GenericMaterial::field("stiffness").unwrap();
    let bambu = BambuMaterial::field("stiffness").unwrap();
    assert_ne!(generic.info_key, bambu.info_key);
    assert!(lookup("stiffness").unwrap().measurement.contains("MPa"));

    let generic = GenericMaterial::field("printability").unwrap();
    let esun = EsunMaterial::field("printability").unwrap();
    assert_ne!(generic.info_key, esun.info_key);
}
