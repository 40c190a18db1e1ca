//! Bambu Lab material family
//!
//! Vendor datasheet values kept exactly as published: free-form strings that
//! combine a number and a unit ("26.6 kJ/m²"), grouped the way the vendor
//! groups them (properties, pre-printing, printer settings, post-printing).

use crate::data::{MaterialFamily, Requirement};
use crate::record::{FieldDescriptor, FieldValue, MaterialRecord, SectionId};
use serde::{Deserialize, Serialize};

/// Bar scale for impact toughness, kJ/m².
pub const TOUGHNESS_BAR_MAX: f64 = 80.0;
/// Bar scale for tensile and layer strength, MPa.
pub const STRENGTH_BAR_MAX: f64 = 120.0;
/// Bar scale for bending modulus, MPa.
pub const STIFFNESS_BAR_MAX: f64 = 10000.0;
/// Bar scale for heat deflection temperature, ℃.
pub const HEAT_BAR_MAX: f64 = 250.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BambuProperties {
    pub toughness: String,
    pub strength: String,
    pub stiffness: String,
    pub layer_adhesion: String,
    pub heat_resistance: String,
    pub water_absorption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BambuPreprinting {
    pub drying_required: Requirement,
    /// May span several lines (oven and heated-bed conditions).
    pub drying_condition: String,
    pub ams_compatibility: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BambuPrinterSettings {
    pub nozzle_size_material: String,
    pub build_plate: Vec<String>,
    pub adhesion_methods: Vec<String>,
    pub print_speed: String,
    pub nozzle_temperature: String,
    pub part_cooling_fan: String,
    pub enclosure_required: Requirement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BambuPostprinting {
    pub seal_with_desiccant: Requirement,
    pub annealing: String,
}

/// A Bambu Lab filament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BambuMaterial {
    pub name: String,
    pub properties: BambuProperties,
    pub preprinting: BambuPreprinting,
    pub printer_settings: BambuPrinterSettings,
    pub postprinting: BambuPostprinting,
}

impl BambuMaterial {
    /// Create a material with empty datasheet values.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            properties: BambuProperties::default(),
            preprinting: BambuPreprinting {
                drying_required: Requirement::Optional,
                drying_condition: String::new(),
                ams_compatibility: String::new(),
            },
            printer_settings: BambuPrinterSettings {
                nozzle_size_material: String::new(),
                build_plate: Vec::new(),
                adhesion_methods: Vec::new(),
                print_speed: String::new(),
                nozzle_temperature: String::new(),
                part_cooling_fan: String::new(),
                enclosure_required: Requirement::Optional,
            },
            postprinting: BambuPostprinting {
                seal_with_desiccant: Requirement::Optional,
                annealing: String::new(),
            },
        }
    }

    /// Preferred build plate (first listed).
    pub fn primary_build_plate(&self) -> Option<&str> {
        self.printer_settings.build_plate.first().map(String::as_str)
    }
}

impl MaterialRecord for BambuMaterial {
    const FAMILY: MaterialFamily = MaterialFamily::Bambu;

    fn name(&self) -> &str {
        &self.name
    }

    fn sections() -> &'static [SectionId] {
        &[
            SectionId::Properties,
            SectionId::Preprinting,
            SectionId::Printer,
            SectionId::Postprinting,
        ]
    }

    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![
            FieldDescriptor {
                key: "toughness",
                label: "Toughness",
                section: SectionId::Properties,
                info_key: Some("toughness"),
                extract: |m: &Self| {
                    FieldValue::measure(&m.properties.toughness, Some(TOUGHNESS_BAR_MAX))
                },
            },
            FieldDescriptor {
                key: "strength",
                label: "Strength",
                section: SectionId::Properties,
                info_key: Some("strength"),
                extract: |m: &Self| {
                    FieldValue::measure(&m.properties.strength, Some(STRENGTH_BAR_MAX))
                },
            },
            FieldDescriptor {
                key: "stiffness",
                label: "Stiffness",
                section: SectionId::Properties,
                info_key: Some("stiffness"),
                extract: |m: &Self| {
                    FieldValue::measure(&m.properties.stiffness, Some(STIFFNESS_BAR_MAX))
                },
            },
            FieldDescriptor {
                key: "layerAdhesion",
                label: "Layer Adhesion",
                section: SectionId::Properties,
                info_key: Some("layerAdhesion"),
                extract: |m: &Self| {
                    FieldValue::measure(&m.properties.layer_adhesion, Some(STRENGTH_BAR_MAX))
                },
            },
            FieldDescriptor {
                key: "heatResistance",
                label: "Heat Resistance",
                section: SectionId::Properties,
                info_key: Some("heatResistance"),
                extract: |m: &Self| {
                    FieldValue::measure(&m.properties.heat_resistance, Some(HEAT_BAR_MAX))
                },
            },
            FieldDescriptor {
                key: "waterAbsorption",
                label: "Water Absorption",
                section: SectionId::Properties,
                info_key: Some("waterAbsorption"),
                extract: |m: &Self| FieldValue::measure(&m.properties.water_absorption, None),
            },
            FieldDescriptor {
                key: "drying",
                label: "Drying Required",
                section: SectionId::Preprinting,
                info_key: Some("drying"),
                extract: |m: &Self| FieldValue::Requirement(m.preprinting.drying_required),
            },
            FieldDescriptor {
                key: "dryingCondition",
                label: "Drying Conditions",
                section: SectionId::Preprinting,
                info_key: Some("dryingCondition"),
                extract: |m: &Self| FieldValue::text(&m.preprinting.drying_condition),
            },
            FieldDescriptor {
                key: "amsCompatibility",
                label: "AMS Compatibility",
                section: SectionId::Preprinting,
                info_key: Some("amsCompatibility"),
                extract: |m: &Self| FieldValue::text(&m.preprinting.ams_compatibility),
            },
            FieldDescriptor {
                key: "nozzleSize",
                label: "Nozzle",
                section: SectionId::Printer,
                info_key: Some("nozzleSize"),
                extract: |m: &Self| FieldValue::text(&m.printer_settings.nozzle_size_material),
            },
            FieldDescriptor {
                key: "buildPlate",
                label: "Build Plate",
                section: SectionId::Printer,
                info_key: Some("buildPlate"),
                extract: |m: &Self| FieldValue::list(&m.printer_settings.build_plate),
            },
            FieldDescriptor {
                key: "adhesionMethods",
                label: "Adhesion Methods",
                section: SectionId::Printer,
                info_key: Some("adhesionMethods"),
                extract: |m: &Self| FieldValue::list(&m.printer_settings.adhesion_methods),
            },
            FieldDescriptor {
                key: "enclosure",
                label: "Enclosure",
                section: SectionId::Printer,
                info_key: Some("enclosure"),
                extract: |m: &Self| FieldValue::Requirement(m.printer_settings.enclosure_required),
            },
            FieldDescriptor {
                key: "printSpeed",
                label: "Print Speed",
                section: SectionId::Printer,
                info_key: Some("printSpeed"),
                extract: |m: &Self| FieldValue::text(&m.printer_settings.print_speed),
            },
            FieldDescriptor {
                key: "nozzleTemp",
                label: "Nozzle Temperature",
                section: SectionId::Printer,
                info_key: Some("nozzleTemp"),
                extract: |m: &Self| FieldValue::text(&m.printer_settings.nozzle_temperature),
            },
            FieldDescriptor {
                key: "partCooling",
                label: "Part Cooling Fan",
                section: SectionId::Printer,
                info_key: Some("partCooling"),
                extract: |m: &Self| FieldValue::text(&m.printer_settings.part_cooling_fan),
            },
            FieldDescriptor {
                key: "desiccant",
                label: "Seal with Desiccant",
                section: SectionId::Postprinting,
                info_key: Some("desiccant"),
                extract: |m: &Self| FieldValue::Requirement(m.postprinting.seal_with_desiccant),
            },
            FieldDescriptor {
                key: "annealing",
                label: "Annealing",
                section: SectionId::Postprinting,
                info_key: Some("annealing"),
                extract: |m: &Self| FieldValue::text(&m.postprinting.annealing),
            },
        ]
    }

    fn card_keys() -> &'static [&'static str] {
        &[
            "toughness",
            "strength",
            "heatResistance",
            "nozzleTemp",
            "buildPlate",
            "enclosure",
        ]
    }

    fn traits(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("Drying Required", self.preprinting.drying_required.is_required()),
            (
                "Enclosure Required",
                self.printer_settings.enclosure_required.is_required(),
            ),
            (
                "Seal with Desiccant",
                self.postprinting.seal_with_desiccant.is_required(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_follow_sections() {
        let fields = BambuMaterial::fields();
        let order: Vec<usize> = fields
            .iter()
            .map(|f| {
                BambuMaterial::sections()
                    .iter()
                    .position(|s| *s == f.section)
                    .unwrap()
            })
            .collect();
        assert!(order.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(fields.len(), 18);
    }

    #[test]
    fn test_primary_build_plate_on_empty_list() {
        let m = BambuMaterial::new("Test");
        assert_eq!(m.primary_build_plate(), None);
    }

    #[test]
    fn test_toughness_measure_keeps_raw_string() {
        let mut m = BambuMaterial::new("Test");
        m.properties.toughness = "26.6 kJ/m²".to_string();
        let value = BambuMaterial::field("toughness").unwrap().value(&m);
        assert_eq!(
            value,
            FieldValue::Measure {
                raw: "26.6 kJ/m²".to_string(),
                bar_max: Some(TOUGHNESS_BAR_MAX),
            }
        );
    }
}
