//! eSun material family
//!
//! Manufacturer datasheet values as free-form strings. `/` marks a value
//! that is not applicable or was not measured. Characteristics are a dense
//! set of 13 flags, every one always present.

use crate::data::{MaterialFamily, Requirement};
use crate::record::{FieldDescriptor, FieldValue, MaterialRecord, SectionId};
use serde::{Deserialize, Serialize};

/// Bar scale for heat distortion temperature, ℃.
pub const HEAT_DISTORTION_BAR_MAX: f64 = 200.0;
/// Bar scale for tensile strength, MPa.
pub const TENSILE_BAR_MAX: f64 = 100.0;
/// Bar scale for elongation at break, percent.
pub const ELONGATION_BAR_MAX: f64 = 600.0;
/// Bar scale for bending strength, MPa.
pub const BENDING_BAR_MAX: f64 = 150.0;
/// Bar scale for flexural modulus, MPa.
pub const MODULUS_BAR_MAX: f64 = 8000.0;
/// Bar scale for notched Izod impact, kJ/m².
pub const IZOD_BAR_MAX: f64 = 80.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EsunProperties {
    pub density: String,
    pub heat_distortion: String,
    pub melt_flow: String,
    pub tensile_strength: String,
    pub elongation: String,
    pub bending_strength: String,
    pub flexural_modulus: String,
    pub izod_impact: String,
    pub weather_resistance: String,
    pub printability: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsunPrinterSettings {
    pub print_temp: String,
    pub bed_temp: String,
    pub fan_speed: String,
    pub print_speed: String,
    pub heat_bed_required: Requirement,
}

/// The 13 eSun characteristic flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EsunCharacteristics {
    pub easy_to_print: bool,
    pub high_strength: bool,
    pub high_toughness: bool,
    pub heat_resistant: bool,
    pub flexible: bool,
    pub impact_resistant: bool,
    pub wear_resistant: bool,
    pub uv_resistant: bool,
    pub chemical_resistant: bool,
    pub low_odor: bool,
    pub low_warping: bool,
    pub glossy_finish: bool,
    pub matte_finish: bool,
}

impl EsunCharacteristics {
    /// Every flag with its label, in display order.
    pub fn flags(&self) -> [(&'static str, bool); 13] {
        [
            ("Easy to Print", self.easy_to_print),
            ("High Strength", self.high_strength),
            ("High Toughness", self.high_toughness),
            ("Heat Resistant", self.heat_resistant),
            ("Flexible", self.flexible),
            ("Impact Resistant", self.impact_resistant),
            ("Wear Resistant", self.wear_resistant),
            ("UV Resistant", self.uv_resistant),
            ("Chemical Resistant", self.chemical_resistant),
            ("Low Odor", self.low_odor),
            ("Low Warping", self.low_warping),
            ("Glossy Finish", self.glossy_finish),
            ("Matte Finish", self.matte_finish),
        ]
    }
}

/// An eSun filament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsunMaterial {
    pub name: String,
    pub properties: EsunProperties,
    pub printer_settings: EsunPrinterSettings,
    pub characteristics: EsunCharacteristics,
}

impl EsunMaterial {
    /// Create a material with empty datasheet values and every flag off.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            properties: EsunProperties::default(),
            printer_settings: EsunPrinterSettings {
                print_temp: String::new(),
                bed_temp: String::new(),
                fan_speed: String::new(),
                print_speed: String::new(),
                heat_bed_required: Requirement::Optional,
            },
            characteristics: EsunCharacteristics::default(),
        }
    }
}

macro_rules! flag_row {
    ($field:ident, $key:literal, $label:literal) => {
        FieldDescriptor {
            key: $key,
            label: $label,
            section: SectionId::Characteristics,
            info_key: None,
            extract: |m: &EsunMaterial| FieldValue::Flag(m.characteristics.$field),
        }
    };
}

impl MaterialRecord for EsunMaterial {
    const FAMILY: MaterialFamily = MaterialFamily::Esun;

    fn name(&self) -> &str {
        &self.name
    }

    fn sections() -> &'static [SectionId] {
        &[
            SectionId::Properties,
            SectionId::Printer,
            SectionId::Characteristics,
        ]
    }

    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![
            FieldDescriptor {
                key: "density",
                label: "Density",
                section: SectionId::Properties,
                info_key: Some("density"),
                extract: |m: &Self| FieldValue::measure(&m.properties.density, None),
            },
            FieldDescriptor {
                key: "heatDistortion",
                label: "Heat Distortion Temperature",
                section: SectionId::Properties,
                info_key: Some("heatDistortion"),
                extract: |m: &Self| {
                    FieldValue::measure(&m.properties.heat_distortion, Some(HEAT_DISTORTION_BAR_MAX))
                },
            },
            FieldDescriptor {
                key: "meltFlow",
                label: "Melt Flow Index",
                section: SectionId::Properties,
                info_key: Some("meltFlow"),
                extract: |m: &Self| FieldValue::measure(&m.properties.melt_flow, None),
            },
            FieldDescriptor {
                key: "tensileStrength",
                label: "Tensile Strength",
                section: SectionId::Properties,
                info_key: Some("tensileStrength"),
                extract: |m: &Self| {
                    FieldValue::measure(&m.properties.tensile_strength, Some(TENSILE_BAR_MAX))
                },
            },
            FieldDescriptor {
                key: "elongation",
                label: "Elongation at Break",
                section: SectionId::Properties,
                info_key: Some("elongation"),
                extract: |m: &Self| {
                    FieldValue::measure(&m.properties.elongation, Some(ELONGATION_BAR_MAX))
                },
            },
            FieldDescriptor {
                key: "bendingStrength",
                label: "Bending Strength",
                section: SectionId::Properties,
                info_key: Some("bendingStrength"),
                extract: |m: &Self| {
                    FieldValue::measure(&m.properties.bending_strength, Some(BENDING_BAR_MAX))
                },
            },
            FieldDescriptor {
                key: "flexuralModulus",
                label: "Flexural Modulus",
                section: SectionId::Properties,
                info_key: Some("flexuralModulus"),
                extract: |m: &Self| {
                    FieldValue::measure(&m.properties.flexural_modulus, Some(MODULUS_BAR_MAX))
                },
            },
            FieldDescriptor {
                key: "izodImpact",
                label: "Izod Impact Strength",
                section: SectionId::Properties,
                info_key: Some("izodImpact"),
                extract: |m: &Self| {
                    FieldValue::measure(&m.properties.izod_impact, Some(IZOD_BAR_MAX))
                },
            },
            FieldDescriptor {
                key: "weatherResistance",
                label: "Weather Resistance",
                section: SectionId::Properties,
                info_key: Some("weatherResistance"),
                extract: |m: &Self| FieldValue::text(&m.properties.weather_resistance),
            },
            FieldDescriptor {
                key: "printability",
                label: "Printability",
                section: SectionId::Properties,
                info_key: Some("printability"),
                extract: |m: &Self| FieldValue::text(&m.properties.printability),
            },
            FieldDescriptor {
                key: "printTemp",
                label: "Printing Temperature",
                section: SectionId::Printer,
                info_key: Some("printTemp"),
                extract: |m: &Self| FieldValue::text(&m.printer_settings.print_temp),
            },
            FieldDescriptor {
                key: "bedTemp",
                label: "Bed Temperature",
                section: SectionId::Printer,
                info_key: Some("bedTemp"),
                extract: |m: &Self| FieldValue::text(&m.printer_settings.bed_temp),
            },
            FieldDescriptor {
                key: "fanSpeed",
                label: "Fan Speed",
                section: SectionId::Printer,
                info_key: Some("fanSpeed"),
                extract: |m: &Self| FieldValue::text(&m.printer_settings.fan_speed),
            },
            FieldDescriptor {
                key: "printSpeed",
                label: "Print Speed",
                section: SectionId::Printer,
                info_key: Some("printSpeed"),
                extract: |m: &Self| FieldValue::text(&m.printer_settings.print_speed),
            },
            FieldDescriptor {
                key: "heatBed",
                label: "Heated Bed",
                section: SectionId::Printer,
                info_key: Some("heatBed"),
                extract: |m: &Self| FieldValue::Requirement(m.printer_settings.heat_bed_required),
            },
            flag_row!(easy_to_print, "easyToPrint", "Easy to Print"),
            flag_row!(high_strength, "highStrength", "High Strength"),
            flag_row!(high_toughness, "highToughness", "High Toughness"),
            flag_row!(heat_resistant, "heatResistant", "Heat Resistant"),
            flag_row!(flexible, "flexible", "Flexible"),
            flag_row!(impact_resistant, "impactResistant", "Impact Resistant"),
            flag_row!(wear_resistant, "wearResistant", "Wear Resistant"),
            flag_row!(uv_resistant, "uvResistant", "UV Resistant"),
            flag_row!(chemical_resistant, "chemicalResistant", "Chemical Resistant"),
            flag_row!(low_odor, "lowOdor", "Low Odor"),
            flag_row!(low_warping, "lowWarping", "Low Warping"),
            flag_row!(glossy_finish, "glossyFinish", "Glossy Finish"),
            flag_row!(matte_finish, "matteFinish", "Matte Finish"),
        ]
    }

    fn card_keys() -> &'static [&'static str] {
        &[
            "tensileStrength",
            "izodImpact",
            "heatDistortion",
            "printTemp",
            "bedTemp",
        ]
    }

    fn traits(&self) -> Vec<(&'static str, bool)> {
        self.characteristics.flags().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_characteristics_are_dense() {
        let m = EsunMaterial::new("Test");
        assert_eq!(m.traits().len(), 13);
        assert!(m.traits().iter().all(|(_, on)| !on));

        let rows = EsunMaterial::fields()
            .into_iter()
            .filter(|f| f.section == SectionId::Characteristics)
            .count();
        assert_eq!(rows, 13);
    }

    #[test]
    fn test_missing_characteristic_fails_to_deserialize() {
        let json = r#"{"easyToPrint": true}"#;
        assert!(serde_json::from_str::<EsunCharacteristics>(json).is_err());
    }

    #[test]
    fn test_flag_rows_follow_flag_order() {
        let mut m = EsunMaterial::new("Test");
        m.characteristics.low_odor = true;
        let flags = m.characteristics.flags();
        let rows: Vec<_> = EsunMaterial::fields()
            .into_iter()
            .filter(|f| f.section == SectionId::Characteristics)
            .collect();
        for (row, (label, on)) in rows.iter().zip(flags.iter()) {
            assert_eq!(row.label, *label);
            assert_eq!(row.value(&m), FieldValue::Flag(*on));
        }
    }
}
