//! Generic material family
//!
//! Material classes (PLA, PETG, ABS, ...) rather than vendor products.
//! Measured values carry explicit units, and bar-chart quantities carry a
//! separate bar value and scale so the chart can differ from the raw value.

use crate::data::{MaterialFamily, Requirement};
use crate::record::{FieldDescriptor, FieldValue, MaterialRecord, SectionId};
use serde::{Deserialize, Serialize};

/// Scale used by the 0-10 ratings (stiffness, durability, printability).
pub const RATING_MAX: f64 = 10.0;

/// A measured value with its unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

impl Quantity {
    pub fn new(value: f64, unit: &str) -> Self {
        Self {
            value,
            unit: unit.to_string(),
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// A measured value charted on a scale chosen independently of the raw value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarMeasure {
    pub value: f64,
    pub unit: String,
    pub bar_value: f64,
    pub bar_max: f64,
}

impl BarMeasure {
    pub fn new(value: f64, unit: &str, bar_value: f64, bar_max: f64) -> Self {
        Self {
            value,
            unit: unit.to_string(),
            bar_value,
            bar_max,
        }
    }
}

impl std::fmt::Display for BarMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Typical retail price range for a spool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub range: String,
    pub currency: String,
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.currency, self.range)
    }
}

/// Characteristics a generic material may have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GenericTrait {
    EasyToPrint,
    Biodegradable,
    Rigid,
    Flexible,
    ImpactResistant,
    HeatResistant,
    ChemicalResistant,
    UvResistant,
    WaterResistant,
    FatigueResistant,
    Dissolvable,
    FoodSafe,
    Abrasive,
}

impl GenericTrait {
    pub const ALL: [GenericTrait; 13] = [
        Self::EasyToPrint,
        Self::Biodegradable,
        Self::Rigid,
        Self::Flexible,
        Self::ImpactResistant,
        Self::HeatResistant,
        Self::ChemicalResistant,
        Self::UvResistant,
        Self::WaterResistant,
        Self::FatigueResistant,
        Self::Dissolvable,
        Self::FoodSafe,
        Self::Abrasive,
    ];

    /// Row key in the characteristics section.
    pub fn id(&self) -> &'static str {
        match self {
            Self::EasyToPrint => "easyToPrint",
            Self::Biodegradable => "biodegradable",
            Self::Rigid => "rigid",
            Self::Flexible => "flexible",
            Self::ImpactResistant => "impactResistant",
            Self::HeatResistant => "heatResistant",
            Self::ChemicalResistant => "chemicalResistant",
            Self::UvResistant => "uvResistant",
            Self::WaterResistant => "waterResistant",
            Self::FatigueResistant => "fatigueResistant",
            Self::Dissolvable => "dissolvable",
            Self::FoodSafe => "foodSafe",
            Self::Abrasive => "abrasive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::EasyToPrint => "Easy to Print",
            Self::Biodegradable => "Biodegradable",
            Self::Rigid => "Rigid",
            Self::Flexible => "Flexible",
            Self::ImpactResistant => "Impact Resistant",
            Self::HeatResistant => "Heat Resistant",
            Self::ChemicalResistant => "Chemical Resistant",
            Self::UvResistant => "UV Resistant",
            Self::WaterResistant => "Water Resistant",
            Self::FatigueResistant => "Fatigue Resistant",
            Self::Dissolvable => "Dissolvable",
            Self::FoodSafe => "Food Safe",
            Self::Abrasive => "Abrasive",
        }
    }
}

impl std::fmt::Display for GenericTrait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A generic material class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericMaterial {
    pub name: String,
    pub description: String,

    // Properties
    pub ultimate_strength: BarMeasure,
    /// 0-10 rating
    pub stiffness: f64,
    /// 0-10 rating
    pub durability: f64,
    pub max_service_temp: Quantity,
    pub thermal_expansion: Quantity,
    pub density: Quantity,
    pub price: PriceRange,

    // Printing
    /// 0-10 rating
    pub printability: f64,
    pub extruder_temp: String,
    pub bed_temp: String,
    pub heated_bed: Requirement,
    pub build_surfaces: Vec<String>,
    pub other_requirements: Vec<String>,

    /// Only the traits that hold; an absent trait is false.
    #[serde(default)]
    pub characteristics: Vec<GenericTrait>,
}

impl GenericMaterial {
    /// Create a material with placeholder values.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            ultimate_strength: BarMeasure::new(0.0, "MPa", 0.0, 80.0),
            stiffness: 5.0,
            durability: 5.0,
            max_service_temp: Quantity::new(0.0, "°C"),
            thermal_expansion: Quantity::new(0.0, "µm/m-°C"),
            density: Quantity::new(0.0, "g/cm³"),
            price: PriceRange {
                range: String::new(),
                currency: "$".to_string(),
            },
            printability: 5.0,
            extruder_temp: String::new(),
            bed_temp: String::new(),
            heated_bed: Requirement::Optional,
            build_surfaces: Vec::new(),
            other_requirements: Vec::new(),
            characteristics: Vec::new(),
        }
    }

    /// Whether the material has a trait. Absent traits are false.
    pub fn has(&self, t: GenericTrait) -> bool {
        self.characteristics.contains(&t)
    }

    /// Every trait with its explicit value, in canonical order.
    pub fn characteristic_flags(&self) -> Vec<(GenericTrait, bool)> {
        GenericTrait::ALL.iter().map(|t| (*t, self.has(*t))).collect()
    }

    /// Primary build surface, if any are listed.
    pub fn primary_build_surface(&self) -> Option<&str> {
        self.build_surfaces.first().map(String::as_str)
    }
}

fn rating(value: f64) -> FieldValue {
    FieldValue::Rated {
        label: format!("{}/{}", value, RATING_MAX),
        value,
        max: RATING_MAX,
    }
}

macro_rules! trait_row {
    ($variant:ident, $key:literal, $label:literal) => {
        FieldDescriptor {
            key: $key,
            label: $label,
            section: SectionId::Characteristics,
            info_key: None,
            extract: |m: &GenericMaterial| FieldValue::Flag(m.has(GenericTrait::$variant)),
        }
    };
}

impl MaterialRecord for GenericMaterial {
    const FAMILY: MaterialFamily = MaterialFamily::Generic;

    fn name(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> Option<&str> {
        if self.description.is_empty() {
            None
        } else {
            Some(&self.description)
        }
    }

    fn sections() -> &'static [SectionId] {
        &[
            SectionId::Properties,
            SectionId::Printing,
            SectionId::Characteristics,
        ]
    }

    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![
            FieldDescriptor {
                key: "ultimateStrength",
                label: "Ultimate Strength",
                section: SectionId::Properties,
                info_key: Some("ultimateStrength"),
                extract: |m: &Self| FieldValue::Rated {
                    label: m.ultimate_strength.to_string(),
                    value: m.ultimate_strength.bar_value,
                    max: m.ultimate_strength.bar_max,
                },
            },
            FieldDescriptor {
                key: "stiffness",
                label: "Stiffness",
                section: SectionId::Properties,
                info_key: Some("stiffnessRating"),
                extract: |m: &Self| rating(m.stiffness),
            },
            FieldDescriptor {
                key: "durability",
                label: "Durability",
                section: SectionId::Properties,
                info_key: Some("durability"),
                extract: |m: &Self| rating(m.durability),
            },
            FieldDescriptor {
                key: "maxServiceTemp",
                label: "Max Service Temperature",
                section: SectionId::Properties,
                info_key: Some("maxServiceTemp"),
                extract: |m: &Self| FieldValue::Text(m.max_service_temp.to_string()),
            },
            FieldDescriptor {
                key: "thermalExpansion",
                label: "Coefficient of Thermal Expansion",
                section: SectionId::Properties,
                info_key: Some("thermalExpansion"),
                extract: |m: &Self| FieldValue::Text(m.thermal_expansion.to_string()),
            },
            FieldDescriptor {
                key: "density",
                label: "Density",
                section: SectionId::Properties,
                info_key: Some("density"),
                extract: |m: &Self| FieldValue::Text(m.density.to_string()),
            },
            FieldDescriptor {
                key: "price",
                label: "Price (per kg)",
                section: SectionId::Properties,
                info_key: None,
                extract: |m: &Self| FieldValue::Text(m.price.to_string()),
            },
            FieldDescriptor {
                key: "printability",
                label: "Printability",
                section: SectionId::Printing,
                info_key: Some("printabilityRating"),
                extract: |m: &Self| rating(m.printability),
            },
            FieldDescriptor {
                key: "extruderTemp",
                label: "Extruder Temperature",
                section: SectionId::Printing,
                info_key: Some("extruderTemp"),
                extract: |m: &Self| FieldValue::text(&m.extruder_temp),
            },
            FieldDescriptor {
                key: "bedTemp",
                label: "Bed Temperature",
                section: SectionId::Printing,
                info_key: Some("bedTemp"),
                extract: |m: &Self| FieldValue::text(&m.bed_temp),
            },
            FieldDescriptor {
                key: "heatedBed",
                label: "Heated Bed",
                section: SectionId::Printing,
                info_key: Some("heatedBed"),
                extract: |m: &Self| FieldValue::Requirement(m.heated_bed),
            },
            FieldDescriptor {
                key: "buildSurfaces",
                label: "Build Surfaces",
                section: SectionId::Printing,
                info_key: None,
                extract: |m: &Self| FieldValue::list(&m.build_surfaces),
            },
            FieldDescriptor {
                key: "otherRequirements",
                label: "Other Requirements",
                section: SectionId::Printing,
                info_key: None,
                extract: |m: &Self| FieldValue::list(&m.other_requirements),
            },
            trait_row!(EasyToPrint, "easyToPrint", "Easy to Print"),
            trait_row!(Biodegradable, "biodegradable", "Biodegradable"),
            trait_row!(Rigid, "rigid", "Rigid"),
            trait_row!(Flexible, "flexible", "Flexible"),
            trait_row!(ImpactResistant, "impactResistant", "Impact Resistant"),
            trait_row!(HeatResistant, "heatResistant", "Heat Resistant"),
            trait_row!(ChemicalResistant, "chemicalResistant", "Chemical Resistant"),
            trait_row!(UvResistant, "uvResistant", "UV Resistant"),
            trait_row!(WaterResistant, "waterResistant", "Water Resistant"),
            trait_row!(FatigueResistant, "fatigueResistant", "Fatigue Resistant"),
            trait_row!(Dissolvable, "dissolvable", "Dissolvable"),
            trait_row!(FoodSafe, "foodSafe", "Food Safe"),
            trait_row!(Abrasive, "abrasive", "Abrasive"),
        ]
    }

    fn card_keys() -> &'static [&'static str] {
        &[
            "ultimateStrength",
            "stiffness",
            "durability",
            "printability",
            "extruderTemp",
            "bedTemp",
            "price",
        ]
    }

    fn traits(&self) -> Vec<(&'static str, bool)> {
        self.characteristic_flags()
            .into_iter()
            .map(|(t, enabled)| (t.label(), enabled))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_trait_is_false() {
        let mut m = GenericMaterial::new("Test");
        m.characteristics = vec![GenericTrait::Rigid];
        assert!(m.has(GenericTrait::Rigid));
        assert!(!m.has(GenericTrait::Flexible));

        let flags = m.characteristic_flags();
        assert_eq!(flags.len(), GenericTrait::ALL.len());
        assert_eq!(flags.iter().filter(|(_, on)| *on).count(), 1);
    }

    #[test]
    fn test_trait_rows_match_trait_ids() {
        let rows: Vec<_> = GenericMaterial::fields()
            .into_iter()
            .filter(|f| f.section == SectionId::Characteristics)
            .collect();
        assert_eq!(rows.len(), GenericTrait::ALL.len());
        for (row, t) in rows.iter().zip(GenericTrait::ALL) {
            assert_eq!(row.key, t.id());
            assert_eq!(row.label, t.label());
        }
    }

    #[test]
    fn test_ultimate_strength_uses_bar_scale() {
        let mut m = GenericMaterial::new("Test");
        m.ultimate_strength = BarMeasure::new(65.0, "MPa", 65.0, 80.0);
        let field = GenericMaterial::field("ultimateStrength").unwrap();
        assert_eq!(
            field.value(&m),
            FieldValue::Rated {
                label: "65 MPa".to_string(),
                value: 65.0,
                max: 80.0,
            }
        );
    }

    #[test]
    fn test_serde_camel_case() {
        let m = GenericMaterial::new("Test");
        let json = serde_json::to_value(&m).unwrap();
        assert!(json.get("ultimateStrength").is_some());
        assert!(json.get("heatedBed").is_some());
        assert!(json["ultimateStrength"].get("barMax").is_some());
    }
}
