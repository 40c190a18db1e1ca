//! Property info lookup
//!
//! Explanatory text for every property identifier shown in a comparison
//! table: what it means, how it is measured, why it matters, and optional
//! practical tips. Identifiers shared between families (for example
//! `density` or `bedTemp`) map to a single entry.

use crate::error::{CatalogError, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Explanatory content for one property identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyInfo {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub measurement: &'static str,
    pub importance: &'static str,
    /// Ordered advisory tips; `None` means the tips section is omitted.
    pub tips: Option<&'static [&'static str]>,
}

static PROPERTY_INFO: &[PropertyInfo] = &[
    // Bambu Lab properties
    PropertyInfo {
        key: "toughness",
        title: "Toughness",
        description: "The ability of a printed part to absorb energy and deform without fracturing.",
        measurement: "Charpy or Izod notched impact test, reported in kJ/m².",
        importance: "Tough parts survive drops, snap fits and repeated loading instead of cracking.",
        tips: Some(&[
            "Increase wall count rather than infill for tougher parts.",
            "Print hotter within the recommended range to improve layer fusion.",
        ]),
    },
    PropertyInfo {
        key: "strength",
        title: "Strength",
        description: "The maximum tensile stress the material withstands before breaking.",
        measurement: "Tensile test on printed dog-bone specimens (ISO 527), reported in MPa.",
        importance: "Determines how much load a functional part can carry.",
        tips: Some(&[
            "Orient parts so the main load runs along the layers, not across them.",
            "Higher infill and more perimeters raise the strength of a printed part.",
        ]),
    },
    PropertyInfo {
        key: "stiffness",
        title: "Stiffness",
        description: "Resistance of the material to elastic bending or stretching.",
        measurement: "Tensile or flexural modulus (ISO 527 / ISO 178), reported in MPa.",
        importance: "Stiff materials keep their shape under load; low stiffness suits flexible parts.",
        tips: None,
    },
    PropertyInfo {
        key: "layerAdhesion",
        title: "Layer Adhesion",
        description: "Strength of the bond between consecutive printed layers.",
        measurement: "Tensile test on specimens printed upright (Z direction), reported in MPa.",
        importance: "Layer adhesion is usually the weakest direction of a printed part.",
        tips: Some(&[
            "Reduce part cooling for materials with weak layer adhesion.",
            "An enclosure keeps layers warm and improves bonding.",
        ]),
    },
    PropertyInfo {
        key: "heatResistance",
        title: "Heat Resistance",
        description: "Temperature at which the material starts to soften under load.",
        measurement: "Heat deflection temperature (ISO 75) at 0.45 MPa, reported in ℃.",
        importance: "Parts used in cars, near motors or outdoors must stay below this temperature.",
        tips: Some(&["Annealing can raise the heat resistance of some materials."]),
    },
    PropertyInfo {
        key: "waterAbsorption",
        title: "Water Absorption",
        description: "How much moisture the material takes up from the environment.",
        measurement: "Weight gain after conditioning at 25 ℃ and 55% RH, reported in percent.",
        importance: "Wet filament causes stringing, bubbles and weak parts.",
        tips: Some(&[
            "Store hygroscopic filament in a sealed box with desiccant.",
            "Dry filament before printing if it has been exposed to air.",
        ]),
    },
    PropertyInfo {
        key: "drying",
        title: "Drying Required",
        description: "Whether the filament must be dried before printing.",
        measurement: "Vendor recommendation based on moisture sensitivity.",
        importance: "Printing wet filament degrades surface quality and strength.",
        tips: None,
    },
    PropertyInfo {
        key: "dryingCondition",
        title: "Drying Conditions",
        description: "Recommended temperature and duration for drying the filament.",
        measurement: "Vendor datasheet values for a blast oven and for a heated bed.",
        importance: "Drying too hot deforms the spool; too short leaves moisture behind.",
        tips: Some(&[
            "Keep the spool away from direct contact with the heat source.",
            "Print straight from a dry box after drying.",
        ]),
    },
    PropertyInfo {
        key: "amsCompatibility",
        title: "AMS Compatibility",
        description: "Whether the filament can be fed through the automatic material system.",
        measurement: "Vendor testing with the AMS feeder and buffer.",
        importance: "Brittle or very soft filaments can jam or break inside the feeder.",
        tips: None,
    },
    PropertyInfo {
        key: "nozzleSize",
        title: "Nozzle",
        description: "Recommended nozzle diameter and nozzle material.",
        measurement: "Vendor recommendation.",
        importance: "Abrasive fibre-filled filaments wear out brass nozzles quickly.",
        tips: Some(&["Use a hardened steel nozzle for carbon or glass fibre filaments."]),
    },
    PropertyInfo {
        key: "buildPlate",
        title: "Build Plate",
        description: "Build plates that give reliable first-layer adhesion.",
        measurement: "Vendor testing; the first plate listed is the preferred one.",
        importance: "The wrong plate causes warping or parts that cannot be removed.",
        tips: None,
    },
    PropertyInfo {
        key: "adhesionMethods",
        title: "Adhesion Methods",
        description: "Additional measures that improve bed adhesion.",
        measurement: "Vendor recommendation.",
        importance: "Glue stick also acts as a release agent for materials that bond too strongly.",
        tips: Some(&["Clean the plate with warm water and dish soap before applying glue."]),
    },
    PropertyInfo {
        key: "enclosure",
        title: "Enclosure",
        description: "Whether the printer should be enclosed while printing.",
        measurement: "Vendor recommendation based on warping tendency.",
        importance: "An enclosure keeps ambient temperature stable and reduces warping.",
        tips: Some(&["Open the lid for PLA to avoid heat creep."]),
    },
    PropertyInfo {
        key: "printSpeed",
        title: "Print Speed",
        description: "Recommended maximum printing speed.",
        measurement: "Vendor testing, reported in mm/s.",
        importance: "Printing faster than the melt rate allows causes under-extrusion.",
        tips: None,
    },
    PropertyInfo {
        key: "nozzleTemp",
        title: "Nozzle Temperature",
        description: "Recommended hotend temperature range.",
        measurement: "Vendor datasheet, reported in ℃.",
        importance: "Too cold gives weak layers; too hot gives stringing and degradation.",
        tips: Some(&["Print a temperature tower to find the best value for your printer."]),
    },
    PropertyInfo {
        key: "partCooling",
        title: "Part Cooling Fan",
        description: "Recommended part cooling fan speed.",
        measurement: "Vendor recommendation, reported in percent.",
        importance: "Cooling improves overhangs but weakens layer adhesion for some materials.",
        tips: None,
    },
    PropertyInfo {
        key: "desiccant",
        title: "Seal with Desiccant",
        description: "Whether the spool should be stored sealed with desiccant after printing.",
        measurement: "Vendor recommendation based on water absorption.",
        importance: "Prevents the filament from absorbing moisture between prints.",
        tips: None,
    },
    PropertyInfo {
        key: "annealing",
        title: "Annealing",
        description: "Heat treatment after printing to improve crystallinity.",
        measurement: "Vendor recommended temperature and duration.",
        importance: "Annealing raises heat resistance and strength at the cost of some shrinkage.",
        tips: Some(&[
            "Anneal on a flat surface to limit warping.",
            "Expect a few percent of dimensional change and plan tolerances accordingly.",
        ]),
    },
    // eSun properties
    PropertyInfo {
        key: "density",
        title: "Density",
        description: "Mass per unit volume of the material.",
        measurement: "ISO 1183, reported in g/cm³.",
        importance: "Denser materials give fewer metres per spool and heavier parts.",
        tips: None,
    },
    PropertyInfo {
        key: "heatDistortion",
        title: "Heat Distortion Temperature",
        description: "Temperature at which a loaded specimen deflects by a set amount.",
        measurement: "ISO 75 at 0.45 MPa, reported in ℃.",
        importance: "Indicates the highest temperature at which a part keeps its shape.",
        tips: None,
    },
    PropertyInfo {
        key: "meltFlow",
        title: "Melt Flow Index",
        description: "How easily the molten material flows.",
        measurement: "ISO 1133, grams extruded in 10 minutes at a set temperature and load.",
        importance: "Higher melt flow supports faster printing; lower flow gives stronger melts.",
        tips: None,
    },
    PropertyInfo {
        key: "tensileStrength",
        title: "Tensile Strength",
        description: "Maximum stress a specimen withstands while being stretched.",
        measurement: "ISO 527, reported in MPa.",
        importance: "The main indicator of how much pulling load a part can carry.",
        tips: None,
    },
    PropertyInfo {
        key: "elongation",
        title: "Elongation at Break",
        description: "How far a specimen stretches before it breaks.",
        measurement: "ISO 527, reported as percent of the original length.",
        importance: "High elongation means ductile parts that bend instead of snapping.",
        tips: None,
    },
    PropertyInfo {
        key: "bendingStrength",
        title: "Bending Strength",
        description: "Maximum stress a specimen withstands in bending.",
        measurement: "Three-point flexural test (ISO 178), reported in MPa.",
        importance: "Relevant for brackets, beams and other parts loaded in bending.",
        tips: None,
    },
    PropertyInfo {
        key: "flexuralModulus",
        title: "Flexural Modulus",
        description: "Stiffness of the material in bending.",
        measurement: "Three-point flexural test (ISO 178), reported in MPa.",
        importance: "Higher values mean parts flex less under the same load.",
        tips: None,
    },
    PropertyInfo {
        key: "izodImpact",
        title: "Izod Impact Strength",
        description: "Energy absorbed by a notched specimen struck by a pendulum.",
        measurement: "ISO 180, reported in kJ/m².",
        importance: "Indicates how well parts survive sudden impacts.",
        tips: Some(&["Values for flexible materials are often reported as no break."]),
    },
    PropertyInfo {
        key: "weatherResistance",
        title: "Weather Resistance",
        description: "Resistance to UV light, moisture and temperature cycling outdoors.",
        measurement: "Vendor rating from accelerated weathering tests.",
        importance: "Outdoor parts made from poorly rated materials fade and become brittle.",
        tips: None,
    },
    PropertyInfo {
        key: "printability",
        title: "Printability",
        description: "Overall ease of printing the material successfully.",
        measurement: "Qualitative rating from vendor testing or community experience.",
        importance: "Easy materials forgive imperfect tuning; difficult ones need an enclosure and care.",
        tips: None,
    },
    PropertyInfo {
        key: "printTemp",
        title: "Printing Temperature",
        description: "Recommended nozzle temperature range.",
        measurement: "Vendor datasheet, reported in ℃.",
        importance: "Staying inside the range gives good layer fusion without degradation.",
        tips: None,
    },
    PropertyInfo {
        key: "bedTemp",
        title: "Bed Temperature",
        description: "Recommended build plate temperature.",
        measurement: "Vendor datasheet, reported in ℃.",
        importance: "The right bed temperature keeps the first layer attached and limits warping.",
        tips: Some(&["Lower the bed temperature slightly if the first layers show elephant's foot."]),
    },
    PropertyInfo {
        key: "fanSpeed",
        title: "Fan Speed",
        description: "Recommended part cooling fan speed.",
        measurement: "Vendor recommendation, reported in percent.",
        importance: "Too much cooling warps and weakens engineering materials.",
        tips: None,
    },
    PropertyInfo {
        key: "heatBed",
        title: "Heated Bed",
        description: "Whether a heated build plate is needed.",
        measurement: "Vendor recommendation.",
        importance: "Materials that shrink while cooling detach from an unheated plate.",
        tips: None,
    },
    // Generic properties
    PropertyInfo {
        key: "ultimateStrength",
        title: "Ultimate Strength",
        description: "Maximum stress the material withstands before failing.",
        measurement: "Tensile test, reported in MPa; the bar is scaled to the strongest common material.",
        importance: "A quick way to compare how much load different materials can carry.",
        tips: None,
    },
    PropertyInfo {
        key: "durability",
        title: "Durability",
        description: "How well printed parts hold up to wear, impacts and repeated use.",
        measurement: "Relative rating on a 0-10 scale.",
        importance: "Durable materials suit functional parts that see daily use.",
        tips: None,
    },
    PropertyInfo {
        key: "stiffnessRating",
        title: "Stiffness",
        description: "How strongly a printed part resists bending compared with other material classes.",
        measurement: "Relative rating on a 0-10 scale.",
        importance: "Stiff materials suit brackets and frames; low ratings suit flexible parts.",
        tips: None,
    },
    PropertyInfo {
        key: "printabilityRating",
        title: "Printability",
        description: "How forgiving the material class is to print on a typical desktop printer.",
        measurement: "Relative rating on a 0-10 scale.",
        importance: "High ratings print well on default profiles; low ratings need tuning or an enclosure.",
        tips: None,
    },
    PropertyInfo {
        key: "maxServiceTemp",
        title: "Max Service Temperature",
        description: "Highest temperature at which the material keeps its mechanical properties.",
        measurement: "Typically derived from the glass transition or heat deflection temperature.",
        importance: "Parts exposed to heat above this temperature soften and deform.",
        tips: None,
    },
    PropertyInfo {
        key: "thermalExpansion",
        title: "Coefficient of Thermal Expansion",
        description: "How much the material grows as it heats up.",
        measurement: "Linear expansion per degree, reported in µm/m-°C.",
        importance: "High expansion means more shrinkage and warping as the print cools.",
        tips: Some(&["Materials with high expansion benefit from an enclosure and a brim."]),
    },
    PropertyInfo {
        key: "extruderTemp",
        title: "Extruder Temperature",
        description: "Typical nozzle temperature range for the material class.",
        measurement: "Range compiled from common manufacturer recommendations, in °C.",
        importance: "Use the spool's own recommendation first; the range is a starting point.",
        tips: None,
    },
    PropertyInfo {
        key: "heatedBed",
        title: "Heated Bed",
        description: "Whether the material class needs a heated build plate.",
        measurement: "Common practice across manufacturers.",
        importance: "Without a heated bed, warping materials lift off the plate.",
        tips: None,
    },
];

fn index() -> &'static HashMap<&'static str, &'static PropertyInfo> {
    static INDEX: OnceLock<HashMap<&'static str, &'static PropertyInfo>> = OnceLock::new();
    INDEX.get_or_init(|| PROPERTY_INFO.iter().map(|info| (info.key, info)).collect())
}

/// Look up the info entry for a property identifier.
pub fn lookup(key: &str) -> Option<&'static PropertyInfo> {
    index().get(key).copied()
}

/// Like [`lookup`], but an unknown identifier is an error.
pub fn get(key: &str) -> Result<&'static PropertyInfo> {
    lookup(key).ok_or_else(|| CatalogError::UnknownProperty(key.to_string()))
}

/// Whether an info entry exists for the identifier.
pub fn contains(key: &str) -> bool {
    index().contains_key(key)
}

/// All identifiers, in table order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    PROPERTY_INFO.iter().map(|info| info.key)
}

/// All entries, in table order.
pub fn all() -> &'static [PropertyInfo] {
    PROPERTY_INFO
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_no_duplicate_keys() {
        let mut seen = HashSet::new();
        for key in keys() {
            assert!(seen.insert(key), "duplicate property info key: {key}");
        }
        assert_eq!(index().len(), all().len());
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        let info = lookup("toughness").unwrap();
        assert_eq!(info.title, "Toughness");
        assert!(lookup("toughnes").is_none());
        assert!(!contains(""));
    }

    #[test]
    fn test_tips_keep_order() {
        let tips = lookup("waterAbsorption").unwrap().tips.unwrap();
        assert!(tips[0].starts_with("Store"));
        assert!(tips[1].starts_with("Dry"));
        assert!(lookup("stiffness").unwrap().tips.is_none());
    }

    #[test]
    fn test_entries_are_complete() {
        for info in all() {
            assert!(!info.title.is_empty(), "{}", info.key);
            assert!(!info.description.is_empty(), "{}", info.key);
            assert!(!info.measurement.is_empty(), "{}", info.key);
            assert!(!info.importance.is_empty(), "{}", info.key);
            if let Some(tips) = info.tips {
                assert!(!tips.is_empty(), "{} has an empty tips list", info.key);
            }
        }
    }
}
