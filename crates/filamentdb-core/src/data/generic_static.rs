//! Static generic material records.
//!
//! Typical values compiled from manufacturer datasheets and common printing
//! guides. Individual spools vary; these describe the material class.

use crate::data::generic::{BarMeasure, GenericMaterial, GenericTrait, PriceRange, Quantity};
use crate::data::Requirement;

/// Scale shared by every ultimate strength bar, MPa.
const STRENGTH_SCALE: f64 = 80.0;

fn strength(mpa: f64) -> BarMeasure {
    BarMeasure::new(mpa, "MPa", mpa, STRENGTH_SCALE)
}

fn price(range: &str) -> PriceRange {
    PriceRange {
        range: range.to_string(),
        currency: "$".to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn load_generic_materials() -> Vec<GenericMaterial> {
    let mut out = Vec::new();

    // PLA
    {
        let mut m = GenericMaterial::new("PLA");
        m.description = "The default choice for most prints: easy, low-warp and available everywhere.".to_string();
        m.ultimate_strength = strength(65.0);
        m.stiffness = 7.5;
        m.durability = 4.0;
        m.max_service_temp = Quantity::new(52.0, "°C");
        m.thermal_expansion = Quantity::new(68.0, "µm/m-°C");
        m.density = Quantity::new(1.24, "g/cm³");
        m.price = price("10 - 40");
        m.printability = 9.0;
        m.extruder_temp = "190 - 220 °C".to_string();
        m.bed_temp = "45 - 60 °C".to_string();
        m.heated_bed = Requirement::Optional;
        m.build_surfaces = strings(&["Painter's Tape", "Glue Stick", "Glass Plate", "PEI"]);
        m.other_requirements = Vec::new();
        m.characteristics = vec![
            GenericTrait::EasyToPrint,
            GenericTrait::Biodegradable,
            GenericTrait::Rigid,
        ];
        out.push(m);
    }

    // ABS
    {
        let mut m = GenericMaterial::new("ABS");
        m.description = "Tough, heat-resistant and easy to post-process, but prone to warping.".to_string();
        m.ultimate_strength = strength(40.0);
        m.stiffness = 5.0;
        m.durability = 8.0;
        m.max_service_temp = Quantity::new(98.0, "°C");
        m.thermal_expansion = Quantity::new(90.0, "µm/m-°C");
        m.density = Quantity::new(1.04, "g/cm³");
        m.price = price("10 - 40");
        m.printability = 6.0;
        m.extruder_temp = "220 - 250 °C".to_string();
        m.bed_temp = "95 - 110 °C".to_string();
        m.heated_bed = Requirement::Required;
        m.build_surfaces = strings(&["Kapton Tape", "ABS Slurry", "PEI"]);
        m.other_requirements = strings(&["Enclosure recommended", "Ventilation recommended"]);
        m.characteristics = vec![
            GenericTrait::ImpactResistant,
            GenericTrait::HeatResistant,
            GenericTrait::FatigueResistant,
        ];
        out.push(m);
    }

    // PETG
    {
        let mut m = GenericMaterial::new("PETG");
        m.description = "Combines PLA's ease of printing with better toughness and chemical resistance.".to_string();
        m.ultimate_strength = strength(53.0);
        m.stiffness = 5.0;
        m.durability = 8.0;
        m.max_service_temp = Quantity::new(73.0, "°C");
        m.thermal_expansion = Quantity::new(60.0, "µm/m-°C");
        m.density = Quantity::new(1.23, "g/cm³");
        m.price = price("15 - 40");
        m.printability = 8.0;
        m.extruder_temp = "230 - 250 °C".to_string();
        m.bed_temp = "75 - 90 °C".to_string();
        m.heated_bed = Requirement::Required;
        m.build_surfaces = strings(&["Glue Stick", "Painter's Tape", "Textured PEI"]);
        m.other_requirements = Vec::new();
        m.characteristics = vec![
            GenericTrait::EasyToPrint,
            GenericTrait::ImpactResistant,
            GenericTrait::ChemicalResistant,
            GenericTrait::WaterResistant,
            GenericTrait::FoodSafe,
        ];
        out.push(m);
    }

    // ASA
    {
        let mut m = GenericMaterial::new("ASA");
        m.description = "An outdoor-grade alternative to ABS with strong UV resistance.".to_string();
        m.ultimate_strength = strength(55.0);
        m.stiffness = 6.0;
        m.durability = 8.0;
        m.max_service_temp = Quantity::new(95.0, "°C");
        m.thermal_expansion = Quantity::new(98.0, "µm/m-°C");
        m.density = Quantity::new(1.07, "g/cm³");
        m.price = price("20 - 45");
        m.printability = 6.0;
        m.extruder_temp = "235 - 255 °C".to_string();
        m.bed_temp = "90 - 110 °C".to_string();
        m.heated_bed = Requirement::Required;
        m.build_surfaces = strings(&["PEI", "ABS Slurry"]);
        m.other_requirements = strings(&["Enclosure recommended", "Ventilation recommended"]);
        m.characteristics = vec![
            GenericTrait::ImpactResistant,
            GenericTrait::HeatResistant,
            GenericTrait::UvResistant,
            GenericTrait::WaterResistant,
        ];
        out.push(m);
    }

    // Flexible (TPU)
    {
        let mut m = GenericMaterial::new("TPU");
        m.description = "Rubber-like thermoplastic elastomer for gaskets, grips and phone cases.".to_string();
        m.ultimate_strength = strength(26.0);
        m.stiffness = 1.0;
        m.durability = 9.0;
        m.max_service_temp = Quantity::new(60.0, "°C");
        m.thermal_expansion = Quantity::new(157.0, "µm/m-°C");
        m.density = Quantity::new(1.21, "g/cm³");
        m.price = price("30 - 70");
        m.printability = 4.0;
        m.extruder_temp = "210 - 230 °C".to_string();
        m.bed_temp = "30 - 60 °C".to_string();
        m.heated_bed = Requirement::Optional;
        m.build_surfaces = strings(&["Painter's Tape", "PEI"]);
        m.other_requirements = strings(&["Direct drive extruder recommended", "Print slowly"]);
        m.characteristics = vec![
            GenericTrait::Flexible,
            GenericTrait::ImpactResistant,
            GenericTrait::FatigueResistant,
            GenericTrait::ChemicalResistant,
        ];
        out.push(m);
    }

    // Nylon
    {
        let mut m = GenericMaterial::new("Nylon");
        m.description = "Strong, tough and wear resistant, with excellent layer bonding once dried.".to_string();
        m.ultimate_strength = strength(70.0);
        m.stiffness = 4.0;
        m.durability = 10.0;
        m.max_service_temp = Quantity::new(80.0, "°C");
        m.thermal_expansion = Quantity::new(95.0, "µm/m-°C");
        m.density = Quantity::new(1.14, "g/cm³");
        m.price = price("25 - 65");
        m.printability = 5.0;
        m.extruder_temp = "240 - 260 °C".to_string();
        m.bed_temp = "70 - 100 °C".to_string();
        m.heated_bed = Requirement::Required;
        m.build_surfaces = strings(&["Glue Stick", "Garolite"]);
        m.other_requirements = strings(&["Dry before printing", "Store with desiccant"]);
        m.characteristics = vec![
            GenericTrait::ImpactResistant,
            GenericTrait::FatigueResistant,
            GenericTrait::ChemicalResistant,
            GenericTrait::HeatResistant,
        ];
        out.push(m);
    }

    // Polycarbonate
    {
        let mut m = GenericMaterial::new("Polycarbonate");
        m.description = "One of the strongest desktop materials, with high heat resistance.".to_string();
        m.ultimate_strength = strength(72.0);
        m.stiffness = 6.0;
        m.durability = 10.0;
        m.max_service_temp = Quantity::new(121.0, "°C");
        m.thermal_expansion = Quantity::new(69.0, "µm/m-°C");
        m.density = Quantity::new(1.20, "g/cm³");
        m.price = price("40 - 75");
        m.printability = 4.0;
        m.extruder_temp = "260 - 310 °C".to_string();
        m.bed_temp = "80 - 120 °C".to_string();
        m.heated_bed = Requirement::Required;
        m.build_surfaces = strings(&["Glue Stick", "PEI"]);
        m.other_requirements = strings(&["Enclosure required", "All-metal hotend", "Dry before printing"]);
        m.characteristics = vec![
            GenericTrait::ImpactResistant,
            GenericTrait::HeatResistant,
            GenericTrait::Rigid,
        ];
        out.push(m);
    }

    // PVA
    {
        let mut m = GenericMaterial::new("PVA");
        m.description = "Water-soluble support material for complex dual-extrusion prints.".to_string();
        m.ultimate_strength = strength(78.0);
        m.stiffness = 3.0;
        m.durability = 7.0;
        m.max_service_temp = Quantity::new(75.0, "°C");
        m.thermal_expansion = Quantity::new(85.0, "µm/m-°C");
        m.density = Quantity::new(1.23, "g/cm³");
        m.price = price("40 - 110");
        m.printability = 5.0;
        m.extruder_temp = "185 - 200 °C".to_string();
        m.bed_temp = "45 - 60 °C".to_string();
        m.heated_bed = Requirement::Optional;
        m.build_surfaces = strings(&["PEI", "Painter's Tape"]);
        m.other_requirements = strings(&["Store with desiccant"]);
        m.characteristics = vec![GenericTrait::Dissolvable, GenericTrait::Biodegradable];
        out.push(m);
    }

    // HIPS
    {
        let mut m = GenericMaterial::new("HIPS");
        m.description = "Lightweight support material that dissolves in limonene, printed alongside ABS.".to_string();
        m.ultimate_strength = strength(32.0);
        m.stiffness = 5.0;
        m.durability = 6.0;
        m.max_service_temp = Quantity::new(100.0, "°C");
        m.thermal_expansion = Quantity::new(80.0, "µm/m-°C");
        m.density = Quantity::new(1.03, "g/cm³");
        m.price = price("20 - 40");
        m.printability = 6.0;
        m.extruder_temp = "230 - 245 °C".to_string();
        m.bed_temp = "100 - 115 °C".to_string();
        m.heated_bed = Requirement::Required;
        m.build_surfaces = strings(&["Glass Plate", "Kapton Tape"]);
        m.other_requirements = strings(&["Enclosure recommended"]);
        m.characteristics = vec![
            GenericTrait::Dissolvable,
            GenericTrait::ImpactResistant,
            GenericTrait::WaterResistant,
        ];
        out.push(m);
    }

    // Carbon fibre filled
    {
        let mut m = GenericMaterial::new("Carbon Fiber Filled");
        m.description = "Base polymers reinforced with chopped carbon fibre for stiff, dimensionally stable parts.".to_string();
        m.ultimate_strength = strength(45.0);
        m.stiffness = 10.0;
        m.durability = 3.0;
        m.max_service_temp = Quantity::new(52.0, "°C");
        m.thermal_expansion = Quantity::new(57.0, "µm/m-°C");
        m.density = Quantity::new(1.30, "g/cm³");
        m.price = price("30 - 80");
        m.printability = 8.0;
        m.extruder_temp = "200 - 230 °C".to_string();
        m.bed_temp = "45 - 60 °C".to_string();
        m.heated_bed = Requirement::Optional;
        m.build_surfaces = strings(&["Glue Stick", "Painter's Tape", "PEI"]);
        m.other_requirements = strings(&["Hardened steel nozzle"]);
        m.characteristics = vec![
            GenericTrait::EasyToPrint,
            GenericTrait::Rigid,
            GenericTrait::Abrasive,
        ];
        out.push(m);
    }

    out
}
