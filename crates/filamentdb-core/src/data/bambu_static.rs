//! Static Bambu Lab material records.
//!
//! Values follow the vendor's technical data sheets (X-Y printed specimens
//! unless noted). Strings are kept exactly as published.

use crate::data::bambu::{BambuMaterial, BambuProperties};
use crate::data::Requirement;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn properties(
    toughness: &str,
    strength: &str,
    stiffness: &str,
    layer_adhesion: &str,
    heat_resistance: &str,
    water_absorption: &str,
) -> BambuProperties {
    BambuProperties {
        toughness: toughness.to_string(),
        strength: strength.to_string(),
        stiffness: stiffness.to_string(),
        layer_adhesion: layer_adhesion.to_string(),
        heat_resistance: heat_resistance.to_string(),
        water_absorption: water_absorption.to_string(),
    }
}

const STANDARD_NOZZLES: &str = "0.2, 0.4, 0.6, 0.8 mm; Stainless or Hardened Steel";
const HARDENED_NOZZLES: &str = "0.4, 0.6, 0.8 mm; Hardened Steel";

pub fn load_bambu_materials() -> Vec<BambuMaterial> {
    let mut out = Vec::new();

    // PLA Basic
    {
        let mut m = BambuMaterial::new("PLA Basic");
        m.properties = properties(
            "26.6 kJ/m²",
            "35 MPa",
            "2750 MPa",
            "31 MPa",
            "57 ℃",
            "0.43 %",
        );
        m.preprinting.drying_required = Requirement::Optional;
        m.preprinting.drying_condition =
            "Blast drying oven: 55 ℃, 8 h\nHeatbed: 65 - 75 ℃, 12 h".to_string();
        m.preprinting.ams_compatibility = "Yes".to_string();
        m.printer_settings.nozzle_size_material = STANDARD_NOZZLES.to_string();
        m.printer_settings.build_plate = strings(&[
            "Textured PEI Plate",
            "Cool Plate",
            "Engineering Plate",
            "High Temperature Plate",
        ]);
        m.printer_settings.adhesion_methods = strings(&["Glue Stick"]);
        m.printer_settings.print_speed = "< 300 mm/s".to_string();
        m.printer_settings.nozzle_temperature = "190 - 230 ℃".to_string();
        m.printer_settings.part_cooling_fan = "100 %".to_string();
        m.printer_settings.enclosure_required = Requirement::Optional;
        m.postprinting.seal_with_desiccant = Requirement::Optional;
        m.postprinting.annealing = "N/A".to_string();
        out.push(m);
    }

    // PLA Matte
    {
        let mut m = BambuMaterial::new("PLA Matte");
        m.properties = properties(
            "22.4 kJ/m²",
            "31 MPa",
            "2660 MPa",
            "28 MPa",
            "56 ℃",
            "0.57 %",
        );
        m.preprinting.drying_required = Requirement::Optional;
        m.preprinting.drying_condition =
            "Blast drying oven: 55 ℃, 8 h\nHeatbed: 65 - 75 ℃, 12 h".to_string();
        m.preprinting.ams_compatibility = "Yes".to_string();
        m.printer_settings.nozzle_size_material = STANDARD_NOZZLES.to_string();
        m.printer_settings.build_plate = strings(&[
            "Textured PEI Plate",
            "Cool Plate",
            "Engineering Plate",
        ]);
        m.printer_settings.adhesion_methods = strings(&["Glue Stick"]);
        m.printer_settings.print_speed = "< 300 mm/s".to_string();
        m.printer_settings.nozzle_temperature = "190 - 230 ℃".to_string();
        m.printer_settings.part_cooling_fan = "100 %".to_string();
        m.printer_settings.enclosure_required = Requirement::Optional;
        m.postprinting.seal_with_desiccant = Requirement::Optional;
        m.postprinting.annealing = "N/A".to_string();
        out.push(m);
    }

    // PETG HF
    {
        let mut m = BambuMaterial::new("PETG HF");
        m.properties = properties(
            "45.5 kJ/m²",
            "32 MPa",
            "1730 MPa",
            "24 MPa",
            "69 ℃",
            "0.40 %",
        );
        m.preprinting.drying_required = Requirement::Required;
        m.preprinting.drying_condition =
            "Blast drying oven: 65 ℃, 8 h\nHeatbed: 80 - 90 ℃, 12 h".to_string();
        m.preprinting.ams_compatibility = "Yes".to_string();
        m.printer_settings.nozzle_size_material = STANDARD_NOZZLES.to_string();
        m.printer_settings.build_plate = strings(&[
            "Textured PEI Plate",
            "Engineering Plate",
            "High Temperature Plate",
        ]);
        m.printer_settings.adhesion_methods = strings(&["Glue Stick", "Release Agent"]);
        m.printer_settings.print_speed = "< 300 mm/s".to_string();
        m.printer_settings.nozzle_temperature = "230 - 260 ℃".to_string();
        m.printer_settings.part_cooling_fan = "40 - 80 %".to_string();
        m.printer_settings.enclosure_required = Requirement::Optional;
        m.postprinting.seal_with_desiccant = Requirement::Required;
        m.postprinting.annealing = "N/A".to_string();
        out.push(m);
    }

    // ABS
    {
        let mut m = BambuMaterial::new("ABS");
        m.properties = properties(
            "39.3 kJ/m²",
            "33 MPa",
            "1880 MPa",
            "25 MPa",
            "87 ℃",
            "0.65 %",
        );
        m.preprinting.drying_required = Requirement::Optional;
        m.preprinting.drying_condition =
            "Blast drying oven: 80 ℃, 8 h\nHeatbed: 90 - 100 ℃, 12 h".to_string();
        m.preprinting.ams_compatibility = "Yes".to_string();
        m.printer_settings.nozzle_size_material = STANDARD_NOZZLES.to_string();
        m.printer_settings.build_plate = strings(&[
            "High Temperature Plate",
            "Textured PEI Plate",
            "Engineering Plate",
        ]);
        m.printer_settings.adhesion_methods = strings(&["Glue Stick"]);
        m.printer_settings.print_speed = "< 300 mm/s".to_string();
        m.printer_settings.nozzle_temperature = "240 - 280 ℃".to_string();
        m.printer_settings.part_cooling_fan = "0 - 80 %".to_string();
        m.printer_settings.enclosure_required = Requirement::Required;
        m.postprinting.seal_with_desiccant = Requirement::Required;
        m.postprinting.annealing = "80 ℃, 6 - 8 h".to_string();
        out.push(m);
    }

    // ASA
    {
        let mut m = BambuMaterial::new("ASA");
        m.properties = properties(
            "35.7 kJ/m²",
            "37 MPa",
            "2030 MPa",
            "26 MPa",
            "100 ℃",
            "0.45 %",
        );
        m.preprinting.drying_required = Requirement::Optional;
        m.preprinting.drying_condition =
            "Blast drying oven: 80 ℃, 8 h\nHeatbed: 90 - 100 ℃, 12 h".to_string();
        m.preprinting.ams_compatibility = "Yes".to_string();
        m.printer_settings.nozzle_size_material = STANDARD_NOZZLES.to_string();
        m.printer_settings.build_plate = strings(&[
            "High Temperature Plate",
            "Textured PEI Plate",
            "Engineering Plate",
        ]);
        m.printer_settings.adhesion_methods = strings(&["Glue Stick"]);
        m.printer_settings.print_speed = "< 250 mm/s".to_string();
        m.printer_settings.nozzle_temperature = "240 - 280 ℃".to_string();
        m.printer_settings.part_cooling_fan = "0 - 80 %".to_string();
        m.printer_settings.enclosure_required = Requirement::Required;
        m.postprinting.seal_with_desiccant = Requirement::Required;
        m.postprinting.annealing = "80 ℃, 6 - 8 h".to_string();
        out.push(m);
    }

    // TPU 95A HF
    {
        let mut m = BambuMaterial::new("TPU 95A HF");
        m.properties = properties(
            "N/A",
            "32.6 MPa",
            "26 MPa",
            "21.6 MPa",
            "N/A",
            "1.08 %",
        );
        m.preprinting.drying_required = Requirement::Required;
        m.preprinting.drying_condition =
            "Blast drying oven: 70 ℃, 8 h\nHeatbed: 80 - 90 ℃, 12 h".to_string();
        m.preprinting.ams_compatibility = "No".to_string();
        m.printer_settings.nozzle_size_material = "0.4, 0.6 mm; Stainless or Hardened Steel".to_string();
        m.printer_settings.build_plate = strings(&["Textured PEI Plate", "Cool Plate"]);
        m.printer_settings.adhesion_methods = strings(&["Glue Stick"]);
        m.printer_settings.print_speed = "< 100 mm/s".to_string();
        m.printer_settings.nozzle_temperature = "220 - 240 ℃".to_string();
        m.printer_settings.part_cooling_fan = "100 %".to_string();
        m.printer_settings.enclosure_required = Requirement::Optional;
        m.postprinting.seal_with_desiccant = Requirement::Required;
        m.postprinting.annealing = "N/A".to_string();
        out.push(m);
    }

    // PA6-CF
    {
        let mut m = BambuMaterial::new("PA6-CF");
        m.properties = properties(
            "40.2 kJ/m²",
            "103 MPa",
            "5460 MPa",
            "46 MPa",
            "186 ℃",
            "2.26 %",
        );
        m.preprinting.drying_required = Requirement::Required;
        m.preprinting.drying_condition =
            "Blast drying oven: 80 ℃, 12 h\nHeatbed: not recommended".to_string();
        m.preprinting.ams_compatibility = "Not recommended".to_string();
        m.printer_settings.nozzle_size_material = HARDENED_NOZZLES.to_string();
        m.printer_settings.build_plate = strings(&[
            "Engineering Plate",
            "High Temperature Plate",
            "Textured PEI Plate",
        ]);
        m.printer_settings.adhesion_methods = strings(&["Glue Stick"]);
        m.printer_settings.print_speed = "< 200 mm/s".to_string();
        m.printer_settings.nozzle_temperature = "260 - 290 ℃".to_string();
        m.printer_settings.part_cooling_fan = "0 - 40 %".to_string();
        m.printer_settings.enclosure_required = Requirement::Required;
        m.postprinting.seal_with_desiccant = Requirement::Required;
        m.postprinting.annealing = "80 - 100 ℃, 5 - 10 h".to_string();
        out.push(m);
    }

    // PC
    {
        let mut m = BambuMaterial::new("PC");
        m.properties = properties(
            "34.8 kJ/m²",
            "40 MPa",
            "2050 MPa",
            "35 MPa",
            "117 ℃",
            "0.24 %",
        );
        m.preprinting.drying_required = Requirement::Required;
        m.preprinting.drying_condition =
            "Blast drying oven: 80 ℃, 8 h\nHeatbed: 90 - 100 ℃, 12 h".to_string();
        m.preprinting.ams_compatibility = "Yes".to_string();
        m.printer_settings.nozzle_size_material = STANDARD_NOZZLES.to_string();
        m.printer_settings.build_plate = strings(&[
            "Engineering Plate",
            "Textured PEI Plate",
            "High Temperature Plate",
        ]);
        m.printer_settings.adhesion_methods = strings(&["Glue Stick"]);
        m.printer_settings.print_speed = "< 200 mm/s".to_string();
        m.printer_settings.nozzle_temperature = "260 - 280 ℃".to_string();
        m.printer_settings.part_cooling_fan = "0 - 40 %".to_string();
        m.printer_settings.enclosure_required = Requirement::Required;
        m.postprinting.seal_with_desiccant = Requirement::Required;
        m.postprinting.annealing = "90 - 100 ℃, 8 h".to_string();
        out.push(m);
    }

    out
}
