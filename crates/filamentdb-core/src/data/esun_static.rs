//! Static eSun material records.
//!
//! Values follow the manufacturer's published datasheets. `/` marks a value
//! the datasheet does not report.

use crate::data::esun::{EsunCharacteristics, EsunMaterial, EsunPrinterSettings, EsunProperties};
use crate::data::Requirement;

struct Props<'a> {
    density: &'a str,
    heat_distortion: &'a str,
    melt_flow: &'a str,
    tensile_strength: &'a str,
    elongation: &'a str,
    bending_strength: &'a str,
    flexural_modulus: &'a str,
    izod_impact: &'a str,
    weather_resistance: &'a str,
    printability: &'a str,
}

impl Props<'_> {
    fn build(&self) -> EsunProperties {
        EsunProperties {
            density: self.density.to_string(),
            heat_distortion: self.heat_distortion.to_string(),
            melt_flow: self.melt_flow.to_string(),
            tensile_strength: self.tensile_strength.to_string(),
            elongation: self.elongation.to_string(),
            bending_strength: self.bending_strength.to_string(),
            flexural_modulus: self.flexural_modulus.to_string(),
            izod_impact: self.izod_impact.to_string(),
            weather_resistance: self.weather_resistance.to_string(),
            printability: self.printability.to_string(),
        }
    }
}

fn settings(
    print_temp: &str,
    bed_temp: &str,
    fan_speed: &str,
    print_speed: &str,
    heat_bed_required: Requirement,
) -> EsunPrinterSettings {
    EsunPrinterSettings {
        print_temp: print_temp.to_string(),
        bed_temp: bed_temp.to_string(),
        fan_speed: fan_speed.to_string(),
        print_speed: print_speed.to_string(),
        heat_bed_required,
    }
}

pub fn load_esun_materials() -> Vec<EsunMaterial> {
    let mut out = Vec::new();

    // PLA+
    {
        let mut m = EsunMaterial::new("PLA+");
        m.properties = Props {
            density: "1.23 g/cm³",
            heat_distortion: "53 ℃",
            melt_flow: "5 g/10min (190 ℃/2.16 kg)",
            tensile_strength: "63 MPa",
            elongation: "20 %",
            bending_strength: "74 MPa",
            flexural_modulus: "1973 MPa",
            izod_impact: "9 kJ/m²",
            weather_resistance: "Fair",
            printability: "Excellent",
        }
        .build();
        m.printer_settings = settings("205 - 225 ℃", "60 - 80 ℃", "100 %", "40 - 100 mm/s", Requirement::Optional);
        m.characteristics = EsunCharacteristics {
            easy_to_print: true,
            high_strength: true,
            high_toughness: true,
            heat_resistant: false,
            flexible: false,
            impact_resistant: false,
            wear_resistant: false,
            uv_resistant: false,
            chemical_resistant: false,
            low_odor: true,
            low_warping: true,
            glossy_finish: true,
            matte_finish: false,
        };
        out.push(m);
    }

    // PLA Matte
    {
        let mut m = EsunMaterial::new("ePLA-Matte");
        m.properties = Props {
            density: "1.32 g/cm³",
            heat_distortion: "55 ℃",
            melt_flow: "8 g/10min (190 ℃/2.16 kg)",
            tensile_strength: "42 MPa",
            elongation: "8 %",
            bending_strength: "61 MPa",
            flexural_modulus: "2450 MPa",
            izod_impact: "5 kJ/m²",
            weather_resistance: "Fair",
            printability: "Excellent",
        }
        .build();
        m.printer_settings = settings("190 - 230 ℃", "45 - 60 ℃", "100 %", "40 - 100 mm/s", Requirement::Optional);
        m.characteristics = EsunCharacteristics {
            easy_to_print: true,
            high_strength: false,
            high_toughness: false,
            heat_resistant: false,
            flexible: false,
            impact_resistant: false,
            wear_resistant: false,
            uv_resistant: false,
            chemical_resistant: false,
            low_odor: true,
            low_warping: true,
            glossy_finish: false,
            matte_finish: true,
        };
        out.push(m);
    }

    // PETG
    {
        let mut m = EsunMaterial::new("PETG");
        m.properties = Props {
            density: "1.27 g/cm³",
            heat_distortion: "64 ℃",
            melt_flow: "15 g/10min (230 ℃/2.16 kg)",
            tensile_strength: "50 MPa",
            elongation: "83 %",
            bending_strength: "57 MPa",
            flexural_modulus: "1475 MPa",
            izod_impact: "8.5 kJ/m²",
            weather_resistance: "Good",
            printability: "Good",
        }
        .build();
        m.printer_settings = settings("230 - 250 ℃", "75 - 90 ℃", "50 - 100 %", "40 - 80 mm/s", Requirement::Required);
        m.characteristics = EsunCharacteristics {
            easy_to_print: true,
            high_strength: false,
            high_toughness: true,
            heat_resistant: false,
            flexible: false,
            impact_resistant: true,
            wear_resistant: false,
            uv_resistant: false,
            chemical_resistant: true,
            low_odor: true,
            low_warping: true,
            glossy_finish: true,
            matte_finish: false,
        };
        out.push(m);
    }

    // ABS+
    {
        let mut m = EsunMaterial::new("ABS+");
        m.properties = Props {
            density: "1.04 g/cm³",
            heat_distortion: "88 ℃",
            melt_flow: "20 g/10min (220 ℃/10 kg)",
            tensile_strength: "43 MPa",
            elongation: "22 %",
            bending_strength: "66 MPa",
            flexural_modulus: "2010 MPa",
            izod_impact: "24 kJ/m²",
            weather_resistance: "Fair",
            printability: "Good",
        }
        .build();
        m.printer_settings = settings("220 - 260 ℃", "90 - 110 ℃", "0 - 30 %", "40 - 80 mm/s", Requirement::Required);
        m.characteristics = EsunCharacteristics {
            easy_to_print: false,
            high_strength: false,
            high_toughness: true,
            heat_resistant: true,
            flexible: false,
            impact_resistant: true,
            wear_resistant: true,
            uv_resistant: false,
            chemical_resistant: false,
            low_odor: false,
            low_warping: false,
            glossy_finish: false,
            matte_finish: false,
        };
        out.push(m);
    }

    // ASA
    {
        let mut m = EsunMaterial::new("eASA");
        m.properties = Props {
            density: "1.07 g/cm³",
            heat_distortion: "91 ℃",
            melt_flow: "12 g/10min (220 ℃/10 kg)",
            tensile_strength: "47 MPa",
            elongation: "24 %",
            bending_strength: "70 MPa",
            flexural_modulus: "2100 MPa",
            izod_impact: "22 kJ/m²",
            weather_resistance: "Excellent",
            printability: "Good",
        }
        .build();
        m.printer_settings = settings("240 - 260 ℃", "90 - 110 ℃", "0 - 30 %", "40 - 80 mm/s", Requirement::Required);
        m.characteristics = EsunCharacteristics {
            easy_to_print: false,
            high_strength: false,
            high_toughness: true,
            heat_resistant: true,
            flexible: false,
            impact_resistant: true,
            wear_resistant: false,
            uv_resistant: true,
            chemical_resistant: true,
            low_odor: false,
            low_warping: false,
            glossy_finish: false,
            matte_finish: true,
        };
        out.push(m);
    }

    // TPU-95A
    {
        let mut m = EsunMaterial::new("eTPU-95A");
        m.properties = Props {
            density: "1.20 g/cm³",
            heat_distortion: "/",
            melt_flow: "/",
            tensile_strength: "31 MPa",
            elongation: "550 %",
            bending_strength: "/",
            flexural_modulus: "/",
            izod_impact: "/",
            weather_resistance: "Good",
            printability: "Fair",
        }
        .build();
        m.printer_settings = settings("200 - 220 ℃", "/", "100 %", "20 - 40 mm/s", Requirement::Optional);
        m.characteristics = EsunCharacteristics {
            easy_to_print: false,
            high_strength: false,
            high_toughness: true,
            heat_resistant: false,
            flexible: true,
            impact_resistant: true,
            wear_resistant: true,
            uv_resistant: false,
            chemical_resistant: true,
            low_odor: true,
            low_warping: true,
            glossy_finish: false,
            matte_finish: false,
        };
        out.push(m);
    }

    // PA-CF
    {
        let mut m = EsunMaterial::new("ePA-CF");
        m.properties = Props {
            density: "1.17 g/cm³",
            heat_distortion: "145 ℃",
            melt_flow: "/",
            tensile_strength: "82 MPa",
            elongation: "3.5 %",
            bending_strength: "125 MPa",
            flexural_modulus: "6800 MPa",
            izod_impact: "11 kJ/m²",
            weather_resistance: "Good",
            printability: "Fair",
        }
        .build();
        m.printer_settings = settings("260 - 290 ℃", "80 - 100 ℃", "0 - 20 %", "30 - 60 mm/s", Requirement::Required);
        m.characteristics = EsunCharacteristics {
            easy_to_print: false,
            high_strength: true,
            high_toughness: false,
            heat_resistant: true,
            flexible: false,
            impact_resistant: false,
            wear_resistant: true,
            uv_resistant: false,
            chemical_resistant: true,
            low_odor: false,
            low_warping: true,
            glossy_finish: false,
            matte_finish: true,
        };
        out.push(m);
    }

    // PC
    {
        let mut m = EsunMaterial::new("ePC");
        m.properties = Props {
            density: "1.20 g/cm³",
            heat_distortion: "112 ℃",
            melt_flow: "10 g/10min (300 ℃/1.2 kg)",
            tensile_strength: "58 MPa",
            elongation: "6 %",
            bending_strength: "90 MPa",
            flexural_modulus: "2300 MPa",
            izod_impact: "30 kJ/m²",
            weather_resistance: "Good",
            printability: "Fair",
        }
        .build();
        m.printer_settings = settings("250 - 280 ℃", "100 - 120 ℃", "0 - 20 %", "30 - 60 mm/s", Requirement::Required);
        m.characteristics = EsunCharacteristics {
            easy_to_print: false,
            high_strength: true,
            high_toughness: true,
            heat_resistant: true,
            flexible: false,
            impact_resistant: true,
            wear_resistant: false,
            uv_resistant: false,
            chemical_resistant: false,
            low_odor: false,
            low_warping: false,
            glossy_finish: true,
            matte_finish: false,
        };
        out.push(m);
    }

    out
}
