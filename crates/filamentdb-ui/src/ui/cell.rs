//! Display cells
//!
//! Converts a [`FieldValue`] into what a renderer draws. Measures become
//! bars only when the authored string parses and the field has a bar scale;
//! everything else is shown as the authored text.

use filamentdb_core::{bar, parse_leading_number, BarOverflow, FieldValue, ProgressBar, Requirement};
use serde::{Deserialize, Serialize};

/// How bars are derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarStyle {
    pub overflow: BarOverflow,
    pub ticks: bool,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            overflow: BarOverflow::Clamp,
            ticks: true,
        }
    }
}

impl BarStyle {
    fn tick_positions(&self) -> Vec<f64> {
        if self.ticks {
            bar::tick_positions()
        } else {
            Vec::new()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Cell {
    /// Filled bar with the authored label
    Bar {
        label: String,
        percent: f64,
        ticks: Vec<f64>,
    },
    Text(String),
    List(Vec<String>),
    Check(bool),
    Badge(Requirement),
}

impl Cell {
    pub fn from_value(value: FieldValue, style: &BarStyle) -> Self {
        match value {
            FieldValue::Measure { raw, bar_max } => {
                let bar = bar_max.and_then(|max| ProgressBar::new(parse_leading_number(&raw)?, max));
                match bar {
                    Some(bar) => Self::bar(bar.with_label(raw), style),
                    None => Self::Text(raw),
                }
            }
            FieldValue::Rated { label, value, max } => match ProgressBar::new(value, max) {
                Some(bar) => Self::bar(bar.with_label(label), style),
                None => Self::Text(label),
            },
            FieldValue::Text(text) => Self::Text(text),
            FieldValue::Requirement(r) => Self::Badge(r),
            FieldValue::List(items) => Self::List(items),
            FieldValue::Flag(on) => Self::Check(on),
        }
    }

    fn bar(bar: ProgressBar, style: &BarStyle) -> Self {
        Self::Bar {
            percent: bar.percentage(style.overflow),
            label: bar.label().unwrap_or_default().to_string(),
            ticks: style.tick_positions(),
        }
    }

    pub fn is_bar(&self) -> bool {
        matches!(self, Self::Bar { .. })
    }

    /// Plain-text rendering of the cell.
    pub fn display_text(&self) -> String {
        match self {
            Self::Bar { label, .. } => label.clone(),
            Self::Text(text) => text.clone(),
            Self::List(items) => items.join(", "),
            Self::Check(true) => "Yes".to_string(),
            Self::Check(false) => "No".to_string(),
            Self::Badge(r) => r.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_with_scale_becomes_bar() {
        let cell = Cell::from_value(FieldValue::measure("26.6 kJ/m²", Some(80.0)), &BarStyle::default());
        match cell {
            Cell::Bar { label, percent, ticks } => {
                assert_eq!(label, "26.6 kJ/m²");
                assert!((percent - 33.25).abs() < 1e-9);
                assert_eq!(ticks, vec![20.0, 40.0, 60.0, 80.0]);
            }
            other => panic!("expected bar, got {other:?}"),
        }
    }

    #[test]
    fn test_sentinel_falls_back_to_text() {
        for raw in ["N/A", "/"] {
            let cell = Cell::from_value(FieldValue::measure(raw, Some(80.0)), &BarStyle::default());
            assert_eq!(cell, Cell::Text(raw.to_string()));
        }
    }

    #[test]
    fn test_measure_without_scale_is_text() {
        let cell = Cell::from_value(FieldValue::measure("0.43 %", None), &BarStyle::default());
        assert_eq!(cell, Cell::Text("0.43 %".to_string()));
    }

    #[test]
    fn test_overflow_policy_applies() {
        let value = FieldValue::measure("300 ℃", Some(250.0));
        let clamped = Cell::from_value(value.clone(), &BarStyle::default());
        let allowed = Cell::from_value(
            value,
            &BarStyle {
                overflow: BarOverflow::Allow,
                ticks: false,
            },
        );
        assert!(matches!(clamped, Cell::Bar { percent, .. } if percent == 100.0));
        assert!(matches!(allowed, Cell::Bar { percent, ref ticks, .. } if percent > 100.0 && ticks.is_empty()));
    }

    #[test]
    fn test_display_text() {
        assert_eq!(Cell::Check(true).display_text(), "Yes");
        assert_eq!(Cell::Badge(Requirement::Required).display_text(), "Required");
        assert_eq!(
            Cell::List(vec!["Cool Plate".into(), "PEI".into()]).display_text(),
            "Cool Plate, PEI"
        );
    }
}
