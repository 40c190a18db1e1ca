//! Progress bar math
//!
//! Maps a `(value, max)` pair to a filled-bar percentage. The label shown
//! next to a bar is supplied by the caller and is never derived from the
//! numbers, so a table can show `"26.6 kJ/m²"` while charting `26.6`.

use serde::{Deserialize, Serialize};

/// Number of cosmetic tick segments overlaid on a bar.
pub const TICK_SEGMENTS: usize = 5;

/// What to do when a value falls outside `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarOverflow {
    /// Clamp the filled width to `[0, 100]` percent
    #[default]
    Clamp,
    /// Report the raw ratio, which may exceed 100 percent
    Allow,
}

impl std::fmt::Display for BarOverflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clamp => write!(f, "clamp"),
            Self::Allow => write!(f, "allow"),
        }
    }
}

/// A single bar: a value charted against a scale maximum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressBar {
    value: f64,
    max: f64,
    label: Option<String>,
}

impl ProgressBar {
    /// Create a bar. Returns `None` unless `max > 0` and both numbers are finite.
    pub fn new(value: f64, max: f64) -> Option<Self> {
        if !value.is_finite() || !max.is_finite() || max <= 0.0 {
            return None;
        }
        Some(Self {
            value,
            max,
            label: None,
        })
    }

    /// Attach a display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Unclamped `value / max * 100`.
    pub fn raw_percentage(&self) -> f64 {
        self.value / self.max * 100.0
    }

    /// Filled width in percent under the given overflow policy.
    pub fn percentage(&self, overflow: BarOverflow) -> f64 {
        let raw = self.raw_percentage();
        match overflow {
            BarOverflow::Clamp => raw.clamp(0.0, 100.0),
            BarOverflow::Allow => raw,
        }
    }

    /// Whether the value lies outside the bar's scale.
    pub fn overflows(&self) -> bool {
        self.value > self.max || self.value < 0.0
    }
}

/// Positions (in percent) of the interior tick marks.
pub fn tick_positions() -> Vec<f64> {
    (1..TICK_SEGMENTS)
        .map(|i| i as f64 * 100.0 / TICK_SEGMENTS as f64)
        .collect()
}
