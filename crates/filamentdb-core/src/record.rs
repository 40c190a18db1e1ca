//! Family-independent view of a material record.
//!
//! Each family keeps its own nominal schema, but exposes it through
//! [`MaterialRecord`]: an ordered list of field descriptors that a single
//! card/grid/table engine can render.

use crate::data::{MaterialFamily, Requirement};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

/// A named group of related rows in a comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Properties,
    Preprinting,
    Printing,
    Printer,
    Postprinting,
    Characteristics,
}

impl SectionId {
    /// Stable identifier used by navigation controls.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Properties => "properties",
            Self::Preprinting => "preprinting",
            Self::Printing => "printing",
            Self::Printer => "printer",
            Self::Postprinting => "postprinting",
            Self::Characteristics => "characteristics",
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Properties => write!(f, "Properties"),
            Self::Preprinting => write!(f, "Pre-printing"),
            Self::Printing => write!(f, "Printing"),
            Self::Printer => write!(f, "Printer Settings"),
            Self::Postprinting => write!(f, "Post-printing"),
            Self::Characteristics => write!(f, "Characteristics"),
        }
    }
}

impl std::str::FromStr for SectionId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "properties" => Ok(Self::Properties),
            "preprinting" => Ok(Self::Preprinting),
            "printing" => Ok(Self::Printing),
            "printer" => Ok(Self::Printer),
            "postprinting" => Ok(Self::Postprinting),
            "characteristics" => Ok(Self::Characteristics),
            _ => Err(CatalogError::UnknownSection(s.to_string())),
        }
    }
}

/// A value extracted from a record for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldValue {
    /// Authored free-form measurement, charted against `bar_max` when it parses
    Measure { raw: String, bar_max: Option<f64> },
    /// Explicit bar value with its own scale, shown with `label`
    Rated { label: String, value: f64, max: f64 },
    /// Plain text
    Text(String),
    /// Required/Optional badge
    Requirement(Requirement),
    /// Ordered list (first element is the primary entry)
    List(Vec<String>),
    /// Yes/no characteristic
    Flag(bool),
}

impl FieldValue {
    pub fn measure(raw: &str, bar_max: Option<f64>) -> Self {
        Self::Measure {
            raw: raw.to_string(),
            bar_max,
        }
    }

    pub fn text(raw: &str) -> Self {
        Self::Text(raw.to_string())
    }

    pub fn list(items: &[String]) -> Self {
        Self::List(items.to_vec())
    }
}

/// Describes one row of a family's table.
pub struct FieldDescriptor<R> {
    /// Row key; the literal property identifier
    pub key: &'static str,
    /// Row header label
    pub label: &'static str,
    /// Section the row belongs to
    pub section: SectionId,
    /// Property info entry for the label's info affordance
    pub info_key: Option<&'static str>,
    /// Pulls the value out of a record
    pub extract: fn(&R) -> FieldValue,
}

impl<R> FieldDescriptor<R> {
    pub fn value(&self, record: &R) -> FieldValue {
        (self.extract)(record)
    }
}

impl<R> Clone for FieldDescriptor<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            section: self.section,
            info_key: self.info_key,
            extract: self.extract,
        }
    }
}

impl<R> std::fmt::Debug for FieldDescriptor<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("section", &self.section)
            .field("info_key", &self.info_key)
            .finish()
    }
}

/// A material record that the card/grid/table engine can render.
pub trait MaterialRecord: Sized {
    /// Family this record type belongs to.
    const FAMILY: MaterialFamily;

    /// Unique name within the family; the selection and column key.
    fn name(&self) -> &str;

    /// Short blurb shown on cards, if the family has one.
    fn summary(&self) -> Option<&str> {
        None
    }

    /// Table sections in display order.
    fn sections() -> &'static [SectionId];

    /// Table rows in display order.
    fn fields() -> Vec<FieldDescriptor<Self>>;

    /// Field keys shown on a summary card.
    fn card_keys() -> &'static [&'static str];

    /// Explicit `(label, enabled)` characteristic list.
    fn traits(&self) -> Vec<(&'static str, bool)>;

    /// Look up a single descriptor by key.
    fn field(key: &str) -> Option<FieldDescriptor<Self>> {
        Self::fields().into_iter().find(|f| f.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_round_trip() {
        for section in [
            SectionId::Properties,
            SectionId::Preprinting,
            SectionId::Printing,
            SectionId::Printer,
            SectionId::Postprinting,
            SectionId::Characteristics,
        ] {
            assert_eq!(section.id().parse::<SectionId>().unwrap(), section);
        }
        assert!("settings".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_section_display() {
        assert_eq!(SectionId::Printer.to_string(), "Printer Settings");
        assert_eq!(SectionId::Postprinting.to_string(), "Post-printing");
    }
}
