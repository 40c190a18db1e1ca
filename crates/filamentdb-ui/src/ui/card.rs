//! Summary card for one material.

use crate::ui::cell::{BarStyle, Cell};
use filamentdb_core::{FieldValue, MaterialRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardField {
    pub key: &'static str,
    pub label: &'static str,
    pub cell: Cell,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub name: String,
    pub summary: Option<String>,
    pub fields: Vec<CardField>,
    /// Labels of the characteristics that hold
    pub traits: Vec<&'static str>,
    pub selected: bool,
    pub show_checkbox: bool,
}

impl CardView {
    /// Build the card. List fields show only their primary entry and are
    /// left off the card when empty.
    pub fn from_record<R: MaterialRecord>(record: &R, style: &BarStyle) -> Self {
        let fields = R::card_keys()
            .iter()
            .filter_map(|key| R::field(key))
            .filter_map(|field| {
                let value = match field.value(record) {
                    FieldValue::List(items) => FieldValue::Text(items.into_iter().next()?),
                    other => other,
                };
                Some(CardField {
                    key: field.key,
                    label: field.label,
                    cell: Cell::from_value(value, style),
                })
            })
            .collect();

        Self {
            name: record.name().to_string(),
            summary: record.summary().map(str::to_string),
            fields,
            traits: record
                .traits()
                .into_iter()
                .filter(|(_, on)| *on)
                .map(|(label, _)| label)
                .collect(),
            selected: false,
            show_checkbox: false,
        }
    }

    pub fn field(&self, key: &str) -> Option<&CardField> {
        self.fields.iter().find(|f| f.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filamentdb_core::{catalog, BambuMaterial, GenericMaterial};

    #[test]
    fn test_card_keys_in_order() {
        let pla = catalog().find_generic("PLA").unwrap();
        let card = CardView::from_record(pla, &BarStyle::default());
        let keys: Vec<_> = card.fields.iter().map(|f| f.key).collect();
        assert_eq!(keys, GenericMaterial::card_keys());
        assert!(card.summary.is_some());
        assert!(card.traits.contains(&"Biodegradable"));
    }

    #[test]
    fn test_list_collapses_to_primary() {
        let pla = catalog().find_bambu("PLA Basic").unwrap();
        let card = CardView::from_record(pla, &BarStyle::default());
        assert_eq!(
            card.field("buildPlate").unwrap().cell,
            Cell::Text("Textured PEI Plate".to_string())
        );
    }

    #[test]
    fn test_empty_list_is_omitted() {
        let bare = BambuMaterial::new("Bare");
        let card = CardView::from_record(&bare, &BarStyle::default());
        assert!(card.field("buildPlate").is_none());
        assert!(card.field("toughness").is_some());
    }
}
