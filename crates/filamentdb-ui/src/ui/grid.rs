//! Card grid
//!
//! Lays out one card per visible material. A selectable grid carries
//! checkboxes and the compare/exit actions.

use crate::ui::card::CardView;
use crate::ui::cell::BarStyle;
use crate::ui::selection::SelectionState;
use filamentdb_core::{MaterialFamily, MaterialRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridView {
    pub family: MaterialFamily,
    pub cards: Vec<CardView>,
    pub selectable: bool,
    pub compare_mode: bool,
    pub compare_enabled: bool,
    pub selected_count: usize,
}

impl GridView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

pub struct MaterialGrid<'a, R: MaterialRecord> {
    dataset: &'a [R],
    selectable: bool,
    selection: SelectionState,
    style: BarStyle,
}

impl<'a, R: MaterialRecord> MaterialGrid<'a, R> {
    pub fn new(dataset: &'a [R]) -> Self {
        Self {
            dataset,
            selectable: false,
            selection: SelectionState::new(),
            style: BarStyle::default(),
        }
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn with_style(mut self, style: BarStyle) -> Self {
        self.style = style;
        self
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Check or uncheck a card. Inert on a grid without selection.
    pub fn toggle_select(&mut self, name: &str) -> bool {
        if !self.selectable {
            return false;
        }
        self.selection.toggle(name)
    }

    pub fn compare(&mut self) -> bool {
        self.selectable && self.selection.enter_compare()
    }

    pub fn exit_compare(&mut self) {
        self.selection.exit_compare();
    }

    pub fn render(&self) -> GridView {
        let show_checkbox = self.selectable && self.selection.show_checkboxes();
        let cards = self
            .selection
            .visible(self.dataset)
            .into_iter()
            .map(|record| {
                let mut card = CardView::from_record(record, &self.style);
                card.selected = self.selection.is_selected(record.name());
                card.show_checkbox = show_checkbox;
                card
            })
            .collect();

        GridView {
            family: R::FAMILY,
            cards,
            selectable: self.selectable,
            compare_mode: self.selection.is_comparing(),
            compare_enabled: self.selectable && self.selection.can_compare(),
            selected_count: self.selection.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filamentdb_core::catalog;

    #[test]
    fn test_plain_grid_ignores_selection() {
        let mut grid = MaterialGrid::new(catalog().bambu());
        assert!(!grid.toggle_select("PLA Basic"));
        let view = grid.render();
        assert_eq!(view.cards.len(), catalog().bambu().len());
        assert!(view.cards.iter().all(|c| !c.show_checkbox));
        assert!(!view.compare_enabled);
    }

    #[test]
    fn test_compare_narrows_cards() {
        let mut grid = MaterialGrid::new(catalog().generic()).selectable(true);
        grid.toggle_select("ABS");
        grid.toggle_select("PLA");
        assert!(grid.render().compare_enabled);
        assert!(grid.compare());

        let view = grid.render();
        let names: Vec<_> = view.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["PLA", "ABS"]);
        assert!(view.cards.iter().all(|c| c.selected && !c.show_checkbox));
    }
}
