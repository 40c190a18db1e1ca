//! Selection and comparison state
//!
//! Names are checked into a set; once at least [`MIN_COMPARE_SELECTION`]
//! are checked the view can switch to comparison mode, which narrows the
//! visible records to the checked subset. Leaving comparison mode clears
//! the selection.

use filamentdb_core::MaterialRecord;
use std::collections::BTreeSet;

/// Fewest selected materials that can be compared.
pub const MIN_COMPARE_SELECTION: usize = 2;

/// Checked material names and whether the view is comparing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: BTreeSet<String>,
    compare_mode: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check or uncheck a name. Ignored while comparing; returns whether the
    /// selection changed.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.compare_mode {
            tracing::warn!(name, "Selection change ignored while comparing");
            return false;
        }
        if !self.selected.remove(name) {
            self.selected.insert(name.to_string());
        }
        tracing::debug!(name, selected = self.selected.len(), "Selection toggled");
        true
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_comparing(&self) -> bool {
        self.compare_mode
    }

    /// Whether the compare action is enabled.
    pub fn can_compare(&self) -> bool {
        !self.compare_mode && self.selected.len() >= MIN_COMPARE_SELECTION
    }

    /// Switch to comparison mode. Inert below the selection threshold.
    pub fn enter_compare(&mut self) -> bool {
        if !self.can_compare() {
            tracing::warn!(
                selected = self.selected.len(),
                required = MIN_COMPARE_SELECTION,
                "Compare requested with too few selections"
            );
            return false;
        }
        self.compare_mode = true;
        tracing::debug!(selected = self.selected.len(), "Entered compare mode");
        true
    }

    /// Leave comparison mode and forget the selection.
    pub fn exit_compare(&mut self) {
        self.selected.clear();
        self.compare_mode = false;
        tracing::debug!("Exited compare mode");
    }

    /// Records to display: the whole dataset, or while comparing the
    /// selected records in dataset order.
    pub fn visible<'a, R: MaterialRecord>(&self, dataset: &'a [R]) -> Vec<&'a R> {
        dataset
            .iter()
            .filter(|m| !self.compare_mode || self.selected.contains(m.name()))
            .collect()
    }

    /// Checkboxes are hidden while comparing.
    pub fn show_checkboxes(&self) -> bool {
        !self.compare_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filamentdb_core::GenericMaterial;

    fn dataset() -> Vec<GenericMaterial> {
        ["PLA", "ABS", "PETG", "TPU"]
            .into_iter()
            .map(GenericMaterial::new)
            .collect()
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut state = SelectionState::new();
        state.toggle("PLA");
        let before = state.clone();
        state.toggle("ABS");
        state.toggle("ABS");
        assert_eq!(state, before);
    }

    #[test]
    fn test_single_selection_cannot_compare() {
        let mut state = SelectionState::new();
        state.toggle("PLA");
        assert!(!state.can_compare());
        assert!(!state.enter_compare());
        assert!(!state.is_comparing());
    }

    #[test]
    fn test_compare_keeps_dataset_order() {
        let data = dataset();
        let mut state = SelectionState::new();
        state.toggle("TPU");
        state.toggle("PLA");
        assert!(state.enter_compare());
        let names: Vec<_> = state.visible(&data).iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["PLA", "TPU"]);
        assert!(!state.show_checkboxes());
    }

    #[test]
    fn test_toggle_ignored_while_comparing() {
        let mut state = SelectionState::new();
        state.toggle("PLA");
        state.toggle("ABS");
        state.enter_compare();
        assert!(!state.toggle("PETG"));
        assert!(!state.is_selected("PETG"));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_exit_clears_selection() {
        let data = dataset();
        let mut state = SelectionState::new();
        state.toggle("PLA");
        state.toggle("ABS");
        state.enter_compare();
        state.exit_compare();
        assert!(state.is_empty());
        assert!(!state.is_comparing());
        assert_eq!(state.visible(&data).len(), data.len());
        assert!(data.iter().all(|m| !state.is_selected(&m.name)));
    }

    #[test]
    fn test_enter_twice_is_inert() {
        let mut state = SelectionState::new();
        state.toggle("PLA");
        state.toggle("ABS");
        assert!(state.enter_compare());
        assert!(!state.enter_compare());
        assert!(state.is_comparing());
    }
}
