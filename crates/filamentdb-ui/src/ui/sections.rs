//! Section expansion state
//!
//! `None` shows every section. Picking a section shows only that one;
//! picking it again goes back to showing everything.

use filamentdb_core::SectionId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionState {
    expanded: Option<SectionId>,
}

impl SectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded(&self) -> Option<SectionId> {
        self.expanded
    }

    /// Show only `section`, or everything if it was already the one shown.
    pub fn toggle(&mut self, section: SectionId) {
        self.expanded = if self.expanded == Some(section) {
            None
        } else {
            Some(section)
        };
        tracing::debug!(expanded = ?self.expanded, "Section toggled");
    }

    pub fn reset(&mut self) {
        self.expanded = None;
    }

    pub fn is_visible(&self, section: SectionId) -> bool {
        self.expanded.is_none_or(|s| s == section)
    }

    /// The sections of `all` currently shown, in their given order.
    pub fn visible_sections(&self, all: &[SectionId]) -> Vec<SectionId> {
        all.iter().copied().filter(|s| self.is_visible(*s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_full_view() {
        let mut state = SectionState::new();
        state.toggle(SectionId::Properties);
        assert_eq!(state.expanded(), Some(SectionId::Properties));
        assert!(!state.is_visible(SectionId::Printer));
        state.toggle(SectionId::Properties);
        assert_eq!(state.expanded(), None);
        assert!(state.is_visible(SectionId::Printer));
    }

    #[test]
    fn test_switching_sections_replaces() {
        let mut state = SectionState::new();
        state.toggle(SectionId::Properties);
        state.toggle(SectionId::Printer);
        assert_eq!(state.expanded(), Some(SectionId::Printer));
        let all = [SectionId::Properties, SectionId::Printer, SectionId::Characteristics];
        assert_eq!(state.visible_sections(&all), vec![SectionId::Printer]);
    }
}
