//! Comparison table
//!
//! One column per visible material, rows grouped into the family's
//! sections. Owns the selection, section and info dialog state for one
//! table instance.

use crate::ui::cell::{BarStyle, Cell};
use crate::ui::info_modal::InfoModalState;
use crate::ui::sections::SectionState;
use crate::ui::selection::SelectionState;
use filamentdb_core::property_info::{self, PropertyInfo};
use filamentdb_core::{MaterialFamily, MaterialRecord, SectionId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    pub name: String,
    pub selected: bool,
    pub show_checkbox: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub key: &'static str,
    pub label: &'static str,
    /// Set only when the info lookup has an entry; otherwise no affordance.
    pub info_key: Option<&'static str>,
    pub cells: Vec<Cell>,
}

impl RowView {
    pub fn info_available(&self) -> bool {
        self.info_key.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub id: SectionId,
    pub title: String,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub family: MaterialFamily,
    /// Every section of the family, for the navigation controls
    pub nav: Vec<SectionId>,
    pub expanded: Option<SectionId>,
    pub columns: Vec<ColumnView>,
    pub sections: Vec<SectionView>,
    pub compare_mode: bool,
    pub compare_enabled: bool,
    pub selected_count: usize,
    pub modal: Option<&'static PropertyInfo>,
}

impl TableView {
    pub fn section(&self, id: SectionId) -> Option<&SectionView> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn row(&self, key: &str) -> Option<&RowView> {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .find(|r| r.key == key)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

pub struct MaterialTable<'a, R: MaterialRecord> {
    dataset: &'a [R],
    selection: SelectionState,
    sections: SectionState,
    modal: InfoModalState,
    style: BarStyle,
}

impl<'a, R: MaterialRecord> MaterialTable<'a, R> {
    pub fn new(dataset: &'a [R]) -> Self {
        Self {
            dataset,
            selection: SelectionState::new(),
            sections: SectionState::new(),
            modal: InfoModalState::new(),
            style: BarStyle::default(),
        }
    }

    pub fn with_style(mut self, style: BarStyle) -> Self {
        self.style = style;
        self
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn sections(&self) -> &SectionState {
        &self.sections
    }

    pub fn modal(&self) -> &InfoModalState {
        &self.modal
    }

    pub fn toggle_select(&mut self, name: &str) -> bool {
        self.selection.toggle(name)
    }

    pub fn compare(&mut self) -> bool {
        self.selection.enter_compare()
    }

    pub fn exit_compare(&mut self) {
        self.selection.exit_compare();
    }

    /// Section nav click. Sections the family does not have are ignored.
    pub fn toggle_section(&mut self, section: SectionId) -> bool {
        if !R::sections().contains(&section) {
            tracing::warn!(family = %R::FAMILY, section = %section, "Section not in table");
            return false;
        }
        self.sections.toggle(section);
        true
    }

    /// Row label click.
    pub fn toggle_info(&mut self, key: &str) -> bool {
        self.modal.toggle(key)
    }

    pub fn open_info(&mut self, key: &str) -> bool {
        self.modal.open(key)
    }

    pub fn close_info(&mut self) {
        self.modal.close();
    }

    pub fn render(&self) -> TableView {
        let visible = self.selection.visible(self.dataset);
        let show_checkbox = self.selection.show_checkboxes();

        let columns = visible
            .iter()
            .map(|m| ColumnView {
                name: m.name().to_string(),
                selected: self.selection.is_selected(m.name()),
                show_checkbox,
            })
            .collect();

        let fields = R::fields();
        let sections = self
            .sections
            .visible_sections(R::sections())
            .into_iter()
            .map(|id| SectionView {
                id,
                title: id.to_string(),
                rows: fields
                    .iter()
                    .filter(|f| f.section == id)
                    .map(|f| RowView {
                        key: f.key,
                        label: f.label,
                        info_key: f.info_key.filter(|k| property_info::contains(k)),
                        cells: visible
                            .iter()
                            .map(|m| Cell::from_value(f.value(m), &self.style))
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        TableView {
            family: R::FAMILY,
            nav: R::sections().to_vec(),
            expanded: self.sections.expanded(),
            columns,
            sections,
            compare_mode: self.selection.is_comparing(),
            compare_enabled: self.selection.can_compare(),
            selected_count: self.selection.len(),
            modal: self.modal.content(),
        }
    }
}
