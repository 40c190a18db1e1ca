//! Page composition
//!
//! A page shows one family either as a card grid or as a comparison table.
//! Switching view or family builds a fresh component, so selection,
//! section and dialog state never carry over.

use crate::ui::cell::BarStyle;
use crate::ui::grid::{GridView, MaterialGrid};
use crate::ui::table::{MaterialTable, TableView};
use filamentdb_core::{Catalog, CatalogError, MaterialFamily, MaterialRecord, SectionId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    Table,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grid => write!(f, "grid"),
            Self::Table => write!(f, "table"),
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "table" => Ok(Self::Table),
            _ => Err(format!("Unknown view mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewModel {
    Grid(GridView),
    Table(TableView),
}

/// A grid or table over one family's dataset.
pub trait CatalogView {
    fn family(&self) -> MaterialFamily;
    fn mode(&self) -> ViewMode;
    fn toggle_select(&mut self, name: &str) -> bool;
    fn compare(&mut self) -> bool;
    fn exit_compare(&mut self);

    fn toggle_section(&mut self, _section: SectionId) -> bool {
        false
    }

    fn toggle_info(&mut self, _key: &str) -> bool {
        false
    }

    fn close_info(&mut self) {}

    fn render(&self) -> ViewModel;
}

impl<R: MaterialRecord> CatalogView for MaterialGrid<'_, R> {
    fn family(&self) -> MaterialFamily {
        R::FAMILY
    }

    fn mode(&self) -> ViewMode {
        ViewMode::Grid
    }

    fn toggle_select(&mut self, name: &str) -> bool {
        MaterialGrid::toggle_select(self, name)
    }

    fn compare(&mut self) -> bool {
        MaterialGrid::compare(self)
    }

    fn exit_compare(&mut self) {
        MaterialGrid::exit_compare(self)
    }

    fn render(&self) -> ViewModel {
        ViewModel::Grid(MaterialGrid::render(self))
    }
}

impl<R: MaterialRecord> CatalogView for MaterialTable<'_, R> {
    fn family(&self) -> MaterialFamily {
        R::FAMILY
    }

    fn mode(&self) -> ViewMode {
        ViewMode::Table
    }

    fn toggle_select(&mut self, name: &str) -> bool {
        MaterialTable::toggle_select(self, name)
    }

    fn compare(&mut self) -> bool {
        MaterialTable::compare(self)
    }

    fn exit_compare(&mut self) {
        MaterialTable::exit_compare(self)
    }

    fn toggle_section(&mut self, section: SectionId) -> bool {
        MaterialTable::toggle_section(self, section)
    }

    fn toggle_info(&mut self, key: &str) -> bool {
        MaterialTable::toggle_info(self, key)
    }

    fn close_info(&mut self) {
        MaterialTable::close_info(self)
    }

    fn render(&self) -> ViewModel {
        ViewModel::Table(MaterialTable::render(self))
    }
}

fn build_view<'a, R: MaterialRecord + 'a>(
    dataset: &'a [R],
    mode: ViewMode,
    style: BarStyle,
) -> Box<dyn CatalogView + 'a> {
    match mode {
        ViewMode::Grid => Box::new(MaterialGrid::new(dataset).selectable(true).with_style(style)),
        ViewMode::Table => Box::new(MaterialTable::new(dataset).with_style(style)),
    }
}

/// The top-level route: a family, a view mode and the live component.
pub struct Page<'a> {
    catalog: &'a Catalog,
    family: MaterialFamily,
    mode: ViewMode,
    style: BarStyle,
    view: Box<dyn CatalogView + 'a>,
}

impl<'a> Page<'a> {
    pub fn new(catalog: &'a Catalog, family: MaterialFamily, mode: ViewMode, style: BarStyle) -> Self {
        Self {
            catalog,
            family,
            mode,
            style,
            view: Self::component(catalog, family, mode, style),
        }
    }

    fn component(
        catalog: &'a Catalog,
        family: MaterialFamily,
        mode: ViewMode,
        style: BarStyle,
    ) -> Box<dyn CatalogView + 'a> {
        match family {
            MaterialFamily::Generic => build_view(catalog.generic(), mode, style),
            MaterialFamily::Bambu => build_view(catalog.bambu(), mode, style),
            MaterialFamily::Esun => build_view(catalog.esun(), mode, style),
        }
    }

    fn rebuild(&mut self) {
        self.view = Self::component(self.catalog, self.family, self.mode, self.style);
        tracing::debug!(family = %self.family, mode = %self.mode, "Page view rebuilt");
    }

    pub fn family(&self) -> MaterialFamily {
        self.family
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switch between grid and table. Component state is discarded.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
        self.rebuild();
    }

    /// Show another family. Component state is discarded.
    pub fn set_family(&mut self, family: MaterialFamily) {
        self.family = family;
        self.rebuild();
    }

    /// Route by family identifier, as typed in a URL or on the command line.
    pub fn navigate(&mut self, family: &str) -> Result<(), CatalogError> {
        let family = family.parse()?;
        self.set_family(family);
        Ok(())
    }

    pub fn view(&self) -> &(dyn CatalogView + 'a) {
        self.view.as_ref()
    }

    pub fn view_mut(&mut self) -> &mut (dyn CatalogView + 'a) {
        self.view.as_mut()
    }

    pub fn render(&self) -> ViewModel {
        self.view.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filamentdb_core::catalog;

    #[test]
    fn test_switching_mode_discards_selection() {
        let mut page = Page::new(catalog(), MaterialFamily::Generic, ViewMode::Table, BarStyle::default());
        page.view_mut().toggle_select("PLA");
        page.view_mut().toggle_select("ABS");
        assert!(page.view_mut().compare());

        page.set_mode(ViewMode::Grid);
        match page.render() {
            ViewModel::Grid(grid) => {
                assert!(!grid.compare_mode);
                assert_eq!(grid.selected_count, 0);
                assert_eq!(grid.cards.len(), catalog().generic().len());
            }
            other => panic!("expected grid, got {other:?}"),
        }
    }

    #[test]
    fn test_navigate_unknown_family() {
        let mut page = Page::new(catalog(), MaterialFamily::Generic, ViewMode::Grid, BarStyle::default());
        assert!(page.navigate("prusament").is_err());
        assert_eq!(page.family(), MaterialFamily::Generic);
        page.navigate("esun").unwrap();
        assert_eq!(page.view().family(), MaterialFamily::Esun);
    }

    #[test]
    fn test_view_mode_parse() {
        assert_eq!("Table".parse::<ViewMode>().unwrap(), ViewMode::Table);
        assert!("list".parse::<ViewMode>().is_err());
    }
}
