//! # FilamentDB UI
//!
//! Component-local UI state and the view models a renderer consumes.
//! Every view model is a pure function of a dataset and the current state;
//! the datasets themselves are never touched.

pub mod ui;

pub use ui::{
    card::{CardField, CardView},
    cell::{BarStyle, Cell},
    grid::{GridView, MaterialGrid},
    info_modal::InfoModalState,
    page::{CatalogView, Page, ViewMode, ViewModel},
    sections::SectionState,
    selection::{SelectionState, MIN_COMPARE_SELECTION},
    table::{ColumnView, MaterialTable, RowView, SectionView, TableView},
};
