//! View state and view models
//!
//! State machines (selection, section expansion, info dialog) and the card,
//! grid, table and page models built on top of them.

pub mod card;
pub mod cell;
pub mod grid;
pub mod info_modal;
pub mod page;
pub mod sections;
pub mod selection;
pub mod table;
