//! # FilamentDB Core
//!
//! Core types and static data for FilamentDB.
//! Provides the three material families (generic, Bambu Lab, eSun), the
//! datasets authored for each of them, lenient measurement parsing,
//! progress-bar math and the property info lookup used by the UI layer.

pub mod bar;
pub mod data;
pub mod error;
pub mod property_info;
pub mod record;

pub use bar::{BarOverflow, ProgressBar, TICK_SEGMENTS};

pub use data::{
    bambu::BambuMaterial,
    catalog,
    esun::{EsunCharacteristics, EsunMaterial},
    generic::{GenericMaterial, GenericTrait},
    measure::{is_not_applicable, parse_leading_number},
    Catalog, MaterialFamily, Requirement,
};

pub use error::{CatalogError, Result};

pub use property_info::PropertyInfo;

pub use record::{FieldDescriptor, FieldValue, MaterialRecord, SectionId};
