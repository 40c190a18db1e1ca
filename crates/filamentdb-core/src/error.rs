//! Error types for the catalog core.
//!
//! The catalog itself degrades gracefully (text fallback, suppressed info
//! dialogs, inert compare actions). These errors cover the edges: parsing
//! identifiers supplied from outside and validating authored datasets.

use thiserror::Error;

/// Errors produced by catalog lookups and dataset validation.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The material family identifier is not one of the known families.
    #[error("Unknown material family: {0}")]
    UnknownFamily(String),

    /// The section identifier is not one of the known sections.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// No property info entry exists for this identifier.
    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    /// A record in the dataset has an empty name.
    #[error("Empty material name in {family} dataset at index {index}")]
    EmptyName { family: String, index: usize },

    /// Two records in the same dataset share a name.
    #[error("Duplicate material name in {family} dataset: {name}")]
    DuplicateName { family: String, name: String },

    /// A rating is outside its declared scale.
    #[error("Rating out of range for '{field}' of {name}: {value}")]
    RatingOutOfRange {
        name: String,
        field: String,
        value: f64,
    },

    /// A field descriptor references a property without an info entry.
    #[error("Missing property info for '{key}' ({family})")]
    MissingPropertyInfo { family: String, key: String },

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
