//! Shelter record types.
//!
//! Records are schemaless BSON documents. The store only reports back
//! summaries of what a bulk update or delete touched.

use mongodb::bson::Document;
use serde::Serialize;

/// One document in the animal shelter collection.
pub type ShelterRecord = Document;

/// Field holding the store-assigned identifier, stripped from read results.
pub const ID_FIELD: &str = "_id";

/// Outcome of a bulk `$set` update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UpdateSummary {
    pub matched: u64,
    pub modified: u64,
}

/// Outcome of a bulk delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeleteSummary {
    pub deleted: u64,
}
