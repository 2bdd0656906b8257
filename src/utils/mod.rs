//! Helper functions used across the crate.
//!
//! - [`json_document`] - JSON input/output for shelter records

pub mod json_document;
