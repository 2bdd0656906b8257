//! Core domain entities.
//!
//! Plain data structures shared by the two utilities in this crate.
//!
//! # Entity Types
//!
//! - [`LineRecord`] - A distinct input line with its occurrence count
//! - [`ShelterRecord`] - A schemaless animal shelter document
//! - [`UpdateSummary`], [`DeleteSummary`] - What a bulk write touched
//! - [`ConnectionConfig`] - Host, port, database and collection of a store

pub mod connection_config;
pub mod line_record;
pub mod shelter_record;

pub use connection_config::ConnectionConfig;
pub use line_record::LineRecord;
pub use shelter_record::{DeleteSummary, ID_FIELD, ShelterRecord, UpdateSummary};
