//! Domain layer containing entities, the frequency table and repository traits.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`frequency_table`] - Line counting and the three text views over it
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Input rules live in services (see [`crate::application::services`])

pub mod entities;
pub mod frequency_table;
pub mod repositories;
