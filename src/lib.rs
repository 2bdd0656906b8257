//! # Shelter Tally
//!
//! Two independent utilities sharing one crate:
//!
//! - **Frequency counter** - counts duplicate lines in a text file and
//!   renders a full listing, a single-name lookup or a text histogram.
//! - **Shelter record store** - create, read, update and delete over the
//!   animal shelter collection of a MongoDB server.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the frequency table and repository traits
//! - **Application Layer** ([`application`]) - Services applying input rules
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB connector and repository
//!
//! ## Quick Start
//!
//! ```bash
//! # Frequency reports over ./source.txt
//! cargo run -- freq list
//! cargo run -- freq find Peppers
//! cargo run -- freq histogram
//!
//! # Shelter records
//! export SHELTER_USER="aacuser"
//! export SHELTER_PASSWORD="secret"
//! cargo run -- shelter read --query '{"animal_type": "Dog"}'
//! ```
//!
//! ## Configuration
//!
//! Runtime settings are loaded from environment variables via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod shelter_store;
pub mod utils;

pub use error::AppError;
pub use shelter_store::ShelterStore;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{FrequencyService, ShelterService};
    pub use crate::domain::entities::{
        ConnectionConfig, DeleteSummary, LineRecord, ShelterRecord, UpdateSummary,
    };
    pub use crate::domain::frequency_table::{FrequencyTable, FrequencyView};
    pub use crate::error::AppError;
    pub use crate::shelter_store::ShelterStore;
}
