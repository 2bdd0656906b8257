//! Application layer services.
//!
//! Services sit between callers and the domain: they load inputs, apply the
//! input contract and hand work to repositories.
//!
//! # Available Services
//!
//! - [`services::frequency_service::FrequencyService`] - Line frequency reports
//! - [`services::shelter_service::ShelterService`] - Shelter record CRUD

pub mod services;
