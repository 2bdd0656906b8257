//! Business logic services for the application layer.

pub mod frequency_service;
pub mod shelter_service;

pub use frequency_service::FrequencyService;
pub use shelter_service::ShelterService;
