//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ShelterRepository`] - Animal shelter record storage

pub mod shelter_repository;

pub use shelter_repository::ShelterRepository;

#[cfg(test)]
pub use shelter_repository::MockShelterRepository;
