//! MongoDB persistence.
//!
//! - [`MongoConnector`] - Validated connect/close lifecycle for one collection
//! - [`MongoShelterRepository`] - Shelter record storage over that collection

pub mod mongo_connector;
pub mod mongo_shelter_repository;

pub use mongo_connector::MongoConnector;
pub use mongo_shelter_repository::MongoShelterRepository;
