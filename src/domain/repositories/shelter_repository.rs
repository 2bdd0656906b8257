//! Repository trait for animal shelter records.

use crate::domain::entities::{DeleteSummary, ShelterRecord, UpdateSummary};
use crate::error::AppError;
use async_trait::async_trait;
use mongodb::bson::Document;

/// Raw storage operations over one shelter collection.
///
/// Implementations forward directly to the store and do not check inputs;
/// that is the job of [`crate::application::services::ShelterService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoShelterRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShelterRepository: Send + Sync {
    /// Inserts one record as a new document.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on driver errors.
    async fn insert(&self, record: ShelterRecord) -> Result<(), AppError>;

    /// Returns every record matching `query`, without the `_id` field.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on driver errors.
    async fn find(&self, query: Document) -> Result<Vec<ShelterRecord>, AppError>;

    /// Applies `changes` as a `$set` to every record matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on driver errors.
    async fn update_many(
        &self,
        query: Document,
        changes: Document,
    ) -> Result<UpdateSummary, AppError>;

    /// Removes every record matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on driver errors.
    async fn delete_many(&self, query: Document) -> Result<DeleteSummary, AppError>;
}
