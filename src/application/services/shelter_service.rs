//! Create, read, update and delete for animal shelter records.

use std::sync::Arc;

use mongodb::bson::Document;
use tracing::{debug, warn};

use crate::domain::entities::{DeleteSummary, ID_FIELD, ShelterRecord, UpdateSummary};
use crate::domain::repositories::ShelterRepository;
use crate::error::AppError;

/// Service enforcing the input contract of the shelter record store.
///
/// Every operation rejects missing input with [`AppError::EmptyInput`]
/// before the repository is touched.
pub struct ShelterService<R: ShelterRepository> {
    repository: Arc<R>,
}

impl<R: ShelterRepository> ShelterService<R> {
    /// Creates a new shelter service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Inserts `record` as a new document.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyInput`] if `record` is `None` or has no fields.
    /// Returns [`AppError::Database`] if the insert fails.
    pub async fn create(&self, record: Option<ShelterRecord>) -> Result<bool, AppError> {
        let record = match record {
            Some(record) if !record.is_empty() => record,
            _ => {
                warn!("Rejected create: empty record");
                return Err(AppError::empty_input("save", "record"));
            }
        };

        debug!(fields = record.len(), "Inserting shelter record");
        self.repository.insert(record).await?;
        Ok(true)
    }

    /// Returns every record matching `query`. An empty query matches all.
    ///
    /// Results never carry the `_id` field.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyInput`] if `query` is `None`.
    /// Returns [`AppError::Database`] if the lookup fails.
    pub async fn read(&self, query: Option<Document>) -> Result<Vec<ShelterRecord>, AppError> {
        let query = query.ok_or_else(|| {
            warn!("Rejected read: no query");
            AppError::empty_input("read", "query")
        })?;

        debug!(?query, "Reading shelter records");
        let mut records = self.repository.find(query).await?;
        for record in &mut records {
            record.remove(ID_FIELD);
        }
        debug!(count = records.len(), "Read shelter records");
        Ok(records)
    }

    /// Sets the fields in `changes` on every record matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyInput`] if `query` is `None`, or if `changes`
    /// is `None` or has no fields.
    /// Returns [`AppError::Database`] if the update fails.
    pub async fn update(
        &self,
        query: Option<Document>,
        changes: Option<Document>,
    ) -> Result<UpdateSummary, AppError> {
        let query = query.ok_or_else(|| {
            warn!("Rejected update: no query");
            AppError::empty_input("update", "query")
        })?;
        let changes = match changes {
            Some(changes) if !changes.is_empty() => changes,
            _ => {
                warn!("Rejected update: no changes");
                return Err(AppError::empty_input("update", "changes"));
            }
        };

        debug!(?query, ?changes, "Updating shelter records");
        let summary = self.repository.update_many(query, changes).await?;
        debug!(
            matched = summary.matched,
            modified = summary.modified,
            "Updated shelter records"
        );
        Ok(summary)
    }

    /// Removes every record matching `query`. An empty query removes all.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyInput`] if `query` is `None`.
    /// Returns [`AppError::Database`] if the delete fails.
    pub async fn delete(&self, query: Option<Document>) -> Result<DeleteSummary, AppError> {
        let query = query.ok_or_else(|| {
            warn!("Rejected delete: no query");
            AppError::empty_input("delete", "query")
        })?;

        debug!(?query, "Deleting shelter records");
        let summary = self.repository.delete_many(query).await?;
        debug!(deleted = summary.deleted, "Deleted shelter records");
        Ok(summary)
    }
}
