//! MongoDB implementation of the shelter repository.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc};
use mongodb::results::{DeleteResult, UpdateResult};

use crate::domain::entities::{DeleteSummary, ShelterRecord, UpdateSummary};
use crate::domain::repositories::ShelterRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::MongoConnector;

/// MongoDB repository over a single shelter collection.
pub struct MongoShelterRepository {
    collection: Collection<Document>,
}

impl MongoShelterRepository {
    /// Creates a repository over an already selected collection.
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }

    /// Creates a repository over the collection a connector is attached to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotConnected`] if the connector has no open client.
    pub fn from_connector(connector: &MongoConnector) -> Result<Self, AppError> {
        Ok(Self::new(connector.collection()?))
    }
}

impl From<UpdateResult> for UpdateSummary {
    fn from(result: UpdateResult) -> Self {
        Self {
            matched: result.matched_count,
            modified: result.modified_count,
        }
    }
}

impl From<DeleteResult> for DeleteSummary {
    fn from(result: DeleteResult) -> Self {
        Self {
            deleted: result.deleted_count,
        }
    }
}

#[async_trait]
impl ShelterRepository for MongoShelterRepository {
    async fn insert(&self, record: ShelterRecord) -> Result<(), AppError> {
        self.collection.insert_one(record).await?;
        Ok(())
    }

    async fn find(&self, query: Document) -> Result<Vec<ShelterRecord>, AppError> {
        let cursor = self
            .collection
            .find(query)
            .projection(doc! { "_id": 0 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn update_many(
        &self,
        query: Document,
        changes: Document,
    ) -> Result<UpdateSummary, AppError> {
        let result = self
            .collection
            .update_many(query, doc! { "$set": changes })
            .await?;

        Ok(result.into())
    }

    async fn delete_many(&self, query: Document) -> Result<DeleteSummary, AppError> {
        let result = self.collection.delete_many(query).await?;
        Ok(result.into())
    }
}
