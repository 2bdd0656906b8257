//! Animal shelter record store.
//!
//! Wires the fixed [`ConnectionConfig::animal_shelter`] target, a
//! [`MongoConnector`] and a [`ShelterService`] together.

use std::sync::Arc;

use crate::application::services::ShelterService;
use crate::domain::entities::ConnectionConfig;
use crate::error::AppError;
use crate::infrastructure::persistence::{MongoConnector, MongoShelterRepository};

/// A connected shelter store: the connector plus CRUD over its collection.
pub struct ShelterStore {
    connector: MongoConnector,
    service: ShelterService<MongoShelterRepository>,
}

impl ShelterStore {
    /// Connects to the animal shelter collection as `user`.
    ///
    /// # Errors
    ///
    /// See [`MongoConnector::connect`].
    pub async fn connect(user: &str, password: &str) -> Result<Self, AppError> {
        Self::connect_to(ConnectionConfig::animal_shelter(), user, password).await
    }

    /// Connects to an arbitrary collection with the same CRUD contract.
    ///
    /// # Errors
    ///
    /// See [`MongoConnector::connect`].
    pub async fn connect_to(
        config: ConnectionConfig,
        user: &str,
        password: &str,
    ) -> Result<Self, AppError> {
        let mut connector = MongoConnector::new(config);
        connector.connect(user, password).await?;

        let repository = MongoShelterRepository::from_connector(&connector)?;
        let service = ShelterService::new(Arc::new(repository));

        Ok(Self { connector, service })
    }

    pub fn service(&self) -> &ShelterService<MongoShelterRepository> {
        &self.service
    }

    pub fn config(&self) -> &ConnectionConfig {
        self.connector.config()
    }

    /// Checks that the server is reachable.
    ///
    /// # Errors
    ///
    /// See [`MongoConnector::ping`].
    pub async fn ping(&self) -> Result<(), AppError> {
        self.connector.ping().await
    }

    /// Releases the connection.
    ///
    /// # Errors
    ///
    /// See [`MongoConnector::close`].
    pub async fn close(mut self) -> Result<(), AppError> {
        self.connector.close().await
    }
}
