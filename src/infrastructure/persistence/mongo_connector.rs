//! Connect/close lifecycle for a single MongoDB collection.

use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection};
use tracing::{debug, info, warn};

use crate::config::mask_connection_string;
use crate::domain::entities::ConnectionConfig;
use crate::error::AppError;

enum ConnectionState {
    Disconnected,
    Connected {
        client: Client,
        collection: Collection<Document>,
    },
    Closed,
}

/// Opens and releases a client for the collection named by a [`ConnectionConfig`].
///
/// Lifecycle is `Disconnected -> Connected -> Closed`. A closed connector
/// cannot be reconnected; build a new one instead.
pub struct MongoConnector {
    config: ConnectionConfig,
    state: ConnectionState,
}

impl MongoConnector {
    /// Creates a disconnected connector for `config`.
    pub fn new(config: ConnectionConfig) -> Self {
        Self {
            config,
            state: ConnectionState::Disconnected,
        }
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.state, ConnectionState::Connected { .. })
    }

    /// Opens a client as `user` and selects the configured collection.
    ///
    /// The configuration is checked first; an incomplete one fails without
    /// any network activity. Calling this while connected is a no-op.
    ///
    /// # Errors
    ///
    /// - [`AppError::Config`] if a configuration field is missing
    /// - [`AppError::ConnectionClosed`] if [`Self::close`] was already called
    /// - [`AppError::Database`] if the driver rejects the connection string
    pub async fn connect(&mut self, user: &str, password: &str) -> Result<(), AppError> {
        match self.state {
            ConnectionState::Connected { .. } => {
                debug!("Already connected, skipping connect");
                return Ok(());
            }
            ConnectionState::Closed => return Err(AppError::ConnectionClosed),
            ConnectionState::Disconnected => {}
        }

        if let Err(e) = self.config.ensure_complete() {
            warn!("Refusing to connect: {}", e);
            return Err(e);
        }

        let uri = self.config.connection_string(user, password)?;
        info!("Connecting to {}", mask_connection_string(&uri));

        let client = Client::with_uri_str(&uri).await?;
        let collection = client
            .database(self.config.database())
            .collection::<Document>(self.config.collection());

        info!(
            database = self.config.database(),
            collection = self.config.collection(),
            "Connected to record store"
        );

        self.state = ConnectionState::Connected { client, collection };
        Ok(())
    }

    /// Handle to the configured collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotConnected`] unless connected.
    pub fn collection(&self) -> Result<Collection<Document>, AppError> {
        match &self.state {
            ConnectionState::Connected { collection, .. } => Ok(collection.clone()),
            ConnectionState::Closed => Err(AppError::ConnectionClosed),
            ConnectionState::Disconnected => Err(AppError::NotConnected),
        }
    }

    /// Round-trips a `ping` command to the server.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotConnected`] unless connected, and
    /// [`AppError::Database`] if the server cannot be reached.
    pub async fn ping(&self) -> Result<(), AppError> {
        let ConnectionState::Connected { client, .. } = &self.state else {
            return Err(AppError::NotConnected);
        };

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        debug!("Record store answered ping");
        Ok(())
    }

    /// Releases the client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotConnected`] if never connected and
    /// [`AppError::ConnectionClosed`] if already closed.
    pub async fn close(&mut self) -> Result<(), AppError> {
        match std::mem::replace(&mut self.state, ConnectionState::Closed) {
            ConnectionState::Connected { client, .. } => {
                client.shutdown().await;
                info!("Closed record store connection");
                Ok(())
            }
            ConnectionState::Disconnected => {
                self.state = ConnectionState::Disconnected;
                Err(AppError::NotConnected)
            }
            ConnectionState::Closed => Err(AppError::ConnectionClosed),
        }
    }
}
