use shelter_tally::ShelterStore;
use shelter_tally::domain::entities::ConnectionConfig;
use shelter_tally::error::AppError;
use shelter_tally::infrastructure::persistence::{MongoConnector, MongoShelterRepository};

fn local_config() -> ConnectionConfig {
    ConnectionConfig::new("localhost", 27017, "aac", "animals")
}

#[tokio::test]
async fn test_connect_rejects_incomplete_config() {
    let mut connector = MongoConnector::new(ConnectionConfig::new("", 27017, "aac", "animals"));

    let result = connector.connect("aacuser", "secret").await;

    assert!(matches!(result, Err(AppError::Config(_))));
    assert!(!connector.is_connected());
}

#[tokio::test]
async fn test_store_rejects_incomplete_config() {
    let result = ShelterStore::connect_to(
        ConnectionConfig::new("localhost", 27017, "aac", ""),
        "aacuser",
        "secret",
    )
    .await;

    assert!(matches!(result, Err(AppError::Config(_))));
}

#[tokio::test]
async fn test_close_before_connect() {
    let mut connector = MongoConnector::new(local_config());

    let result = connector.close().await;

    assert!(matches!(result, Err(AppError::NotConnected)));
}

#[tokio::test]
async fn test_collection_requires_connection() {
    let connector = MongoConnector::new(local_config());

    assert!(matches!(connector.collection(), Err(AppError::NotConnected)));
    assert!(matches!(
        MongoShelterRepository::from_connector(&connector),
        Err(AppError::NotConnected)
    ));
    assert!(matches!(connector.ping().await, Err(AppError::NotConnected)));
}

#[tokio::test]
async fn test_connect_then_close_lifecycle() {
    // Client creation is lazy, so no server is needed until the first operation.
    let mut connector = MongoConnector::new(local_config());

    connector.connect("aacuser", "secret").await.unwrap();
    assert!(connector.is_connected());

    {
        let collection = connector.collection().unwrap();
        assert_eq!(collection.name(), "animals");
    }

    connector.close().await.unwrap();
    assert!(!connector.is_connected());

    assert!(matches!(
        connector.connect("aacuser", "secret").await,
        Err(AppError::ConnectionClosed)
    ));
    assert!(matches!(
        connector.close().await,
        Err(AppError::ConnectionClosed)
    ));
}
