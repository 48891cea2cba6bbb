//! Integration tests for the connection bootstrapper
//!
//! These tests verify that:
//! - One client handle is created and reused across calls
//! - Database and collection creation is idempotent
//! - Every collection is partitioned on /environmentId
//! - An empty collection id fails before any collection call
//! - Concurrent first calls share a single handle

mod common;

use common::{fixture, fixture_with_delay, is_configuration_error, Call};
use cosmos_bootstrap::adapters::cosmosdb::JsonSettings;
use cosmos_bootstrap::adapters::database::{ConnectionPolicy, ResourceStatus};
use cosmos_bootstrap::cli::commands::ensure::ensure_collections;
use cosmos_bootstrap::core::{ConnectionBootstrap, PARTITION_KEY};
use cosmos_bootstrap::domain::{BootstrapError, CosmosDbError};
use futures::future::join_all;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_sessions_scenario() {
    let fx = fixture("AppDb");

    let first = fx.connection.initialize("Sessions").await.unwrap();
    assert_eq!(
        fx.state.calls(),
        vec![
            Call::Database("AppDb".to_string()),
            Call::Collection {
                database: "AppDb".to_string(),
                collection: "Sessions".to_string(),
                partition_key_path: "/environmentId".to_string(),
            },
        ]
    );
    assert_eq!(
        fx.state.partition_key_of("AppDb", "Sessions"),
        Some("/environmentId".to_string())
    );

    let second = fx.connection.initialize("Sessions").await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    // Every call talks to the service again, no caching of existence
    assert_eq!(fx.state.calls().len(), 4);
    assert_eq!(fx.created.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_handle_reused_across_collections() {
    let fx = fixture("AppDb");

    let orders = fx.connection.initialize("orders").await.unwrap();
    let sessions = fx.connection.initialize("Sessions").await.unwrap();
    let users = fx.connection.initialize("users").await.unwrap();

    assert!(Arc::ptr_eq(&orders, &sessions));
    assert!(Arc::ptr_eq(&orders, &users));
    assert_eq!(orders.serial, 0);
    assert_eq!(fx.created.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_handle_built_with_gateway_https_and_camel_case() {
    let fx = fixture("AppDb");

    let client = fx.connection.initialize("orders").await.unwrap();
    assert_eq!(client.policy, ConnectionPolicy::gateway_https());
    assert_eq!(client.serializer, JsonSettings::camel_case());
}

#[tokio::test]
async fn test_partition_key_is_fixed() {
    let fx = fixture("AppDb");

    for collection in ["orders", "Sessions", "audit-log"] {
        fx.connection.initialize(collection).await.unwrap();
        assert_eq!(
            fx.state.partition_key_of("AppDb", collection),
            Some(format!("/{PARTITION_KEY}"))
        );
    }
}

#[tokio::test]
async fn test_empty_collection_id_fails_before_collection_call() {
    let fx = fixture("AppDb");

    let err = fx.connection.initialize("").await.unwrap_err();
    assert!(is_configuration_error(&err));

    // The database check still happens; the collection check never does
    assert_eq!(fx.state.calls(), vec![Call::Database("AppDb".to_string())]);
    assert_eq!(fx.state.collection_calls(), 0);
}

#[tokio::test]
async fn test_empty_collection_id_after_success_keeps_handle() {
    let fx = fixture("AppDb");

    let handle = fx.connection.initialize("orders").await.unwrap();
    assert!(fx.connection.initialize("").await.is_err());

    let again = fx.connection.initialize("orders").await.unwrap();
    assert!(Arc::ptr_eq(&handle, &again));
}

#[tokio::test]
async fn test_idempotent_repeat_reports_created_then_exists() {
    let fx = fixture("AppDb");

    fx.connection.initialize("orders").await.unwrap();
    fx.connection.initialize("orders").await.unwrap();

    assert_eq!(
        fx.state.database_statuses(),
        vec![ResourceStatus::Created, ResourceStatus::AlreadyExists]
    );
    assert_eq!(
        fx.state.collection_statuses(),
        vec![ResourceStatus::Created, ResourceStatus::AlreadyExists]
    );
    assert_eq!(
        fx.state.partition_key_of("AppDb", "orders"),
        Some("/environmentId".to_string())
    );
}

#[tokio::test]
async fn test_concurrent_first_calls_share_one_handle() {
    let fx = fixture_with_delay("AppDb", Duration::from_millis(20));
    let connection = Arc::new(fx.connection);

    let tasks = ["orders", "Sessions", "users", "audit", "billing"]
        .into_iter()
        .map(|collection| {
            let connection = Arc::clone(&connection);
            tokio::spawn(async move { connection.initialize(collection).await })
        });

    let handles: Vec<_> = join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .collect();

    assert_eq!(fx.created.load(Ordering::SeqCst), 1);
    for handle in &handles {
        assert!(Arc::ptr_eq(handle, &handles[0]));
    }

    // Each caller's collection id stayed its own
    for collection in ["orders", "Sessions", "users", "audit", "billing"] {
        assert!(fx.state.partition_key_of("AppDb", collection).is_some());
    }
}

#[tokio::test]
async fn test_service_error_propagates_unchanged() {
    let fx = fixture("AppDb");
    fx.state.reject_databases();

    let err = fx.connection.initialize("orders").await.unwrap_err();
    match err {
        BootstrapError::CosmosDb(CosmosDbError::DatabaseCreationFailed(message)) => {
            assert!(message.contains("401 Unauthorized"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(fx.state.collection_calls(), 0);
}

#[tokio::test]
async fn test_ensure_collections_concurrently() {
    let fx = fixture("AppDb");
    let collections = vec!["orders".to_string(), "Sessions".to_string()];

    let handle = ensure_collections(&fx.connection, &collections)
        .await
        .unwrap()
        .unwrap();

    assert!(Arc::ptr_eq(&handle, &fx.connection.client().unwrap()));
    assert_eq!(fx.state.collection_calls(), 2);
    assert_eq!(fx.created.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_ensure_collections_reports_first_error() {
    let fx = fixture("AppDb");
    let collections = vec!["orders".to_string(), String::new()];

    let err = ensure_collections(&fx.connection, &collections)
        .await
        .unwrap_err();
    assert!(err.is_configuration());
}
