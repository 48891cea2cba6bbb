//! In-memory database service shared by the integration tests
//!
//! Behaves like the real service for create-if-not-exists: the first create of
//! an id reports `Created`, every later one `AlreadyExists`. State lives in a
//! shared store so separate client handles observe the same "account".

#![allow(dead_code)]

use async_trait::async_trait;
use cosmos_bootstrap::adapters::cosmosdb::JsonSettings;
use cosmos_bootstrap::adapters::database::{
    ClientFactory, CollectionSpec, ConnectionPolicy, DocumentService, ResourceStatus,
};
use cosmos_bootstrap::config::{secret_string, CosmosDbConfig};
use cosmos_bootstrap::core::CosmosConnection;
use cosmos_bootstrap::domain::{BootstrapError, CosmosDbError, DatabaseId, Result};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A call received by the in-memory service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Database(String),
    Collection {
        database: String,
        collection: String,
        partition_key_path: String,
    },
}

/// Shared account state
#[derive(Debug, Default)]
pub struct AccountState {
    databases: Mutex<HashSet<String>>,
    collections: Mutex<HashMap<(String, String), String>>,
    calls: Mutex<Vec<Call>>,
    database_statuses: Mutex<Vec<ResourceStatus>>,
    collection_statuses: Mutex<Vec<ResourceStatus>>,
    fail_databases: Mutex<bool>,
}

impl AccountState {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn collection_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Collection { .. }))
            .count()
    }

    pub fn partition_key_of(&self, database: &str, collection: &str) -> Option<String> {
        self.collections
            .lock()
            .unwrap()
            .get(&(database.to_string(), collection.to_string()))
            .cloned()
    }

    /// Statuses returned by database calls, in call order
    pub fn database_statuses(&self) -> Vec<ResourceStatus> {
        self.database_statuses.lock().unwrap().clone()
    }

    /// Statuses returned by collection calls, in call order
    pub fn collection_statuses(&self) -> Vec<ResourceStatus> {
        self.collection_statuses.lock().unwrap().clone()
    }

    /// Make every database call fail like an auth error would
    pub fn reject_databases(&self) {
        *self.fail_databases.lock().unwrap() = true;
    }
}

/// Client handle backed by [`AccountState`]
#[derive(Debug)]
pub struct InMemoryClient {
    pub serial: usize,
    pub policy: ConnectionPolicy,
    pub serializer: JsonSettings,
    state: Arc<AccountState>,
}

#[async_trait]
impl DocumentService for InMemoryClient {
    async fn create_database_if_not_exists(
        &self,
        database_id: &DatabaseId,
    ) -> Result<ResourceStatus> {
        self.state
            .calls
            .lock()
            .unwrap()
            .push(Call::Database(database_id.to_string()));

        if *self.state.fail_databases.lock().unwrap() {
            return Err(CosmosDbError::DatabaseCreationFailed(
                "401 Unauthorized: invalid auth key".to_string(),
            )
            .into());
        }

        tokio::task::yield_now().await;

        let inserted = self
            .state
            .databases
            .lock()
            .unwrap()
            .insert(database_id.to_string());
        let status = if inserted {
            ResourceStatus::Created
        } else {
            ResourceStatus::AlreadyExists
        };
        self.state.database_statuses.lock().unwrap().push(status);
        Ok(status)
    }

    async fn create_collection_if_not_exists(
        &self,
        database_id: &DatabaseId,
        collection: &CollectionSpec,
    ) -> Result<ResourceStatus> {
        self.state.calls.lock().unwrap().push(Call::Collection {
            database: database_id.to_string(),
            collection: collection.id.to_string(),
            partition_key_path: collection.partition_key_path.clone(),
        });

        tokio::task::yield_now().await;

        let key = (database_id.to_string(), collection.id.to_string());
        let status = {
            let mut collections = self.state.collections.lock().unwrap();
            if collections.contains_key(&key) {
                ResourceStatus::AlreadyExists
            } else {
                collections.insert(key, collection.partition_key_path.clone());
                ResourceStatus::Created
            }
        };
        self.state.collection_statuses.lock().unwrap().push(status);
        Ok(status)
    }
}

/// Factory that counts how many handles it has built
pub struct CountingFactory {
    pub state: Arc<AccountState>,
    pub created: Arc<AtomicUsize>,
    pub delay: Duration,
}

impl CountingFactory {
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClientFactory for CountingFactory {
    type Client = InMemoryClient;

    async fn create_client(
        &self,
        _config: &CosmosDbConfig,
        policy: &ConnectionPolicy,
        serializer: &JsonSettings,
    ) -> Result<InMemoryClient> {
        // Widen the window in which concurrent first calls overlap
        tokio::time::sleep(self.delay).await;

        let serial = self.created.fetch_add(1, Ordering::SeqCst);
        Ok(InMemoryClient {
            serial,
            policy: *policy,
            serializer: *serializer,
            state: Arc::clone(&self.state),
        })
    }
}

/// Test fixture: a fresh bootstrapper over an empty in-memory account
pub struct Fixture {
    pub connection: CosmosConnection<CountingFactory>,
    pub state: Arc<AccountState>,
    pub created: Arc<AtomicUsize>,
}

pub fn cosmos_config(database: &str) -> CosmosDbConfig {
    CosmosDbConfig {
        database_id: DatabaseId::new(database).unwrap(),
        account_url: "https://example".to_string(),
        auth_key: secret_string("k1".to_string()),
    }
}

pub fn fixture(database: &str) -> Fixture {
    fixture_with_delay(database, Duration::ZERO)
}

pub fn fixture_with_delay(database: &str, delay: Duration) -> Fixture {
    let state = Arc::new(AccountState::default());
    let created = Arc::new(AtomicUsize::new(0));
    let factory = CountingFactory {
        state: Arc::clone(&state),
        created: Arc::clone(&created),
        delay,
    };

    Fixture {
        connection: CosmosConnection::with_factory(cosmos_config(database), factory),
        state,
        created,
    }
}

pub fn is_configuration_error(err: &BootstrapError) -> bool {
    matches!(err, BootstrapError::Configuration(_))
}
