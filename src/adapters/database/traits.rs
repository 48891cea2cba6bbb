//! Database service abstraction traits
//!
//! The bootstrapper only needs two idempotent operations from the service,
//! plus a way to build a client. Both seams are traits so the Cosmos DB
//! implementation can be swapped for an in-memory one in tests.

use crate::adapters::cosmosdb::serialization::JsonSettings;
use crate::config::CosmosDbConfig;
use crate::domain::ids::{CollectionId, DatabaseId};
use crate::domain::Result;
use async_trait::async_trait;
use std::fmt;

/// Outcome of a create-if-not-exists call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceStatus {
    /// The resource did not exist and was created (HTTP 201)
    Created,

    /// The resource was already there (HTTP 200)
    AlreadyExists,

    /// Any other status the service answered with
    Other(u16),
}

impl ResourceStatus {
    /// Maps an HTTP status code onto the create-if-not-exists outcome
    pub fn from_status_code(code: u16) -> Self {
        match code {
            201 => ResourceStatus::Created,
            200 => ResourceStatus::AlreadyExists,
            other => ResourceStatus::Other(other),
        }
    }

    /// The HTTP status code this outcome corresponds to
    pub fn status_code(&self) -> u16 {
        match self {
            ResourceStatus::Created => 201,
            ResourceStatus::AlreadyExists => 200,
            ResourceStatus::Other(code) => *code,
        }
    }
}

/// Definition of a collection to ensure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSpec {
    /// Collection id
    pub id: CollectionId,

    /// Partition key path, e.g. `/environmentId`
    pub partition_key_path: String,
}

impl CollectionSpec {
    /// Creates a spec partitioned on a single top-level field
    pub fn partitioned_by(id: CollectionId, field: &str) -> Self {
        Self {
            id,
            partition_key_path: format!("/{field}"),
        }
    }
}

/// How the client reaches the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionMode {
    /// All requests go through the HTTP(S) gateway
    Gateway,

    /// Requests go straight to backend replicas
    Direct,
}

/// Transport protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Https,
    Tcp,
}

/// Connection policy handed to the client factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionPolicy {
    pub connection_mode: ConnectionMode,
    pub protocol: Protocol,
}

impl ConnectionPolicy {
    /// Gateway mode over HTTPS
    pub fn gateway_https() -> Self {
        Self {
            connection_mode: ConnectionMode::Gateway,
            protocol: Protocol::Https,
        }
    }
}

impl fmt::Display for ConnectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}", self.connection_mode, self.protocol)
    }
}

/// The database service contract consumed by the bootstrapper
///
/// Both operations must be idempotent: issuing them any number of times, from
/// any number of callers, leaves exactly one resource behind.
#[async_trait]
pub trait DocumentService: Send + Sync {
    /// Ensure the database exists, creating it if necessary
    ///
    /// # Errors
    ///
    /// Returns the service's failure (network, auth, throttling) unchanged.
    async fn create_database_if_not_exists(&self, database_id: &DatabaseId)
        -> Result<ResourceStatus>;

    /// Ensure a collection exists within the database, creating it if necessary
    ///
    /// # Errors
    ///
    /// Returns the service's failure (network, auth, throttling) unchanged.
    async fn create_collection_if_not_exists(
        &self,
        database_id: &DatabaseId,
        collection: &CollectionSpec,
    ) -> Result<ResourceStatus>;
}

/// Builds the client handle the bootstrapper caches
#[async_trait]
pub trait ClientFactory: Send + Sync {
    /// Client type produced by this factory
    type Client: DocumentService;

    /// Create a client for the configured account
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    async fn create_client(
        &self,
        config: &CosmosDbConfig,
        policy: &ConnectionPolicy,
        serializer: &JsonSettings,
    ) -> Result<Self::Client>;
}
