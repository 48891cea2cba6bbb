//! Cosmos DB client implementation
//!
//! Wraps the Azure SDK client and implements [`DocumentService`] on top of it.

use crate::adapters::cosmosdb::models::ResourceLink;
use crate::adapters::cosmosdb::serialization::JsonSettings;
use crate::adapters::database::traits::{
    CollectionSpec, ConnectionMode, ConnectionPolicy, DocumentService, Protocol, ResourceStatus,
};
use crate::config::CosmosDbConfig;
use crate::domain::ids::{CollectionId, DatabaseId};
use crate::domain::{BootstrapError, CosmosDbError, Result};
use async_trait::async_trait;
use azure_core::credentials::Secret;
use azure_core::http::StatusCode;
use azure_data_cosmos::clients::{ContainerClient, DatabaseClient};
use azure_data_cosmos::models::{ContainerProperties, IndexingPolicy, PartitionKeyDefinition};
use azure_data_cosmos::{CosmosClient, CosmosClientOptions};
use std::borrow::Cow;
use url::Url;

/// Cosmos DB client handle
///
/// This is the handle the bootstrapper returns. Callers use it to reach the
/// ensured database and collections, and to encode documents with the
/// configured serializer settings.
pub struct CosmosDbClient {
    client: CosmosClient,
    endpoint: Url,
    policy: ConnectionPolicy,
    serializer: JsonSettings,
}

impl CosmosDbClient {
    /// Create a new Cosmos DB client
    ///
    /// The SDK talks to the account gateway over HTTPS only, so any other
    /// policy is rejected as a configuration error.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint or policy is invalid or the SDK client
    /// cannot be built.
    pub fn new(
        config: &CosmosDbConfig,
        policy: ConnectionPolicy,
        serializer: JsonSettings,
    ) -> Result<Self> {
        use secrecy::ExposeSecret;

        if policy.connection_mode != ConnectionMode::Gateway || policy.protocol != Protocol::Https {
            return Err(BootstrapError::Configuration(format!(
                "Unsupported connection policy {policy}: only Gateway/Https is available"
            )));
        }

        let endpoint = config.endpoint().map_err(BootstrapError::Configuration)?;

        let key_str: String = config.auth_key.expose_secret().clone().into();
        let key = Secret::new(key_str);

        let client = CosmosClient::with_key(
            endpoint.as_str(),
            key,
            Some(CosmosClientOptions::default()),
        )
        .map_err(|e| {
            CosmosDbError::ConnectionFailed(format!("Failed to create Cosmos client: {e}"))
        })?;

        tracing::debug!(endpoint = %endpoint, policy = %policy, "Cosmos client created");

        Ok(Self {
            client,
            endpoint,
            policy,
            serializer,
        })
    }

    /// Get a client for a database
    pub fn database_client(&self, database_id: &DatabaseId) -> DatabaseClient {
        self.client.database_client(database_id.as_str())
    }

    /// Get a client for a collection
    pub fn container_client(
        &self,
        database_id: &DatabaseId,
        collection_id: &CollectionId,
    ) -> ContainerClient {
        self.database_client(database_id)
            .container_client(collection_id.as_str())
    }

    /// Serializer settings to use for documents written through this client
    pub fn serializer(&self) -> &JsonSettings {
        &self.serializer
    }

    /// Account endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Connection policy the client was built with
    pub fn policy(&self) -> ConnectionPolicy {
        self.policy
    }
}

fn has_status(err: &azure_core::Error, status: StatusCode) -> bool {
    err.http_status() == Some(status)
}

#[async_trait]
impl DocumentService for CosmosDbClient {
    async fn create_database_if_not_exists(
        &self,
        database_id: &DatabaseId,
    ) -> Result<ResourceStatus> {
        let link = ResourceLink::database(database_id);
        let database = self.database_client(database_id);

        match database.read(None).await {
            Ok(_) => Ok(ResourceStatus::AlreadyExists),
            Err(e) if has_status(&e, StatusCode::NotFound) => {
                tracing::debug!(resource = %link, "Database not found, creating");

                match self.client.create_database(database_id.as_str(), None).await {
                    Ok(_) => Ok(ResourceStatus::Created),
                    // Another caller created it between our read and create
                    Err(e) if has_status(&e, StatusCode::Conflict) => {
                        Ok(ResourceStatus::AlreadyExists)
                    }
                    Err(e) => Err(CosmosDbError::DatabaseCreationFailed(format!(
                        "Failed to create database {link}: {e}"
                    ))
                    .into()),
                }
            }
            Err(e) => Err(CosmosDbError::DatabaseCreationFailed(format!(
                "Failed to read database {link}: {e}"
            ))
            .into()),
        }
    }

    async fn create_collection_if_not_exists(
        &self,
        database_id: &DatabaseId,
        collection: &CollectionSpec,
    ) -> Result<ResourceStatus> {
        let link = ResourceLink::collection(database_id, &collection.id);
        let database = self.database_client(database_id);
        let container = database.container_client(collection.id.as_str());

        match container.read(None).await {
            Ok(_) => Ok(ResourceStatus::AlreadyExists),
            Err(e) if has_status(&e, StatusCode::NotFound) => {
                tracing::debug!(
                    resource = %link,
                    partition_key = %collection.partition_key_path,
                    "Collection not found, creating"
                );

                let partition_key_def = PartitionKeyDefinition {
                    paths: vec![collection.partition_key_path.clone()],
                    kind: azure_data_cosmos::models::PartitionKeyKind::Hash,
                    version: None,
                };

                let properties = ContainerProperties {
                    id: Cow::Owned(collection.id.as_str().to_string()),
                    partition_key: partition_key_def,
                    indexing_policy: Some(IndexingPolicy::default()),
                    ..Default::default()
                };

                match database.create_container(properties, None).await {
                    Ok(_) => Ok(ResourceStatus::Created),
                    Err(e) if has_status(&e, StatusCode::Conflict) => {
                        Ok(ResourceStatus::AlreadyExists)
                    }
                    Err(e) => Err(CosmosDbError::ContainerCreationFailed(format!(
                        "Failed to create collection {link}: {e}"
                    ))
                    .into()),
                }
            }
            Err(e) => Err(CosmosDbError::ContainerCreationFailed(format!(
                "Failed to read collection {link}: {e}"
            ))
            .into()),
        }
    }
}
