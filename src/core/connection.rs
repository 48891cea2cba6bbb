//! Connection bootstrapper
//!
//! [`CosmosConnection`] lazily builds a single client handle and, on every
//! [`initialize`](ConnectionBootstrap::initialize) call, makes sure the
//! configured database and the requested collection exist before handing the
//! handle back.
//!
//! The collection id is a per-call argument and the handle lives in a
//! [`OnceCell`], so concurrent callers targeting different collections share
//! one handle and never see each other's collection id.

use crate::adapters::cosmosdb::models::ResourceLink;
use crate::adapters::cosmosdb::serialization::JsonSettings;
use crate::adapters::database::factory::CosmosClientFactory;
use crate::adapters::database::traits::{
    ClientFactory, CollectionSpec, ConnectionPolicy, DocumentService, ResourceStatus,
};
use crate::config::CosmosDbConfig;
use crate::domain::ids::{CollectionId, DatabaseId};
use crate::domain::{BootstrapError, CosmosDbError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Partition key field of every collection created by the bootstrapper
pub const PARTITION_KEY: &str = "environmentId";

/// Caller-facing bootstrap contract
#[async_trait]
pub trait ConnectionBootstrap: Send + Sync {
    /// Client handle type returned to callers
    type Client: DocumentService;

    /// Ensure the database and `collection_id` exist, returning the shared handle
    ///
    /// # Errors
    ///
    /// - `Configuration` if `collection_id` is empty
    /// - `Validation` if `collection_id` breaks the service's id rules
    /// - `CosmosDb` if the service call fails or answers with an unexpected status
    async fn initialize(&self, collection_id: &str) -> Result<Arc<Self::Client>>;
}

/// Lazily connected bootstrapper for one database
///
/// # Example
///
/// ```rust,no_run
/// use cosmos_bootstrap::config::load_config;
/// use cosmos_bootstrap::core::{ConnectionBootstrap, CosmosConnection};
/// use cosmos_bootstrap::domain::CollectionId;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config("bootstrap.toml")?;
/// let connection = CosmosConnection::new(config.cosmos);
///
/// let client = connection.initialize("Sessions").await?;
/// let sessions_id: CollectionId = "Sessions".parse()?;
/// let sessions = client.container_client(connection.database_id(), &sessions_id);
/// # Ok(())
/// # }
/// ```
pub struct CosmosConnection<F: ClientFactory = CosmosClientFactory> {
    config: CosmosDbConfig,
    factory: F,
    serializer: JsonSettings,
    client: OnceCell<Arc<F::Client>>,
}

impl CosmosConnection<CosmosClientFactory> {
    /// Bootstrapper backed by the Azure Cosmos DB SDK
    pub fn new(config: CosmosDbConfig) -> Self {
        Self::with_factory(config, CosmosClientFactory)
    }
}

impl<F: ClientFactory> CosmosConnection<F> {
    /// Bootstrapper that builds its handle through `factory`
    pub fn with_factory(config: CosmosDbConfig, factory: F) -> Self {
        Self {
            config,
            factory,
            serializer: JsonSettings::camel_case(),
            client: OnceCell::new(),
        }
    }

    /// Replace the serializer settings handed to the client
    ///
    /// Only affects a handle that has not been created yet.
    pub fn with_serializer(mut self, serializer: JsonSettings) -> Self {
        self.serializer = serializer;
        self
    }

    /// Database this bootstrapper ensures
    pub fn database_id(&self) -> &DatabaseId {
        &self.config.database_id
    }

    /// Serializer settings handed to the client
    pub fn serializer(&self) -> &JsonSettings {
        &self.serializer
    }

    /// The handle, if a previous call has created it
    pub fn client(&self) -> Option<Arc<F::Client>> {
        self.client.get().cloned()
    }

    async fn client_handle(&self) -> Result<Arc<F::Client>> {
        let policy = ConnectionPolicy::gateway_https();

        self.client
            .get_or_try_init(|| async {
                let client = self
                    .factory
                    .create_client(&self.config, &policy, &self.serializer)
                    .await?;
                Ok::<_, BootstrapError>(Arc::new(client))
            })
            .await
            .cloned()
    }

    async fn verify_database_created(&self, client: &F::Client) -> Result<()> {
        let database_id = &self.config.database_id;
        let status = client.create_database_if_not_exists(database_id).await?;

        match status {
            ResourceStatus::Created => {
                crate::log_resource_created!(database, database_id);
                Ok(())
            }
            ResourceStatus::AlreadyExists => {
                crate::log_resource_exists!(database, database_id);
                Ok(())
            }
            ResourceStatus::Other(code) => Err(unexpected_status(
                ResourceLink::database(database_id),
                code,
            )),
        }
    }

    async fn verify_collection_created(
        &self,
        client: &F::Client,
        collection_id: &str,
    ) -> Result<()> {
        if collection_id.trim().is_empty() {
            return Err(BootstrapError::Configuration(
                "No collection id was provided to initialize".to_string(),
            ));
        }

        let collection_id = CollectionId::new(collection_id).map_err(BootstrapError::Validation)?;
        let database_id = &self.config.database_id;
        let link = ResourceLink::collection(database_id, &collection_id);
        let spec = CollectionSpec::partitioned_by(collection_id, PARTITION_KEY);

        let status = client
            .create_collection_if_not_exists(database_id, &spec)
            .await?;

        match status {
            ResourceStatus::Created => {
                crate::log_resource_created!(collection, spec.id);
                Ok(())
            }
            ResourceStatus::AlreadyExists => {
                crate::log_resource_exists!(collection, spec.id);
                Ok(())
            }
            ResourceStatus::Other(code) => Err(unexpected_status(link, code)),
        }
    }
}

fn unexpected_status(link: ResourceLink, status: u16) -> BootstrapError {
    CosmosDbError::UnexpectedStatus {
        resource: link.to_string(),
        status,
    }
    .into()
}

#[async_trait]
impl<F: ClientFactory> ConnectionBootstrap for CosmosConnection<F> {
    type Client = F::Client;

    async fn initialize(&self, collection_id: &str) -> Result<Arc<F::Client>> {
        let client = self.client_handle().await?;

        self.verify_database_created(&client).await?;
        self.verify_collection_created(&client, collection_id).await?;

        Ok(client)
    }
}
