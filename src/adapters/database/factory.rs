//! Database client factory
//!
//! Builds the SDK-backed client from configuration.

use crate::adapters::cosmosdb::client::CosmosDbClient;
use crate::adapters::cosmosdb::serialization::JsonSettings;
use crate::adapters::database::traits::{ClientFactory, ConnectionPolicy};
use crate::config::CosmosDbConfig;
use crate::domain::Result;
use async_trait::async_trait;

/// Factory producing [`CosmosDbClient`] handles
#[derive(Debug, Clone, Copy, Default)]
pub struct CosmosClientFactory;

#[async_trait]
impl ClientFactory for CosmosClientFactory {
    type Client = CosmosDbClient;

    async fn create_client(
        &self,
        config: &CosmosDbConfig,
        policy: &ConnectionPolicy,
        serializer: &JsonSettings,
    ) -> Result<CosmosDbClient> {
        tracing::info!(
            endpoint = %config.account_url,
            policy = %policy,
            "Creating Cosmos DB client"
        );
        CosmosDbClient::new(config, *policy, *serializer)
    }
}
