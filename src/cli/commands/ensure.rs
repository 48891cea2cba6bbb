//! Ensure command implementation
//!
//! Loads the configuration, then bootstraps the database and every requested
//! collection through one shared connection.

use super::exit_code;
use crate::config::load_config;
use crate::core::{ConnectionBootstrap, CosmosConnection, PARTITION_KEY};
use crate::domain::Result;
use clap::Args;
use futures::future::try_join_all;
use std::sync::Arc;

/// Arguments for the ensure command
#[derive(Args, Debug)]
pub struct EnsureArgs {
    /// Collections to ensure (created with partition key /environmentId)
    #[arg(required = true)]
    pub collections: Vec<String>,
}

impl EnsureArgs {
    /// Execute the ensure command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Ensuring Cosmos DB resources");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(exit_code::CONFIGURATION);
            }
        };

        let database_id = config.cosmos.database_id.clone();
        let connection = CosmosConnection::new(config.cosmos);
        let collections = self.unique_collections();

        match ensure_collections(&connection, &collections).await {
            Ok(_) => {
                println!("✅ Database '{database_id}' is ready");
                for collection in &collections {
                    println!("   • {collection} (partition key /{PARTITION_KEY})");
                }
                Ok(exit_code::SUCCESS)
            }
            Err(e) if e.is_configuration() => {
                println!("❌ Invalid collection request");
                println!("   Error: {e}");
                Ok(exit_code::CONFIGURATION)
            }
            Err(e) => {
                tracing::error!(error = %e, "Bootstrap failed");
                println!("❌ Failed to ensure Cosmos DB resources");
                println!("   Error: {e}");
                Ok(exit_code::CONNECTION)
            }
        }
    }

    /// Requested collections in order, without repeats
    fn unique_collections(&self) -> Vec<String> {
        let mut seen = Vec::with_capacity(self.collections.len());
        for collection in &self.collections {
            if !seen.contains(collection) {
                seen.push(collection.clone());
            }
        }
        seen
    }
}

/// Initialize every collection concurrently, returning the shared handle
///
/// Fails with the first error any of the calls reports.
pub async fn ensure_collections<B: ConnectionBootstrap>(
    bootstrap: &B,
    collections: &[String],
) -> Result<Option<Arc<B::Client>>> {
    let handles = try_join_all(
        collections
            .iter()
            .map(|collection| bootstrap.initialize(collection)),
    )
    .await?;

    Ok(handles.into_iter().next())
}
