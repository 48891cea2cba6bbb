//! External system integrations.
//!
//! - [`database`] - the service contract the bootstrapper depends on
//! - [`cosmosdb`] - Azure Cosmos DB implementation of that contract
//!
//! # Cosmos DB Adapter
//!
//! ```rust,no_run
//! use cosmos_bootstrap::adapters::cosmosdb::{CosmosDbClient, JsonSettings};
//! use cosmos_bootstrap::adapters::database::{ConnectionPolicy, DocumentService};
//! use cosmos_bootstrap::config::{secret_string, CosmosDbConfig};
//! use cosmos_bootstrap::domain::DatabaseId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CosmosDbConfig {
//!     database_id: DatabaseId::new("AppDb")?,
//!     account_url: "https://account.documents.azure.com:443/".to_string(),
//!     auth_key: secret_string("key".to_string()),
//! };
//!
//! let client = CosmosDbClient::new(
//!     &config,
//!     ConnectionPolicy::gateway_https(),
//!     JsonSettings::default(),
//! )?;
//! let status = client.create_database_if_not_exists(&config.database_id).await?;
//! println!("database: {status:?}");
//! # Ok(())
//! # }
//! ```

pub mod cosmosdb;
pub mod database;
