// Cosmos Bootstrap - Cosmos DB database and collection bootstrapper
// Copyright (c) 2025 Cosmos Bootstrap Contributors
// Licensed under the MIT License

//! # Cosmos Bootstrap
//!
//! Lazily connects to an Azure Cosmos DB account and makes sure a database and
//! a collection exist before handing the client to the caller. Every collection
//! it creates is partitioned on `/environmentId`.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The bootstrapper ([`core::CosmosConnection`])
//! - [`adapters`] - The database service contract and its Cosmos DB implementation
//! - [`domain`] - Identifiers and error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cosmos_bootstrap::config::load_config;
//! use cosmos_bootstrap::core::{ConnectionBootstrap, CosmosConnection};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("bootstrap.toml")?;
//!     let connection = CosmosConnection::new(config.cosmos);
//!
//!     // Creates the database and collection on first use; later calls
//!     // find them and return the same client.
//!     let client = connection.initialize("Sessions").await?;
//!     let again = connection.initialize("Sessions").await?;
//!     assert!(std::sync::Arc::ptr_eq(&client, &again));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`], whose error is
//! [`domain::BootstrapError`]. Service failures are surfaced as-is; nothing is
//! retried.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
