//! Configuration management.
//!
//! TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Overrides via `BOOTSTRAP_<SECTION>_<KEY>` variables
//! - Default values for optional settings
//! - The auth key is held as a [`SecretString`]
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [cosmos]
//! database_id = "AppDb"
//! account_url = "https://your-account.documents.azure.com:443/"
//! auth_key = "${COSMOS_AUTH_KEY}"
//!
//! [logging]
//! local_enabled = false
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use cosmos_bootstrap::config::load_config;
//!
//! # fn example() {
//! match load_config("bootstrap.toml") {
//!     Ok(config) => println!("Database: {}", config.cosmos.database_id),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, parse_config};
pub use schema::{ApplicationConfig, BootstrapConfig, CosmosDbConfig, LoggingConfig};
pub use secret::{secret_string, SecretString, SecretValue};
