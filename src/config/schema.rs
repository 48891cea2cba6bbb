//! Configuration schema definitions
//!
//! Type-safe configuration structs deserialized from TOML.

use super::secret::SecretString;
use crate::domain::ids::DatabaseId;
use serde::{Deserialize, Serialize};
use url::Url;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Application configuration
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Cosmos DB account configuration
    pub cosmos: CosmosDbConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BootstrapConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.cosmos.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Cosmos DB account configuration
///
/// Read once when the bootstrapper is constructed and never changed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CosmosDbConfig {
    /// Database to ensure, e.g. "AppDb"
    pub database_id: DatabaseId,

    /// Account endpoint, e.g. `https://account.documents.azure.com:443/`
    pub account_url: String,

    /// Account auth key
    /// Stored securely in memory and automatically zeroized on drop
    pub auth_key: SecretString,
}

impl CosmosDbConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        self.endpoint()?;

        if self.auth_key.expose_secret().is_blank() {
            return Err("cosmos.auth_key cannot be empty".to_string());
        }

        Ok(())
    }

    /// Parses `account_url`, requiring an https endpoint
    ///
    /// Requests go through the gateway over HTTPS, so any other scheme is
    /// rejected here rather than on first use.
    pub fn endpoint(&self) -> Result<Url, String> {
        if self.account_url.trim().is_empty() {
            return Err("cosmos.account_url cannot be empty".to_string());
        }

        let url = Url::parse(&self.account_url)
            .map_err(|e| format!("cosmos.account_url '{}' is not a valid URL: {e}", self.account_url))?;

        if url.scheme() != "https" {
            return Err(format!(
                "cosmos.account_url must use https, got '{}'",
                url.scheme()
            ));
        }

        if url.host_str().is_none() {
            return Err("cosmos.account_url must include a host".to_string());
        }

        Ok(url)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
