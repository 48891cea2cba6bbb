//! Domain error types
//!
//! This module defines the error hierarchy for the bootstrapper.
//! Errors are domain-specific and don't expose third-party SDK types.

use thiserror::Error;

/// Main bootstrap error type
///
/// This is the primary error type used throughout the crate.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration-related errors, including a missing collection id
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Cosmos DB-related errors
    #[error("Cosmos DB error: {0}")]
    CosmosDb(#[from] CosmosDbError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Cosmos DB-specific errors
///
/// Errors that occur when talking to the database service. The message carries
/// whatever detail the service reported; nothing is retried.
#[derive(Debug, Error)]
pub enum CosmosDbError {
    /// Failed to build the client or reach the account
    #[error("Failed to connect to Cosmos DB: {0}")]
    ConnectionFailed(String),

    /// Failed to read or create the database
    #[error("Failed to create database: {0}")]
    DatabaseCreationFailed(String),

    /// Failed to read or create the collection
    #[error("Failed to create container: {0}")]
    ContainerCreationFailed(String),

    /// Create-if-not-exists answered with neither "created" nor "already exists"
    #[error("Unexpected status {status} while ensuring {resource}")]
    UnexpectedStatus { resource: String, status: u16 },
}

impl BootstrapError {
    /// Whether this error came from the configuration rather than the service
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            BootstrapError::Configuration(_) | BootstrapError::Validation(_)
        )
    }
}

impl From<std::io::Error> for BootstrapError {
    fn from(err: std::io::Error) -> Self {
        BootstrapError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BootstrapError {
    fn from(err: serde_json::Error) -> Self {
        BootstrapError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for BootstrapError {
    fn from(err: toml::de::Error) -> Self {
        BootstrapError::Configuration(format!("TOML parse error: {err}"))
    }
}
