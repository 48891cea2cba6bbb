//! Logging and observability
//!
//! Structured logging via `tracing`, plus the two log lines the bootstrapper
//! emits when it ensures a resource.
//!
//! # Example
//!
//! ```no_run
//! use cosmos_bootstrap::logging::init_logging;
//! use cosmos_bootstrap::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log that a resource was created
///
/// # Example
///
/// ```no_run
/// use cosmos_bootstrap::log_resource_created;
///
/// log_resource_created!(database, "AppDb");
/// ```
#[macro_export]
macro_rules! log_resource_created {
    (database, $id:expr) => {
        tracing::info!(database = %$id, "Created database");
    };
    (collection, $id:expr) => {
        tracing::info!(collection = %$id, "Created collection");
    };
}

/// Log that a resource was already present
///
/// # Example
///
/// ```no_run
/// use cosmos_bootstrap::log_resource_exists;
///
/// log_resource_exists!(collection, "Sessions");
/// ```
#[macro_export]
macro_rules! log_resource_exists {
    (database, $id:expr) => {
        tracing::info!(database = %$id, "Database already exists");
    };
    (collection, $id:expr) => {
        tracing::info!(collection = %$id, "Collection already exists");
    };
}
