//! Bootstrap logic.
//!
//! - [`connection`] - lazy client handle plus idempotent database and
//!   collection creation

pub mod connection;

pub use connection::{ConnectionBootstrap, CosmosConnection, PARTITION_KEY};
