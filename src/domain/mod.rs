//! Domain types for the bootstrapper.
//!
//! - **Identifiers** ([`DatabaseId`], [`CollectionId`]) validated against the
//!   service's resource-id rules
//! - **Error types** ([`BootstrapError`], [`CosmosDbError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```rust
//! use cosmos_bootstrap::domain::{BootstrapError, CollectionId, Result};
//!
//! fn parse(id: &str) -> Result<CollectionId> {
//!     CollectionId::new(id).map_err(BootstrapError::Validation)
//! }
//!
//! assert!(parse("orders").is_ok());
//! ```

pub mod errors;
pub mod ids;
pub mod result;

pub use errors::{BootstrapError, CosmosDbError};
pub use ids::{CollectionId, DatabaseId};
pub use result::Result;
