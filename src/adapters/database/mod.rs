//! Database service abstraction layer
//!
//! The bootstrapper depends on these traits, not on the Azure SDK, so the
//! service can be replaced by an in-memory implementation in tests.

pub mod factory;
pub mod traits;

pub use factory::CosmosClientFactory;
pub use traits::{
    ClientFactory, CollectionSpec, ConnectionMode, ConnectionPolicy, DocumentService, Protocol,
    ResourceStatus,
};
