//! Azure Cosmos DB integration
//!
//! The SDK-backed [`CosmosDbClient`] handle, resource links, and the document
//! serializer settings it carries.

pub mod client;
pub mod models;
pub mod serialization;

pub use client::CosmosDbClient;
pub use models::ResourceLink;
pub use serialization::{JsonSettings, NamingPolicy};
