//! Cosmos DB resource addressing
//!
//! Every resource has a deterministic link built from its ids:
//! `dbs/{database}` for databases and `dbs/{database}/colls/{collection}` for
//! collections.

use crate::domain::ids::{CollectionId, DatabaseId};
use std::fmt;

/// Addressable location of a database or collection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceLink(String);

impl ResourceLink {
    /// Link of a database: `dbs/{database}`
    pub fn database(database_id: &DatabaseId) -> Self {
        Self(format!("dbs/{}", database_id.as_str()))
    }

    /// Link of a collection under a database: `dbs/{database}/colls/{collection}`
    pub fn collection(database_id: &DatabaseId, collection_id: &CollectionId) -> Self {
        Self::database(database_id).child("colls", collection_id.as_str())
    }

    fn child(&self, segment: &str, id: &str) -> Self {
        Self(format!("{}/{segment}/{id}", self.0))
    }

    /// Returns the link as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
