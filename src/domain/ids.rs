//! Resource identifier types with validation
//!
//! Newtype wrappers for Cosmos DB resource ids. Both follow the service's
//! naming rules: non-blank, at most 255 characters, none of `/ \ ? #`, and no
//! trailing space.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest id the service accepts for databases and containers
pub const MAX_ID_LENGTH: usize = 255;

const FORBIDDEN_CHARS: [char; 4] = ['/', '\\', '?', '#'];

fn validate_resource_id(kind: &str, id: &str) -> Result<(), String> {
    if id.trim().is_empty() {
        return Err(format!("{kind} ID cannot be empty"));
    }

    if id.chars().count() > MAX_ID_LENGTH {
        return Err(format!(
            "{kind} ID cannot be longer than {MAX_ID_LENGTH} characters"
        ));
    }

    if let Some(c) = id.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
        return Err(format!("{kind} ID '{id}' contains forbidden character '{c}'"));
    }

    if id.ends_with(' ') {
        return Err(format!("{kind} ID '{id}' cannot end with a space"));
    }

    Ok(())
}

/// Database identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use cosmos_bootstrap::domain::ids::DatabaseId;
/// use std::str::FromStr;
///
/// let id = DatabaseId::from_str("AppDb").unwrap();
/// assert_eq!(id.as_str(), "AppDb");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatabaseId(String);

impl DatabaseId {
    /// Creates a new DatabaseId, validating it against the service's id rules
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        validate_resource_id("Database", &id)?;
        Ok(Self(id))
    }

    /// Returns the database ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Collection identifier newtype wrapper
///
/// Names the collection (container) the caller wants ensured. It is scoped to
/// a single `initialize` call and never stored on the bootstrapper.
///
/// # Examples
///
/// ```
/// use cosmos_bootstrap::domain::ids::CollectionId;
///
/// assert!(CollectionId::new("Sessions").is_ok());
/// assert!(CollectionId::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionId(String);

impl CollectionId {
    /// Creates a new CollectionId, validating it against the service's id rules
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        validate_resource_id("Collection", &id)?;
        Ok(Self(id))
    }

    /// Returns the collection ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! impl_id_traits {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = String;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$ty> for String {
            fn from(id: $ty) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_id_traits!(DatabaseId);
impl_id_traits!(CollectionId);

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("AppDb" ; "simple")]
    #[test_case("my-db_01" ; "dashes and underscores")]
    #[test_case("Sessions v2" ; "inner space")]
    fn test_valid_ids(id: &str) {
        assert!(DatabaseId::new(id).is_ok());
        assert!(CollectionId::new(id).is_ok());
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "blank")]
    #[test_case("a/b" ; "slash")]
    #[test_case("a\\b" ; "backslash")]
    #[test_case("a?b" ; "question mark")]
    #[test_case("a#b" ; "hash")]
    #[test_case("trailing " ; "trailing space")]
    fn test_invalid_ids(id: &str) {
        assert!(DatabaseId::new(id).is_err());
        assert!(CollectionId::new(id).is_err());
    }

    #[test]
    fn test_id_length_limit() {
        assert!(CollectionId::new("x".repeat(MAX_ID_LENGTH)).is_ok());
        assert!(CollectionId::new("x".repeat(MAX_ID_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_error_names_the_kind() {
        let err = CollectionId::new("").unwrap_err();
        assert_eq!(err, "Collection ID cannot be empty");

        let err = DatabaseId::new("a#b").unwrap_err();
        assert!(err.starts_with("Database ID"));
    }

    #[test]
    fn test_serde_validates() {
        let id: CollectionId = serde_json::from_str("\"orders\"").unwrap();
        assert_eq!(id.as_str(), "orders");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"orders\"");

        assert!(serde_json::from_str::<DatabaseId>("\"\"").is_err());
    }
}
