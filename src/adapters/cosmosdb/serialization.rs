//! Document serialization settings
//!
//! Property naming is an explicit setting carried by the client rather than a
//! process-wide default. With [`NamingPolicy::CamelCase`], `snake_case` field
//! names are written as `camelCase` and read back the other way.
//!
//! The renaming is exact for every name it touches. Names that don't split
//! cleanly into lowercase words are stored unchanged. Types whose serde names
//! are already camel case (for example via `#[serde(rename_all = "camelCase")]`)
//! should use [`NamingPolicy::AsIs`], since decoding would snake-case them.
//!
//! # Example
//!
//! ```rust
//! use cosmos_bootstrap::adapters::cosmosdb::serialization::JsonSettings;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Session {
//!     environment_id: String,
//! }
//!
//! let settings = JsonSettings::default();
//! let doc = settings
//!     .encode(&Session { environment_id: "prod".to_string() })
//!     .unwrap();
//! assert_eq!(doc["environmentId"], "prod");
//! ```

use crate::domain::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// How property names are rendered in stored documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingPolicy {
    /// `environment_id` is stored as `environmentId`
    #[default]
    CamelCase,

    /// Names are stored exactly as serde produces them
    AsIs,
}

/// Serialization settings used when encoding and decoding documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JsonSettings {
    pub naming: NamingPolicy,
}

impl JsonSettings {
    /// Settings that render property names in camel case
    pub fn camel_case() -> Self {
        Self {
            naming: NamingPolicy::CamelCase,
        }
    }

    /// Serialize a value into a document, applying the naming policy
    ///
    /// # Errors
    ///
    /// Returns a `Serialization` error if serde fails.
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<Value> {
        let value = serde_json::to_value(value)?;
        Ok(match self.naming {
            NamingPolicy::CamelCase => rename_keys(value, &to_camel_case),
            NamingPolicy::AsIs => value,
        })
    }

    /// Deserialize a document, undoing the naming policy first
    ///
    /// # Errors
    ///
    /// Returns a `Serialization` error if the document doesn't match `T`.
    pub fn decode<T: DeserializeOwned>(&self, document: Value) -> Result<T> {
        let document = match self.naming {
            NamingPolicy::CamelCase => rename_keys(document, &to_snake_case),
            NamingPolicy::AsIs => document,
        };
        Ok(serde_json::from_value(document)?)
    }
}

fn rename_keys(value: Value, rename: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (rename(&k), rename_keys(v, rename)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|v| rename_keys(v, rename)).collect())
        }
        other => other,
    }
}

/// `environment_id` -> `environmentId`
///
/// Only names made of lowercase `[a-z0-9]` words, where every word after the
/// first starts with a letter and has at least two characters, are renamed.
/// Anything else (`address_2`, `a__b`, `_rid`, `userID`) is kept verbatim so
/// that [`to_snake_case`] can undo the renaming exactly.
fn to_camel_case(name: &str) -> String {
    if !is_snake_name(name) {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len());
    for (i, word) in name.split('_').enumerate() {
        let mut chars = word.chars();
        if i > 0 {
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
            }
        }
        out.extend(chars);
    }
    out
}

/// `environmentId` -> `environment_id`, the inverse of [`to_camel_case`]
fn to_snake_case(name: &str) -> String {
    if !is_camel_name(name) {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn is_snake_name(name: &str) -> bool {
    name.split('_').enumerate().all(|(i, word)| {
        let starts_lower = word.chars().next().is_some_and(|c| c.is_ascii_lowercase());
        let lower_alnum = word
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
        starts_lower && lower_alnum && (i == 0 || word.len() >= 2)
    })
}

fn is_camel_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    if !bytes.first().is_some_and(u8::is_ascii_lowercase) {
        return false;
    }

    bytes.iter().enumerate().all(|(i, b)| {
        if b.is_ascii_uppercase() {
            // Every capital opens a word of at least two characters
            bytes
                .get(i + 1)
                .is_some_and(|next| next.is_ascii_lowercase() || next.is_ascii_digit())
        } else {
            b.is_ascii_lowercase() || b.is_ascii_digit()
        }
    })
}
