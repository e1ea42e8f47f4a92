//! Product records as returned by the marketplace backend.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Stable rendering identity of a product.
///
/// Selection and list keys are tracked by this value, never by position,
/// so a product keeps its identity when a filter change reorders the list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductKey(String);

impl ProductKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pickup/delivery location attached to a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductLocation {
    #[serde(default)]
    pub address: Option<String>,
}

/// A rentable item.
///
/// Only `id` matters to the catalog view; everything else is passed
/// through to the card renderer. Unknown fields are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: ProductKey,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Price per rental day.
    #[serde(default, alias = "pricePerDay", deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<ProductLocation>,
    #[serde(default)]
    pub available: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    pub fn key(&self) -> &ProductKey {
        &self.id
    }

    pub fn address(&self) -> Option<&str> {
        self.location.as_ref()?.address.as_deref()
    }
}
