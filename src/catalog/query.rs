//! Request composition: turns a [`FilterState`] into exactly one backend call.

use serde::Serialize;
use std::fmt;

use super::filter::FilterState;

/// Radius (km) applied when a location is given without one.
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 50.0;

/// Query string for the plain list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
}

/// Query string for the text/geo search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    List,
    Search,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::List => f.write_str("list"),
            Endpoint::Search => f.write_str("search"),
        }
    }
}

/// The single request a filter state maps to.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogQuery {
    List(ListParams),
    Search(SearchParams),
}

impl CatalogQuery {
    /// Route a filter state to the list or search endpoint.
    ///
    /// Text and geo parameters are only ever sent to search; the list
    /// endpoint receives category and price bounds alone.
    pub fn from_filters(filters: &FilterState, default_radius: f64) -> Self {
        let list = ListParams {
            category: non_empty(&filters.category),
            min_price: non_empty(&filters.min_price),
            max_price: non_empty(&filters.max_price),
        };

        if !filters.uses_search() {
            return CatalogQuery::List(list);
        }

        let location = filters.location;
        CatalogQuery::Search(SearchParams {
            q: non_empty(&filters.search_query),
            lat: location.map(|l| l.lat),
            lng: location.map(|l| l.lng),
            radius: location.map(|l| l.radius.unwrap_or(default_radius)),
            category: list.category,
            min_price: list.min_price,
            max_price: list.max_price,
        })
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            CatalogQuery::List(_) => Endpoint::List,
            CatalogQuery::Search(_) => Endpoint::Search,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
