//! Client-held query constraints for product discovery.

use serde::{Deserialize, Serialize};

/// A single editable filter dimension.
///
/// Location is not listed here: it only changes together with the text
/// query, through [`FilterState::apply_search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Category,
    MinPrice,
    MaxPrice,
    SearchQuery,
}

/// Geographic search centre. `radius` is in kilometres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub radius: Option<f64>,
}

impl GeoLocation {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            radius: None,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
}

/// Event emitted by the search bar. Supplying neither field clears both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchInput {
    pub query: Option<String>,
    pub location: Option<GeoLocation>,
}

impl SearchInput {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            location: None,
        }
    }

    pub fn location(location: GeoLocation) -> Self {
        Self {
            query: None,
            location: Some(location),
        }
    }
}

/// Active filter set. Empty strings and `None` mean "do not constrain".
///
/// Price fields hold the raw text the user typed and are not validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub category: String,
    pub min_price: String,
    pub max_price: String,
    pub search_query: String,
    pub location: Option<GeoLocation>,
}

impl FilterState {
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Category => self.category = value,
            FilterField::MinPrice => self.min_price = value,
            FilterField::MaxPrice => self.max_price = value,
            FilterField::SearchQuery => self.search_query = value,
        }
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Category => &self.category,
            FilterField::MinPrice => &self.min_price,
            FilterField::MaxPrice => &self.max_price,
            FilterField::SearchQuery => &self.search_query,
        }
    }

    /// Replace query and location together from one search-bar event.
    pub fn apply_search(&mut self, input: SearchInput) {
        self.search_query = input.query.unwrap_or_default();
        self.location = input.location;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// True when text or geo constraints are active.
    pub fn uses_search(&self) -> bool {
        !self.search_query.is_empty() || self.location.is_some()
    }
}
