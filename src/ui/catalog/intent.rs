//! Intents for the catalog view.

use crate::catalog::{FilterField, Product, RequestSeq, SearchInput};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// One filter control changed.
    SetFilter { field: FilterField, value: String },

    /// Search bar submitted text and/or location.
    ApplySearch(SearchInput),

    /// Reset every filter.
    ClearFilters,

    /// A request for the current filters was issued.
    FetchStarted { seq: RequestSeq },

    FetchSucceeded {
        seq: RequestSeq,
        products: Vec<Product>,
    },

    FetchFailed { seq: RequestSeq, message: String },

    /// Animation tick (for spinner updates).
    AnimationTick,
}

impl Intent for CatalogIntent {}
