//! Catalog view controller: filter mutators, refetch, and completion intake.

use tracing::debug;

use crate::catalog::{FetchCompletion, FetchOrchestrator, FilterField, FilterState, IssuedFetch, SearchInput};
use crate::ui::mvi::Reducer;

use super::intent::CatalogIntent;
use super::reducer::CatalogReducer;
use super::state::{CatalogState, FetchResult};

/// Owns the catalog state and drives exactly one request per filter change.
///
/// Every mutator dispatches its intent and then calls [`CatalogView::refetch`]
/// explicitly; there is no implicit effect.
pub struct CatalogView {
    state: CatalogState,
    orchestrator: FetchOrchestrator,
}

impl CatalogView {
    pub fn new(orchestrator: FetchOrchestrator) -> Self {
        Self {
            state: CatalogState::default(),
            orchestrator,
        }
    }

    fn dispatch(&mut self, intent: CatalogIntent) {
        self.state = CatalogReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    pub fn filters(&self) -> &FilterState {
        &self.state.filters
    }

    pub fn fetch(&self) -> &FetchResult {
        &self.state.fetch
    }

    /// Initial load with empty filters.
    pub fn mount(&mut self) -> IssuedFetch {
        self.refetch()
    }

    /// Seed filters before the first fetch without issuing a request.
    pub fn preset(&mut self, field: FilterField, value: impl Into<String>) {
        self.state.filters.set(field, value);
    }

    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) -> IssuedFetch {
        self.dispatch(CatalogIntent::SetFilter {
            field,
            value: value.into(),
        });
        self.refetch()
    }

    pub fn apply_search(&mut self, input: SearchInput) -> IssuedFetch {
        self.dispatch(CatalogIntent::ApplySearch(input));
        self.refetch()
    }

    pub fn clear_filters(&mut self) -> IssuedFetch {
        self.dispatch(CatalogIntent::ClearFilters);
        self.refetch()
    }

    /// Issue the request for the current filters and enter `Loading`.
    pub fn refetch(&mut self) -> IssuedFetch {
        let issued = self.orchestrator.issue(&self.state.filters);
        self.dispatch(CatalogIntent::FetchStarted { seq: issued.seq });
        issued
    }

    /// Apply a completion. Returns false when it was stale and dropped.
    pub fn on_fetch_complete(&mut self, completion: FetchCompletion) -> bool {
        let FetchCompletion { seq, result } = completion;
        if !self.state.is_current(seq) {
            debug!(%seq, latest = ?self.state.latest, "Discarding stale product response");
            return false;
        }

        let intent = match result {
            Ok(products) => CatalogIntent::FetchSucceeded { seq, products },
            Err(err) => CatalogIntent::FetchFailed {
                seq,
                message: err.user_message().to_string(),
            },
        };
        self.dispatch(intent);
        true
    }

    pub fn on_tick(&mut self) {
        self.dispatch(CatalogIntent::AnimationTick);
    }

    /// Stop any in-flight request.
    pub fn unmount(&mut self) {
        self.orchestrator.cancel();
    }
}
