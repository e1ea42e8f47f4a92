//! Reducer for catalog view state transitions.
//!
//! `Idle → Loading → {Ready, Error}`; any filter change from `Ready` or
//! `Error` goes back to `Loading`.

use crate::ui::mvi::Reducer;

use super::intent::CatalogIntent;
use super::state::{CatalogState, FetchResult};

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::SetFilter { field, value } => {
                let mut filters = state.filters;
                filters.set(field, value);
                CatalogState {
                    filters,
                    fetch: FetchResult::Loading { animation_tick: 0 },
                    latest: state.latest,
                }
            }

            CatalogIntent::ApplySearch(input) => {
                let mut filters = state.filters;
                filters.apply_search(input);
                CatalogState {
                    filters,
                    fetch: FetchResult::Loading { animation_tick: 0 },
                    latest: state.latest,
                }
            }

            CatalogIntent::ClearFilters => CatalogState {
                filters: Default::default(),
                fetch: FetchResult::Loading { animation_tick: 0 },
                latest: state.latest,
            },

            CatalogIntent::FetchStarted { seq } => CatalogState {
                fetch: FetchResult::Loading { animation_tick: 0 },
                latest: Some(seq),
                ..state
            },

            CatalogIntent::FetchSucceeded { seq, products } => {
                if !state.is_current(seq) {
                    return state;
                }
                CatalogState {
                    fetch: FetchResult::Ready { products },
                    ..state
                }
            }

            CatalogIntent::FetchFailed { seq, message } => {
                if !state.is_current(seq) {
                    return state;
                }
                CatalogState {
                    fetch: FetchResult::Error { message },
                    ..state
                }
            }

            CatalogIntent::AnimationTick => match state.fetch {
                FetchResult::Loading { animation_tick } => CatalogState {
                    fetch: FetchResult::Loading {
                        animation_tick: animation_tick.wrapping_add(1),
                    },
                    ..state
                },
                _ => state,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FilterField, GeoLocation, Product, ProductKey, RequestSeq, SearchInput};

    fn product(id: &str) -> Product {
        serde_json::from_value(serde_json::json!({ "_id": id, "name": id })).unwrap()
    }

    fn loading_with(seq: u64) -> CatalogState {
        CatalogReducer::reduce(
            CatalogState::default(),
            CatalogIntent::FetchStarted {
                seq: RequestSeq::new(seq),
            },
        )
    }

    #[test]
    fn fetch_started_records_latest_and_loads() {
        let state = loading_with(1);
        assert_eq!(state.latest, Some(RequestSeq::new(1)));
        assert!(state.fetch.is_loading());
    }

    #[test]
    fn set_filter_from_ready_goes_back_to_loading() {
        let state = CatalogState {
            fetch: FetchResult::Ready {
                products: vec![product("a")],
            },
            ..Default::default()
        };
        let state = CatalogReducer::reduce(
            state,
            CatalogIntent::SetFilter {
                field: FilterField::Category,
                value: "laptops".into(),
            },
        );
        assert_eq!(state.filters.category, "laptops");
        assert!(state.fetch.is_loading());
        assert!(state.fetch.products().is_empty());
    }

    #[test]
    fn apply_search_from_error_goes_back_to_loading() {
        let state = CatalogState {
            fetch: FetchResult::Error {
                message: "Failed to load products".into(),
            },
            ..Default::default()
        };
        let state = CatalogReducer::reduce(
            state,
            CatalogIntent::ApplySearch(SearchInput::location(GeoLocation::new(12.9, 77.6))),
        );
        assert!(state.filters.location.is_some());
        assert!(state.fetch.is_loading());
    }

    #[test]
    fn clear_filters_resets_everything_but_sequence() {
        let mut state = loading_with(7);
        state.filters.category = "audio".into();
        state.filters.search_query = "speaker".into();
        let state = CatalogReducer::reduce(state, CatalogIntent::ClearFilters);
        assert!(state.filters.is_empty());
        assert_eq!(state.latest, Some(RequestSeq::new(7)));
    }

    #[test]
    fn current_success_commits_products() {
        let state = loading_with(2);
        let state = CatalogReducer::reduce(
            state,
            CatalogIntent::FetchSucceeded {
                seq: RequestSeq::new(2),
                products: vec![product("a"), product("b")],
            },
        );
        let keys: Vec<&ProductKey> = state.fetch.products().iter().map(Product::key).collect();
        assert_eq!(keys, vec![&ProductKey::new("a"), &ProductKey::new("b")]);
    }

    #[test]
    fn stale_success_is_discarded() {
        let state = loading_with(3);
        let state = CatalogReducer::reduce(
            state,
            CatalogIntent::FetchSucceeded {
                seq: RequestSeq::new(2),
                products: vec![product("old")],
            },
        );
        assert!(state.fetch.is_loading());
    }

    #[test]
    fn stale_failure_does_not_clobber_ready() {
        let state = loading_with(5);
        let state = CatalogReducer::reduce(
            state,
            CatalogIntent::FetchSucceeded {
                seq: RequestSeq::new(5),
                products: vec![product("fresh")],
            },
        );
        let state = CatalogReducer::reduce(
            state,
            CatalogIntent::FetchFailed {
                seq: RequestSeq::new(4),
                message: "Failed to load products".into(),
            },
        );
        assert_eq!(state.fetch.products().len(), 1);
    }

    #[test]
    fn current_failure_sets_error() {
        let state = loading_with(1);
        let state = CatalogReducer::reduce(
            state,
            CatalogIntent::FetchFailed {
                seq: RequestSeq::new(1),
                message: "Failed to load products".into(),
            },
        );
        assert_eq!(state.fetch.error_message(), Some("Failed to load products"));
    }

    #[test]
    fn animation_tick_only_moves_spinner() {
        let state = loading_with(1);
        let state = CatalogReducer::reduce(state, CatalogIntent::AnimationTick);
        assert_eq!(state.fetch, FetchResult::Loading { animation_tick: 1 });

        let ready = CatalogState {
            fetch: FetchResult::Ready { products: vec![] },
            ..Default::default()
        };
        assert_eq!(
            CatalogReducer::reduce(ready.clone(), CatalogIntent::AnimationTick),
            ready
        );
    }
}
