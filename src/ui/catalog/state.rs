//! State for the catalog view.

use crate::catalog::{FilterState, Product, RequestSeq};
use crate::ui::mvi::UiState;

/// Outcome of the most recent discovery request.
///
/// `Idle` only exists before the view mounts.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchResult {
    #[default]
    Idle,

    /// A request is in flight. Nothing else is shown.
    Loading {
        /// Animation tick for spinner.
        animation_tick: u8,
    },

    /// The latest request failed. `message` is always the generic text.
    Error { message: String },

    /// The latest request succeeded.
    Ready { products: Vec<Product> },
}

impl FetchResult {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn products(&self) -> &[Product] {
        match self {
            Self::Ready { products } => products,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Ready with nothing to show.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::Ready { products } if products.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    pub filters: FilterState,
    pub fetch: FetchResult,
    /// Sequence of the latest issued request; completions for any other
    /// sequence are stale.
    pub latest: Option<RequestSeq>,
}

impl UiState for CatalogState {}

impl CatalogState {
    pub fn is_current(&self, seq: RequestSeq) -> bool {
        self.latest == Some(seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_default() {
        assert_eq!(FetchResult::default(), FetchResult::Idle);
        assert_eq!(CatalogState::default().latest, None);
    }

    #[test]
    fn empty_result_only_when_ready_and_empty() {
        assert!(FetchResult::Ready { products: vec![] }.is_empty_result());
        assert!(!FetchResult::Loading { animation_tick: 0 }.is_empty_result());
        assert!(!FetchResult::Error {
            message: "x".into()
        }
        .is_empty_result());
    }

    #[test]
    fn products_empty_unless_ready() {
        assert!(FetchResult::Loading { animation_tick: 3 }.products().is_empty());
        assert_eq!(
            FetchResult::Error {
                message: "Failed to load products".into()
            }
            .error_message(),
            Some("Failed to load products")
        );
    }

    #[test]
    fn is_current_matches_latest_only() {
        let state = CatalogState {
            latest: Some(RequestSeq::new(4)),
            ..Default::default()
        };
        assert!(state.is_current(RequestSeq::new(4)));
        assert!(!state.is_current(RequestSeq::new(3)));
    }
}
