//! Product discovery core.
//!
//! ```text
//! FilterState ──→ CatalogQuery ──→ ProductApi (list | search)
//!      ↑                                 │
//!      │            FetchOrchestrator ←──┘  (RequestSeq-tagged completion)
//! ```
//!
//! - `filter` - the client-held constraints
//! - `query` - routing between the list and search endpoints
//! - `api` - the HTTP collaborator behind a trait seam
//! - `orchestrator` - sequencing and cancellation of in-flight requests

pub mod api;
pub mod category;
pub mod error;
pub mod filter;
pub mod orchestrator;
pub mod product;
pub mod query;

pub use api::{execute, HttpProductApi, ProductApi, RetryPolicy};
pub use category::{category_label, next_category_id, prev_category_id, Category};
pub use error::{ApiError, FETCH_FAILED_MESSAGE};
pub use filter::{FilterField, FilterState, GeoLocation, SearchInput};
pub use orchestrator::{CompletionSink, FetchCompletion, FetchOrchestrator, IssuedFetch, RequestSeq};
pub use product::{Product, ProductKey, ProductLocation};
pub use query::{CatalogQuery, Endpoint, ListParams, SearchParams, DEFAULT_SEARCH_RADIUS_KM};
