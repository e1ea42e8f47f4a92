//! Catalog view feature module.
//!
//! Holds the filter state, issues one request per change, and keeps the
//! tagged fetch result the renderer projects.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Filter state plus `FetchResult` (Idle → Loading → Ready/Error)
//! - `intent.rs` - Filter edits and fetch lifecycle events
//! - `reducer.rs` - State transitions, including the stale-response guard
//! - `view.rs` - Controller that pairs each mutation with a refetch

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CatalogIntent;
pub use reducer::CatalogReducer;
pub use state::{CatalogState, FetchResult};
pub use view::CatalogView;
