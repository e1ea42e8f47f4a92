//! Fetch orchestration: one request per filter change, last change wins.

use std::fmt;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, Instrument};
use uuid::Uuid;

use crate::catalog::api::{execute, ProductApi};
use crate::catalog::error::ApiError;
use crate::catalog::filter::FilterState;
use crate::catalog::product::Product;
use crate::catalog::query::CatalogQuery;

/// Monotonic request number. Only the latest issued one may commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of one issued request, tagged with its sequence number.
#[derive(Debug)]
pub struct FetchCompletion {
    pub seq: RequestSeq,
    pub result: Result<Vec<Product>, ApiError>,
}

/// Receives completions. Called from a runtime worker thread.
pub type CompletionSink = Arc<dyn Fn(FetchCompletion) + Send + Sync>;

/// What a call to [`FetchOrchestrator::issue`] sent.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedFetch {
    pub seq: RequestSeq,
    pub query: CatalogQuery,
}

/// Issues product requests on a tokio runtime and reports their outcome.
///
/// Issuing a new request aborts the previous in-flight task. Completions
/// that still slip through carry their sequence number so the view can
/// discard them.
pub struct FetchOrchestrator {
    api: Arc<dyn ProductApi>,
    runtime: Handle,
    sink: CompletionSink,
    default_radius: f64,
    last_seq: RequestSeq,
    in_flight: Option<JoinHandle<()>>,
}

impl FetchOrchestrator {
    pub fn new(
        api: Arc<dyn ProductApi>,
        runtime: Handle,
        sink: CompletionSink,
        default_radius: f64,
    ) -> Self {
        Self {
            api,
            runtime,
            sink,
            default_radius,
            last_seq: RequestSeq::default(),
            in_flight: None,
        }
    }

    /// Compose the request for `filters` and start it.
    pub fn issue(&mut self, filters: &FilterState) -> IssuedFetch {
        if let Some(previous) = self.in_flight.take() {
            if !previous.is_finished() {
                debug!(superseded = %self.last_seq, "Aborting in-flight product request");
                previous.abort();
            }
        }

        let seq = self.last_seq.next();
        self.last_seq = seq;

        let query = CatalogQuery::from_filters(filters, self.default_radius);
        let endpoint = query.endpoint();
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("fetch_products", %seq, %endpoint, %request_id);

        let api = Arc::clone(&self.api);
        let sink = Arc::clone(&self.sink);
        let task_query = query.clone();
        let task = async move {
            debug!(query = ?task_query, "Requesting products");
            let result = execute(api.as_ref(), &task_query).await;
            match &result {
                Ok(products) => info!(count = products.len(), "Products loaded"),
                Err(err) => error!(error_type = err.error_type(), details = %err.details(), "Product request failed"),
            }
            sink(FetchCompletion { seq, result });
        };

        self.in_flight = Some(self.runtime.spawn(task.instrument(span)));
        IssuedFetch { seq, query }
    }

    /// Abort whatever is in flight, e.g. on unmount.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

impl Drop for FetchOrchestrator {
    fn drop(&mut self) {
        self.cancel();
    }
}
