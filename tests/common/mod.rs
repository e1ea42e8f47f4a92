//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;
pub mod mock_backend;

use mock_api::ScriptedApi;
use ratatui::buffer::Buffer;
use rentcat::catalog::{CompletionSink, FetchCompletion, FetchOrchestrator, Product, ProductApi};
use rentcat::config::ApiConfig;
use rentcat::ui::app::App;
use rentcat::ui::catalog::CatalogView;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub type Completions = mpsc::UnboundedReceiver<FetchCompletion>;

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn product(id: &str, name: &str) -> Product {
    serde_json::from_value(serde_json::json!({
        "_id": id,
        "name": name,
        "price": 500,
        "category": "laptops",
    }))
    .unwrap()
}

/// API config pointing at `base_url` with fast retries.
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
        max_retries: 1,
        retry_backoff_base_ms: 10,
        ..ApiConfig::default()
    }
}

/// Orchestrator on the current runtime whose completions land in a channel.
pub fn orchestrator(api: Arc<dyn ProductApi>) -> (FetchOrchestrator, Completions) {
    let (tx, rx) = mpsc::unbounded_channel();
    let sink: CompletionSink = Arc::new(move |completion: FetchCompletion| {
        let _ = tx.send(completion);
    });
    let orchestrator = FetchOrchestrator::new(api, tokio::runtime::Handle::current(), sink, 50.0);
    (orchestrator, rx)
}

pub fn make_view(api: Arc<dyn ProductApi>) -> (CatalogView, Completions) {
    let (orchestrator, rx) = orchestrator(api);
    (CatalogView::new(orchestrator), rx)
}

pub fn make_app(api: Arc<ScriptedApi>) -> (App, Completions) {
    let (view, rx) = make_view(api);
    (App::new(view), rx)
}

/// Wait for the next completion, failing the test after a second.
pub async fn next_completion(rx: &mut Completions) -> FetchCompletion {
    tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("timed out waiting for fetch completion")
        .expect("completion channel closed")
}

/// True if no completion arrives within `wait`.
pub async fn no_completion_within(rx: &mut Completions, wait: Duration) -> bool {
    tokio::time::timeout(wait, rx.recv()).await.is_err()
}

/// Flatten a rendered buffer into one string per row.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    buffer_lines(buffer).iter().any(|line| line.contains(needle))
}
