//! HTTP client for the marketplace product endpoints.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

use crate::catalog::error::ApiError;
use crate::catalog::product::Product;
use crate::catalog::query::{CatalogQuery, ListParams, SearchParams};
use crate::config::ApiConfig;

/// Backend collaborator consumed by the catalog view.
///
/// Both calls are idempotent GET-style queries.
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn list(&self, params: &ListParams) -> Result<Vec<Product>, ApiError>;

    async fn search(&self, params: &SearchParams) -> Result<Vec<Product>, ApiError>;
}

/// Dispatch a composed query to the matching endpoint.
pub async fn execute(api: &dyn ProductApi, query: &CatalogQuery) -> Result<Vec<Product>, ApiError> {
    match query {
        CatalogQuery::List(params) => api.list(params).await,
        CatalogQuery::Search(params) => api.search(params).await,
    }
}

/// Bounded exponential backoff for transient failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_base: Duration,
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            backoff_base: Duration::ZERO,
        }
    }

    /// Delay before retry number `attempt` (0-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.backoff_base.saturating_mul(1u32 << attempt.min(10))
    }
}

impl From<&ApiConfig> for RetryPolicy {
    fn from(config: &ApiConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            backoff_base: Duration::from_millis(config.retry_backoff_base_ms),
        }
    }
}

/// `{ "data": [...] }` wrapper around product lists.
#[derive(Debug, Deserialize)]
struct ProductsEnvelope {
    data: Vec<Product>,
}

pub struct HttpProductApi {
    client: Client,
    list_url: Url,
    search_url: Url,
    retry: RetryPolicy,
}

impl HttpProductApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            list_url: join_url(&config.base_url, &config.list_path)?,
            search_url: join_url(&config.base_url, &config.search_path)?,
            retry: RetryPolicy::from(config),
        })
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    async fn get_products<P>(&self, url: &Url, params: &P) -> Result<Vec<Product>, ApiError>
    where
        P: Serialize + Sync + ?Sized,
    {
        let mut attempt = 0;
        loop {
            match self.get_once(url, params).await {
                Err(err) if err.is_transient() && attempt < self.retry.max_retries => {
                    let delay = self.retry.backoff(attempt);
                    attempt += 1;
                    warn!(
                        url = %url,
                        attempt,
                        max_retries = self.retry.max_retries,
                        error = %err,
                        "Transient error, retrying in {:?}",
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                result => return result,
            }
        }
    }

    async fn get_once<P>(&self, url: &Url, params: &P) -> Result<Vec<Product>, ApiError>
    where
        P: Serialize + Sync + ?Sized,
    {
        let response = self
            .client
            .get(url.clone())
            .query(params)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: server_message(status, &body),
            });
        }

        let envelope: ProductsEnvelope = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn list(&self, params: &ListParams) -> Result<Vec<Product>, ApiError> {
        self.get_products(&self.list_url, params).await
    }

    async fn search(&self, params: &SearchParams) -> Result<Vec<Product>, ApiError> {
        self.get_products(&self.search_url, params).await
    }
}

fn join_url(base: &str, path: &str) -> Result<Url, ApiError> {
    let raw = format!("{}{}", base.trim_end_matches('/'), path);
    Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))
}

fn transport_error(url: &Url, err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout {
            url: url.to_string(),
        }
    } else {
        ApiError::Connection {
            url: url.to_string(),
            source: err,
        }
    }
}

/// Extract the backend's `{"error": ...}` payload, falling back to the status text.
fn server_message(status: StatusCode, body: &str) -> String {
    let payload = serde_json::from_str::<serde_json::Value>(body).ok();
    let error = payload.as_ref().and_then(|v| v.get("error"));
    let message = match error {
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(other) => other
            .get("message")
            .and_then(|m| m.as_str())
            .map(String::from),
        None => None,
    };
    message.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    })
}
