use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Marketplace backend connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API (e.g., "http://localhost:5000/api").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the plain list endpoint.
    #[serde(default = "default_list_path")]
    pub list_path: String,
    /// Path of the text/geo search endpoint.
    #[serde(default = "default_search_path")]
    pub search_path: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Max retry attempts for transient errors (default: 2).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base backoff in milliseconds for retry (default: 200).
    #[serde(default = "default_retry_backoff_base_ms")]
    pub retry_backoff_base_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Radius in km used when a location has none (default: 50).
    #[serde(default = "default_radius_km")]
    pub default_radius_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/animation tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_list_path() -> String {
    "/products".to_string()
}

fn default_search_path() -> String {
    "/products/search".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_max_retries() -> u32 {
    2
}

fn default_retry_backoff_base_ms() -> u64 {
    200
}

fn default_radius_km() -> f64 {
    crate::catalog::DEFAULT_SEARCH_RADIUS_KM
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            list_path: default_list_path(),
            search_path: default_search_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            max_retries: default_max_retries(),
            retry_backoff_base_ms: default_retry_backoff_base_ms(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_radius_km: default_radius_km(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
