//! Document API endpoint configuration.

use serde::{Deserialize, Serialize};

/// Settings for the external document REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, without a trailing slash
    /// (e.g., `https://docs.hmfm.intra`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// TCP connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Overall request timeout in seconds. `0` disables the timeout so
    /// large uploads are never cut off mid-transfer.
    #[serde(default)]
    pub request_timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: 0,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}
