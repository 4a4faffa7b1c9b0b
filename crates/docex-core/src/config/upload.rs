//! Upload behavior configuration.

use serde::{Deserialize, Serialize};

/// Settings for file uploads and the simulated progress indicator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Accepted file extensions (lower-case, without the leading dot).
    /// This is a client-side filter only; the server is not bound by it.
    #[serde(default = "default_accepted_extensions")]
    pub accepted_extensions: Vec<String>,
    /// Interval between simulated progress ticks, in milliseconds.
    #[serde(default = "default_progress_tick_ms")]
    pub progress_tick_ms: u64,
    /// Progress added per tick while the request is in flight.
    #[serde(default = "default_progress_step")]
    pub progress_step: u8,
    /// Ceiling for simulated progress until the request settles.
    #[serde(default = "default_progress_cap")]
    pub progress_cap: u8,
    /// Delay before the upload dialog auto-closes after success, in
    /// milliseconds. Gives the user a visible "100%" moment.
    #[serde(default = "default_close_delay_ms")]
    pub close_delay_ms: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: default_accepted_extensions(),
            progress_tick_ms: default_progress_tick_ms(),
            progress_step: default_progress_step(),
            progress_cap: default_progress_cap(),
            close_delay_ms: default_close_delay_ms(),
        }
    }
}

fn default_accepted_extensions() -> Vec<String> {
    [
        "pdf", "doc", "docx", "xls", "xlsx", "csv", "png", "jpg", "jpeg", "gif", "bmp", "webp",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_progress_tick_ms() -> u64 {
    200
}

fn default_progress_step() -> u8 {
    10
}

fn default_progress_cap() -> u8 {
    90
}

fn default_close_delay_ms() -> u64 {
    500
}
