//! Configuration schema definitions.
//!
//! A single flat structure: the dev proxy has one upstream, one listener and
//! one static page. All fields derive Serde traits for deserialization from
//! config files and fall back to the device address, port and page the
//! firmware project uses.

use serde::{Deserialize, Serialize};

/// Root configuration for the development proxy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DevConfig {
    /// Upstream base URL (e.g., "http://192.168.1.97").
    /// `/api/<path>` requests are forwarded to `<base_url>/api/<path>`.
    pub base_url: String,

    /// Listen host.
    pub host: String,

    /// Listen port.
    pub port: u16,

    /// HTML file served at `/`, re-read on every request.
    pub static_file_path: String,

    /// Deadline for a single upstream call in seconds.
    pub upstream_timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error).
    /// `RUST_LOG` takes precedence when set.
    pub log_level: String,
}

impl Default for DevConfig {
    fn default() -> Self {
        Self {
            base_url: "http://192.168.1.97".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_file_path: "index.html".to_string(),
            upstream_timeout_secs: 60,
            log_level: "info".to_string(),
        }
    }
}

impl DevConfig {
    /// Address the listener binds to, as `host:port`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Upstream base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
