//! Development tooling for the firmware web UI.
//!
//! - [`minify`]: inline `index.html` into a C++ string literal for the
//!   firmware build
//! - [`http`]: a dev proxy that serves `index.html` at `/` and forwards
//!   `/api/*` to the device

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod minify;
pub mod observability;
pub mod resilience;
pub mod routing;

pub use config::DevConfig;
pub use error::{MinifyError, ProxyError};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
