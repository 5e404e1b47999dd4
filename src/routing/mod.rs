//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, query)
//!     → matcher.rs (strip the "/api/" prefix)
//!     → ApiPath (opaque suffix + query)
//!     → upstream URI: <base>/api/<suffix>[?query]
//! ```
//!
//! # Design Decisions
//! - Only `/` and `/api/...` exist; everything else is a 404
//! - `/api` without a trailing slash is not an API path
//! - The suffix is forwarded byte-for-byte, never normalised

pub mod matcher;

use axum::http::Uri;

use crate::error::ProxyError;
pub use matcher::PathPrefixMatcher;

/// Path prefix of every forwarded route.
pub const API_PREFIX: &str = "/api/";

/// The part of an `/api/...` request that is sent upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath {
    suffix: String,
    query: Option<String>,
}

impl ApiPath {
    /// Parse an inbound URI; `None` if it is not under `/api/`.
    pub fn parse(uri: &Uri) -> Option<Self> {
        let suffix = PathPrefixMatcher::new(API_PREFIX).strip(uri.path())?;
        Some(Self {
            suffix: suffix.to_string(),
            query: uri.query().map(str::to_string),
        })
    }

    /// Everything after `/api/`.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The raw query string, if any.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Build `<base>/api/<suffix>[?query]`. `base` must not end with `/`.
    pub fn upstream_uri(&self, base: &str) -> Result<Uri, ProxyError> {
        let uri = match &self.query {
            Some(q) => format!("{}{}{}?{}", base, API_PREFIX, self.suffix, q),
            None => format!("{}{}{}", base, API_PREFIX, self.suffix),
        };
        uri.parse::<Uri>()
            .map_err(|source| ProxyError::InvalidUpstreamUri { uri, source })
    }
}
