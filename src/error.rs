//! Error types for both tools.
//!
//! Nothing here is retried. Proxy errors become a short plain-text response
//! with a 5xx status; minifier errors abort the binary.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors raised while turning an HTML file into a C++ source file.
#[derive(Debug, Error)]
pub enum MinifyError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while serving a proxy request.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The page served at `/` could not be read.
    #[error("failed to read static file {path}: {source}")]
    StaticFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The upstream URI could not be assembled from the base URL and path.
    #[error("invalid upstream URI {uri:?}: {source}")]
    InvalidUpstreamUri {
        uri: String,
        #[source]
        source: axum::http::uri::InvalidUri,
    },

    /// The outbound request could not be built.
    #[error("failed to build upstream request: {0}")]
    Request(#[source] axum::http::Error),

    /// Connecting to or talking with the upstream failed.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] hyper_util::client::legacy::Error),

    /// The upstream did not answer within the deadline.
    #[error("upstream timed out after {0} seconds")]
    Timeout(u64),

    /// A request or response body could not be read.
    #[error("failed to read body: {0}")]
    Body(#[from] axum::Error),

    /// The upstream body was not valid UTF-8 text.
    #[error("upstream body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// The relayed response could not be constructed.
    #[error("failed to build response: {0}")]
    BuildResponse(#[source] axum::http::Error),
}

impl ProxyError {
    /// Status code returned to the client for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::StaticFile { .. } | ProxyError::BuildResponse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ProxyError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::InvalidUpstreamUri { .. }
            | ProxyError::Request(_)
            | ProxyError::Upstream(_)
            | ProxyError::Body(_)
            | ProxyError::Decode(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(status = %status, error = %self, "Request failed");
        let body = match status {
            StatusCode::GATEWAY_TIMEOUT => "Upstream request timed out",
            StatusCode::BAD_GATEWAY => "Upstream request failed",
            _ => "Internal server error",
        };
        (status, body).into_response()
    }
}
