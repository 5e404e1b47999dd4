//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. Every problem is
//! reported, not just the first one.

use thiserror::Error;
use url::Url;

use crate::config::schema::DevConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("base_url {url:?} is not a valid URL: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("base_url scheme must be http, got {0:?}")]
    UnsupportedScheme(String),

    #[error("base_url must not carry a query or fragment")]
    BaseUrlHasQuery,

    #[error("port must be non-zero")]
    ZeroPort,

    #[error("upstream_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("static_file_path must not be empty")]
    EmptyStaticFilePath,
}

/// Validate a configuration, collecting all errors.
pub fn validate_config(config: &DevConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(config.api_base()) {
        Ok(url) => {
            if url.scheme() != "http" {
                errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
            }
            if url.host_str().is_none() {
                errors.push(ValidationError::InvalidBaseUrl {
                    url: config.base_url.clone(),
                    reason: "missing host".to_string(),
                });
            }
            if url.query().is_some() || url.fragment().is_some() {
                errors.push(ValidationError::BaseUrlHasQuery);
            }
        }
        Err(e) => errors.push(ValidationError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    if config.upstream_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.static_file_path.trim().is_empty() {
        errors.push(ValidationError::EmptyStaticFilePath);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
