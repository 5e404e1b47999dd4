//! Upstream response relay.
//!
//! # Responsibilities
//! - Copy the upstream status code verbatim, including non-2xx
//! - Copy the upstream `Content-Type` verbatim
//! - Decode the body as UTF-8 text and hand it back to the client
//!
//! # Design Decisions
//! - The body is buffered; upstream API replies are small JSON documents
//! - A missing `Content-Type` becomes `application/octet-stream`
//! - A non-UTF-8 body is a 502 rather than a lossy copy
//! - No other upstream header reaches the client

use axum::body::{Body, Bytes, HttpBody};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::response::Response;
use axum::BoxError;

use crate::error::ProxyError;

/// Content type used when the upstream sends none.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Build the client response from an upstream response.
pub async fn relay<B>(upstream: Response<B>) -> Result<Response, ProxyError>
where
    B: HttpBody<Data = Bytes> + Send + 'static,
    B::Error: Into<BoxError>,
{
    let (parts, body) = upstream.into_parts();

    let bytes = axum::body::to_bytes(Body::new(body), usize::MAX).await?;
    let text = String::from_utf8(bytes.to_vec())?;

    let content_type = parts
        .headers
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(FALLBACK_CONTENT_TYPE));

    Response::builder()
        .status(parts.status)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(text))
        .map_err(ProxyError::BuildResponse)
}
