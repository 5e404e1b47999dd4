//! Forwarding of `/api/*` requests.
//!
//! # Responsibilities
//! - Parse the `/api/` suffix from the inbound path
//! - Issue exactly one upstream request with the same method
//! - Forward the body (and its content type) for body-carrying methods
//! - Relay the upstream answer through `response.rs`
//!
//! # Design Decisions
//! - A client is built per request with idle pooling disabled, so the
//!   upstream connection closes when the exchange completes
//! - No retries, no header forwarding beyond `Content-Type`

use std::time::Instant;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{self, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;

use crate::error::ProxyError;
use crate::http::request::request_id;
use crate::http::response::relay;
use crate::http::server::AppState;
use crate::resilience::with_deadline;
use crate::routing::ApiPath;

/// Returns true for methods whose request body is forwarded upstream.
pub fn carries_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

/// Fallback handler: forwards `/api/...`, answers 404 for anything else.
pub async fn forward(State(state): State<AppState>, request: Request) -> Response {
    let Some(api_path) = ApiPath::parse(request.uri()) else {
        tracing::debug!(path = %request.uri().path(), "No route matched");
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    };

    match forward_request(&state, api_path, request).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

async fn forward_request(
    state: &AppState,
    api_path: ApiPath,
    request: Request,
) -> Result<Response, ProxyError> {
    let start_time = Instant::now();
    let request_id = request_id(request.headers()).to_string();
    let method = request.method().clone();
    let uri = api_path.upstream_uri(state.config.api_base())?;

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        upstream = %uri,
        "Forwarding request"
    );

    let (parts, body) = request.into_parts();
    let mut builder = http::Request::builder().method(method.clone()).uri(uri);
    let body = if carries_body(&method) {
        if let Some(content_type) = parts.headers.get(CONTENT_TYPE) {
            builder = builder.header(CONTENT_TYPE, content_type.clone());
        }
        body
    } else {
        Body::empty()
    };
    let upstream_request = builder.body(body).map_err(ProxyError::Request)?;

    let client: Client<HttpConnector, Body> = Client::builder(TokioExecutor::new())
        .pool_max_idle_per_host(0)
        .build(HttpConnector::new());

    let timeout_secs = state.config.upstream_timeout_secs;
    let response = with_deadline(timeout_secs, async {
        match client.request(upstream_request).await {
            Ok(upstream_response) => relay(upstream_response).await,
            Err(e) => Err(ProxyError::from(e)),
        }
    })
    .await;

    if let Ok(r) = &response {
        tracing::info!(
            request_id = %request_id,
            method = %method,
            suffix = %api_path.suffix(),
            status = %r.status(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Upstream responded"
        );
    }

    response
}
