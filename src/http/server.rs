//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router: `GET /` and the `/api/` forwarder
//! - Wire up middleware (tracing, request ID)
//! - Serve on a listener until the shutdown broadcast fires

use std::sync::Arc;

use axum::{
    body::Body,
    http::Request,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::DevConfig;
use crate::http::proxy::forward;
use crate::http::request::{request_id, MakeRequestUuidV4};
use crate::http::static_files::serve_index;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<DevConfig>,
}

/// HTTP server for the development proxy.
pub struct HttpServer {
    router: Router,
    config: Arc<DevConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: Arc<DevConfig>) -> Self {
        let state = AppState {
            config: config.clone(),
        };
        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(serve_index))
            .fallback(forward)
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %req.method(),
                    path = %req.uri().path(),
                    request_id = %request_id(req.headers()),
                )
            }))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// The router, for driving requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.api_base(),
            static_file = %self.config.static_file_path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &DevConfig {
        &self.config
    }
}
