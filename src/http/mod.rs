//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign x-request-id)
//!     → GET /        → static_files.rs (read page from disk)
//!     → ANY /api/... → proxy.rs (one upstream call, with deadline)
//!                    → response.rs (copy status, content type, text body)
//!     → Send to client
//! ```

pub mod proxy;
pub mod request;
pub mod response;
pub mod server;
pub mod static_files;

pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
