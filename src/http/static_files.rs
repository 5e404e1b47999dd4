//! The page served at `/`.

use std::path::PathBuf;

use axum::extract::State;
use axum::response::Html;

use crate::error::ProxyError;
use crate::http::server::AppState;

/// Serve the configured HTML file.
///
/// The file is read on every request so edits show up on reload.
pub async fn serve_index(State(state): State<AppState>) -> Result<Html<String>, ProxyError> {
    let path = PathBuf::from(&state.config.static_file_path);
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| ProxyError::StaticFile { path, source })?;
    Ok(Html(content))
}
