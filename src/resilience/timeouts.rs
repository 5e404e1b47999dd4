//! Timeout enforcement.
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - The deadline covers the whole exchange, body included
//! - Timed-out requests return 504 Gateway Timeout

use std::future::Future;
use std::time::Duration;

use crate::error::ProxyError;

/// Run `fut` with a deadline of `secs` seconds.
///
/// On expiry the future is dropped, which closes the upstream connection.
pub async fn with_deadline<T, F>(secs: u64, fut: F) -> Result<T, ProxyError>
where
    F: Future<Output = Result<T, ProxyError>>,
{
    match tokio::time::timeout(Duration::from_secs(secs), fut).await {
        Ok(result) => result,
        Err(_) => Err(ProxyError::Timeout(secs)),
    }
}
