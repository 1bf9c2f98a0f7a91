//! Hostname endpoint handler.
//!
//! Reports the hostname the OS (or container runtime) assigns to this
//! process. Useful for demonstrating container isolation: each replica
//! answers with its own container ID.

use axum::Json;
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct HostnameResponse {
    pub hostname: String,
}

/// Hostname endpoint handler.
///
/// A failed lookup (or a hostname that is not valid UTF-8) fails this
/// request with a 500; the process keeps serving.
#[instrument(name = "hostname::show")]
pub async fn show() -> Result<Json<HostnameResponse>, AppError> {
    let raw = hostname::get().map_err(AppError::HostnameLookup)?;
    let hostname = raw
        .into_string()
        .map_err(|raw| AppError::HostnameEncoding(raw.to_string_lossy().into_owned()))?;

    Ok(Json(HostnameResponse { hostname }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reports_os_hostname() {
        let Json(response) = show().await.unwrap();
        let expected = hostname::get().unwrap().to_string_lossy().into_owned();
        assert_eq!(response.hostname, expected);
    }

    #[tokio::test]
    async fn test_idempotent_within_process() {
        let Json(first) = show().await.unwrap();
        let Json(second) = show().await.unwrap();
        assert_eq!(first.hostname, second.hostname);
    }
}
