use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Hostname lookup failed: {0}")]
    HostnameLookup(#[source] io::Error),

    #[error("Hostname is not valid UTF-8: {0}")]
    HostnameEncoding(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every variant is a host-environment fault. Log the detail
        // server-side, return a generic 500 for this request only.
        tracing::error!("Internal error: {:?}", self);

        let body = Json(serde_json::json!({
            "error": "internal server error",
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
