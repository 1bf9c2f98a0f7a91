//! Welcome endpoint handler.

use axum::Json;
use serde::Serialize;
use tracing::instrument;

use crate::config::{APPLICATION_NAME, WELCOME_MESSAGE};

/// Static welcome payload returned by `/`.
///
/// Every field is a compile-time constant, so repeated responses are
/// byte-identical for the lifetime of a build.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub application: &'static str,
    pub version: &'static str,
}

impl WelcomeResponse {
    fn current() -> Self {
        Self {
            message: WELCOME_MESSAGE,
            application: APPLICATION_NAME,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Welcome endpoint handler.
#[instrument(name = "home::index")]
pub async fn index() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::current())
}
