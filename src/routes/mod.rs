//! HTTP route handlers for the status check API.
//!
//! Routes are organized by cacheability, with per-group Cache-Control
//! headers. The welcome payload is constant per build and may be cached;
//! the probe endpoints (status, hostname) must always be answered fresh.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod home;
pub mod hostname;
pub mod status;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_PROBE, CACHE_CONTROL_WELCOME};
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and cache headers.
///
/// Unknown paths fall through to axum's default 404 response.
pub fn create_router() -> Router {
    // Welcome payload - constant content, cacheable
    let welcome_routes = Router::new().route("/", get(home::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_WELCOME),
        ),
    );

    // Probe endpoints - no caching, always fresh for liveness checks
    let probe_routes = Router::new()
        .route("/status", get(status::show))
        .route("/hostname", get(hostname::show))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PROBE),
        ));

    Router::new()
        .merge(welcome_routes)
        .merge(probe_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
