//! HTTP server startup and lifecycle.
//!
//! The server runs plain HTTP behind whatever ingress the deployment
//! provides, and shuts down gracefully on SIGTERM/SIGINT so container
//! runtimes can drain in-flight requests.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
