//! statusd: a containerized HTTP status check service.
//!
//! Exposes three read-only JSON endpoints: a welcome message (`/`), a
//! liveness/timestamp check (`/status`), and a hostname reporter
//! (`/hostname`). Handlers are stateless; each request is answered from
//! compile-time constants, the system clock, or an OS hostname lookup.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::AppError;
