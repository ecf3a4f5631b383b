//! HTTP layer
//!
//! Axum server with:
//! - JSON API under /api/people
//! - Embedded front-end page at /
//! - Request tracing
//! - Graceful shutdown followed by an explicit store close

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerError};
