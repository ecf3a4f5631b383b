//! people-server: HTTP service for the `people` resource
//!
//! Exposes list, create, and delete over JSON and keeps every record in a
//! single PostgreSQL table. The store is initialized before the listener is
//! bound, and closed once the server has drained.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DbConfig, ServerConfig};
pub use db::{Database, DbError, PeopleStore, PgPeopleRepo};
pub use http::{build_router, run_server, AppState};
