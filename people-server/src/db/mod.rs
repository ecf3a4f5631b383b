//! Database layer - connection pool, schema, and the people repository
//!
//! # Design Principles
//!
//! - One pool, created at startup and closed at shutdown - no global handle
//! - Exactly one statement per request, always with bound parameters
//! - No retries and no multi-statement transactions

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;

pub use error::DbError;
pub use pool::Database;
pub use repos::{PeopleStore, PgPeopleRepo};
