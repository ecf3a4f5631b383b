//! Repository implementations for database access
//!
//! Handlers talk to [`PeopleStore`], never to the pool directly. The
//! PostgreSQL implementation issues exactly one statement per call.

#[cfg(test)]
pub mod memory;
pub mod people;

pub use people::{PeopleStore, PgPeopleRepo};
