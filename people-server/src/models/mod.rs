//! Domain models with validation at construction
//!
//! Request input is validated when these types are built. Invalid input
//! returns ValidationError before any store call is made.

pub mod person;
pub mod validation;

pub use person::{NewPerson, Person, PersonId, PersonName};
pub use validation::ValidationError;
