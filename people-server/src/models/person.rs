//! Person record and the validated inputs that produce one

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Person as returned by the list endpoint.
///
/// `created_at` lives in the table but is not part of this projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
}

/// Trimmed, non-empty person name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// Create a name from raw input, trimming surrounding whitespace.
    ///
    /// Length is not checked here; the column enforces its own limit.
    ///
    /// # Example
    /// ```
    /// use people_server::models::PersonName;
    ///
    /// assert_eq!(PersonName::new("  Alice ").unwrap().as_str(), "Alice");
    /// assert!(PersonName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Store-assigned person identifier, parsed from a path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonId(i32);

impl PersonId {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        s.parse().map(Self).map_err(|_| ValidationError::InvalidFormat {
            field: "id",
            reason: "must be an integer",
        })
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for PersonId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated insert payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: PersonName,
    /// `None` only when the caller omitted the field (or sent null). A
    /// present email is trimmed and kept even if that leaves it empty.
    pub email: Option<String>,
}

impl NewPerson {
    /// Validate raw request fields.
    pub fn new(name: Option<&str>, email: Option<&str>) -> Result<Self, ValidationError> {
        let name = name.ok_or(ValidationError::Missing { field: "name" })?;

        Ok(Self {
            name: PersonName::new(name)?,
            email: email.map(|e| e.trim().to_owned()),
        })
    }
}
