//! People repository
//!
//! - list: newest first, by descending id
//! - create: single INSERT, store assigns id and created_at
//! - delete: single DELETE, zero affected rows is NotFound

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{NewPerson, Person, PersonId};

/// Operations the HTTP layer needs from the store
#[async_trait]
pub trait PeopleStore: Send + Sync {
    /// All people, most recently created first.
    async fn list(&self) -> Result<Vec<Person>, DbError>;

    /// Insert one person.
    async fn create(&self, person: &NewPerson) -> Result<(), DbError>;

    /// Remove one person, returning [`DbError::NotFound`] if no row matched.
    async fn delete(&self, id: PersonId) -> Result<(), DbError>;
}

/// PostgreSQL-backed people repository
#[derive(Clone)]
pub struct PgPeopleRepo {
    pool: PgPool,
}

impl PgPeopleRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PeopleStore for PgPeopleRepo {
    async fn list(&self) -> Result<Vec<Person>, DbError> {
        let people = sqlx::query_as::<_, Person>(
            "SELECT id, name, email FROM people ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(people)
    }

    async fn create(&self, person: &NewPerson) -> Result<(), DbError> {
        sqlx::query("INSERT INTO people (name, email) VALUES ($1, $2)")
            .bind(person.name.as_str())
            .bind(person.email.as_deref())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: PersonId) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "person",
                id: id.to_string(),
            });
        }

        Ok(())
    }
}
