//! In-memory store for router tests

use std::sync::Mutex;

use async_trait::async_trait;

use super::PeopleStore;
use crate::db::DbError;
use crate::models::{NewPerson, Person, PersonId};

/// Vec-backed store with monotonically increasing ids
#[derive(Default)]
pub struct MemoryPeopleStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i32,
    rows: Vec<Person>,
}

impl MemoryPeopleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl PeopleStore for MemoryPeopleStore {
    async fn list(&self) -> Result<Vec<Person>, DbError> {
        let inner = self.inner.lock().unwrap();
        let mut rows = inner.rows.clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn create(&self, person: &NewPerson) -> Result<(), DbError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.push(Person {
            id,
            name: person.name.as_str().to_owned(),
            email: person.email.clone(),
        });
        Ok(())
    }

    async fn delete(&self, id: PersonId) -> Result<(), DbError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.rows.len();
        inner.rows.retain(|p| p.id != id.get());
        if inner.rows.len() == before {
            return Err(DbError::NotFound {
                resource: "person",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

/// Store whose every call fails, for the 500 path
pub struct FailingPeopleStore;

#[async_trait]
impl PeopleStore for FailingPeopleStore {
    async fn list(&self) -> Result<Vec<Person>, DbError> {
        Err(DbError::Query(sqlx::Error::PoolTimedOut))
    }

    async fn create(&self, _: &NewPerson) -> Result<(), DbError> {
        Err(DbError::Query(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _: PersonId) -> Result<(), DbError> {
        Err(DbError::Query(sqlx::Error::PoolTimedOut))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_distinct_and_listed_descending() {
        let store = MemoryPeopleStore::new();
        for name in ["A", "B", "C"] {
            store
                .create(&NewPerson::new(Some(name), None).unwrap())
                .await
                .unwrap();
        }

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["C", "B", "A"]);
    }

    #[tokio::test]
    async fn delete_twice_is_not_found() {
        let store = MemoryPeopleStore::new();
        store
            .create(&NewPerson::new(Some("A"), None).unwrap())
            .await
            .unwrap();

        store.delete(PersonId::from(1)).await.unwrap();
        let err = store.delete(PersonId::from(1)).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
        assert_eq!(store.len(), 0);
    }
}
