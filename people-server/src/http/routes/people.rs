//! People endpoints
//!
//! Each handler validates first, then issues exactly one store call.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::ValidPersonId;
use crate::http::server::AppState;
use crate::models::{NewPerson, Person};

/// Create person request
///
/// Both fields are optional at the serde level so a missing name is reported
/// as a validation error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreatePersonRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Acknowledgement for writes
#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
    pub message: &'static str,
}

impl Ack {
    fn ok(message: &'static str) -> Json<Self> {
        Json(Self {
            success: true,
            message,
        })
    }
}

/// GET /api/people - list everyone, newest first
async fn list_people(State(state): State<AppState>) -> Result<Json<Vec<Person>>, ApiError> {
    let people = state.people().list().await?;
    Ok(Json(people))
}

/// POST /api/people - add a person
async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<CreatePersonRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Ack>), ApiError> {
    let Json(req) = payload?;
    let person = NewPerson::new(req.name.as_deref(), req.email.as_deref())?;

    state.people().create(&person).await?;
    tracing::debug!(name = person.name.as_str(), "person added");

    Ok((StatusCode::CREATED, Ack::ok("Person added")))
}

/// DELETE /api/people/{id} - remove a person
async fn delete_person(
    State(state): State<AppState>,
    ValidPersonId(id): ValidPersonId,
) -> Result<Json<Ack>, ApiError> {
    state.people().delete(id).await?;
    tracing::debug!(%id, "person deleted");

    Ok(Ack::ok("Person deleted"))
}

/// People routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/people", get(list_people).post(create_person))
        .route("/api/people/{id}", delete(delete_person))
}
