//! Router and request handlers for the `/api/persons` surface.
//!
//! # Responsibility
//! - Map path/query/body input onto core service calls.
//! - Expose the pre-paging total via the `x-total-count` header, which
//!   the list response carries alongside the JSON page body.
//!
//! # Invariants
//! - Handlers route to search only for a present, non-blank term
//!   (enforced by `PersonService::fetch_page`).
//! - Update/delete of an unknown id succeed with no effect.

use crate::error::ApiError;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use log::info;
use people_core::{
    PageRequest, Person, PersonDraft, PersonId, PersonService, SqlitePersonRepository,
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tower_http::cors::{Any, CorsLayer};

const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Shared process state: the storage connection opened at startup.
///
/// SQLite connections are not `Sync`, so request handlers serialize
/// their single round trip through a mutex.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    fn lock_db(&self) -> MutexGuard<'_, Connection> {
        // A poisoned lock only means another request panicked mid-call;
        // the connection itself is still usable.
        self.db.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Builds the application router with permissive CORS, as the original
/// separate-origin frontend expects.
pub fn api_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([axum::http::HeaderName::from_static(TOTAL_COUNT_HEADER)]);

    Router::new()
        .route("/health", get(health))
        .route("/api/persons", get(list_persons).post(create_person))
        .route(
            "/api/persons/{id}",
            get(get_person).put(update_person).delete(delete_person),
        )
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": people_core::ping(),
        "version": people_core::core_version(),
    }))
}

#[derive(Debug, Deserialize)]
struct ListParams {
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default = "default_size")]
    size: u32,
    search: Option<String>,
    sort: Option<String>,
    order: Option<String>,
}

fn default_page() -> u32 {
    1
}

fn default_size() -> u32 {
    10
}

#[derive(Debug, Serialize)]
struct CreatedPerson {
    id: PersonId,
}

async fn list_persons(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let page = PageRequest::new(
        params.page,
        params.size,
        params.sort.as_deref(),
        params.order.as_deref(),
    );

    let conn = state.lock_db();
    let service = PersonService::new(SqlitePersonRepository::try_new(&conn)?);
    let result = service.fetch_page(params.search.as_deref(), &page)?;

    Ok((
        [(TOTAL_COUNT_HEADER, result.total.to_string())],
        Json(result.items),
    ))
}

async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<PersonId>,
) -> Result<Json<Person>, ApiError> {
    let conn = state.lock_db();
    let service = PersonService::new(SqlitePersonRepository::try_new(&conn)?);

    service
        .get(id)?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

async fn create_person(
    State(state): State<AppState>,
    Json(draft): Json<PersonDraft>,
) -> Result<(StatusCode, Json<CreatedPerson>), ApiError> {
    let conn = state.lock_db();
    let service = PersonService::new(SqlitePersonRepository::try_new(&conn)?);

    let id = service.create(&draft)?;
    info!("event=person_created module=api status=ok id={id}");

    Ok((StatusCode::CREATED, Json(CreatedPerson { id })))
}

async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<PersonId>,
    Json(draft): Json<PersonDraft>,
) -> Result<StatusCode, ApiError> {
    let conn = state.lock_db();
    let service = PersonService::new(SqlitePersonRepository::try_new(&conn)?);

    service.update(id, &draft)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<PersonId>,
) -> Result<StatusCode, ApiError> {
    let conn = state.lock_db();
    let service = PersonService::new(SqlitePersonRepository::try_new(&conn)?);

    service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
