//! HTTP error mapping.
//!
//! # Responsibility
//! - Translate core errors into status codes and JSON message bodies.
//!
//! # Invariants
//! - Storage failures surface as 503 without retry.
//! - A missing person is 404; it is never a storage failure.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use people_core::{PersonId, RepoError};
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    Storage(RepoError),
    NotFound(PersonId),
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Storage(err) => {
                error!("event=request_failed module=api status=error error={err}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({ "message": "storage unavailable" })),
                )
                    .into_response()
            }
            Self::NotFound(id) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": format!("person {id} not found") })),
            )
                .into_response(),
        }
    }
}
