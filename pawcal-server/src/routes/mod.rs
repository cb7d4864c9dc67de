pub mod calendars;
pub mod events;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pawcal_core::{Commit, EventRecord, Rejection};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(events::router())
        .merge(calendars::router())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Rejection>,
}

pub enum AppError {
    BadRequest(String),
    NotFound(String),
    /// A change the scheduler refused
    Rejected(Rejection),
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(error) => (StatusCode::BAD_REQUEST, ErrorResponse { error, reason: None }),
            AppError::NotFound(error) => (StatusCode::NOT_FOUND, ErrorResponse { error, reason: None }),
            AppError::Rejected(reason) => {
                let status = match reason {
                    Rejection::Overlap(_) => StatusCode::CONFLICT,
                    Rejection::InvalidRange { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                    Rejection::NotEditable | Rejection::NotDraggable | Rejection::NotDeletable => {
                        StatusCode::FORBIDDEN
                    }
                };
                (
                    status,
                    ErrorResponse {
                        error: reason.to_string(),
                        reason: Some(reason),
                    },
                )
            }
            AppError::Internal(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: err.to_string(),
                    reason: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("No event with id '{}'", id))
}

/// Applied event, or the HTTP error for why it wasn't applied.
fn settle(commit: Commit, id: &str) -> Result<EventRecord, AppError> {
    match commit {
        Commit::Accepted(event) => Ok(event),
        Commit::Rejected(reason) => Err(AppError::Rejected(reason)),
        Commit::Unchanged => Err(not_found(id)),
    }
}
