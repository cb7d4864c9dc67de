//! Event endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
};
use chrono::NaiveDateTime;
use pawcal_core::commit::validate;
use pawcal_core::view::{events_on, visible_events};
use pawcal_core::{CalendarCategory, Commit, EventRecord, Rejection};
use serde::{Deserialize, Serialize};

use crate::routes::{AppError, not_found, settle};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/check", post(check_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/events/{id}/move", patch(move_event))
}

#[derive(Deserialize)]
pub struct ListQuery {
    /// Only events starting on this day
    pub date: Option<chrono::NaiveDate>,
}

/// GET /events - Events on visible calendars
async fn list_events(
    State(state): State<AppState>,
    axum::extract::Query(query): axum::extract::Query<ListQuery>,
) -> Json<Vec<EventRecord>> {
    let scheduler = state.scheduler().await;

    let events = match query.date {
        Some(date) => events_on(scheduler.store(), date),
        None => visible_events(scheduler.store()),
    };

    Json(events.into_iter().cloned().collect())
}

/// GET /events/:id
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventRecord>, AppError> {
    state
        .scheduler()
        .await
        .store()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(&id))
}

/// POST /events - Book a new event
async fn create_event(
    State(state): State<AppState>,
    Json(event): Json<EventRecord>,
) -> Result<(StatusCode, Json<EventRecord>), AppError> {
    let id = event.id.clone();
    let created = state
        .transact(|scheduler| settle(scheduler.create(event), &id))
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /events/:id - Replace an event
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut event): Json<EventRecord>,
) -> Result<Json<EventRecord>, AppError> {
    // The path decides which event is replaced
    event.id = id.clone();

    let updated = state
        .transact(|scheduler| settle(scheduler.edit(event), &id))
        .await?;

    Ok(Json(updated))
}

#[derive(Deserialize)]
pub struct MoveRequest {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// PATCH /events/:id/move - Drag or resize
async fn move_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<EventRecord>, AppError> {
    let moved = state
        .transact(|scheduler| settle(scheduler.move_event(&id, req.start, req.end), &id))
        .await?;

    Ok(Json(moved))
}

/// DELETE /events/:id - Deleting an unknown id succeeds
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state
        .transact(|scheduler| match scheduler.remove(&id) {
            Commit::Accepted(_) | Commit::Unchanged => Ok(()),
            Commit::Rejected(reason) => Err(AppError::Rejected(reason)),
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct CheckRequest {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Check as an edit of this event
    pub id: Option<String>,
}

#[derive(Serialize)]
pub struct CheckResponse {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Rejection>,
}

/// POST /events/check - Would this span fit? Nothing is stored.
async fn check_event(
    State(state): State<AppState>,
    Json(req): Json<CheckRequest>,
) -> Json<CheckResponse> {
    let scheduler = state.scheduler().await;
    let store = scheduler.store();

    let mut candidate = match req.id.as_deref().and_then(|id| store.get(id)) {
        Some(existing) => existing.clone(),
        None => EventRecord::new("(check)", req.start, req.end, CalendarCategory::Business),
    };
    candidate.start = req.start;
    candidate.end = req.end;

    let reason = validate(&candidate, &store.events).rejection().cloned();

    Json(CheckResponse {
        available: reason.is_none(),
        reason,
    })
}
