//! Calendar filter and selection endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use pawcal_core::{CalendarCategory, EventRecord, Scheduler};
use serde::{Deserialize, Serialize};

use crate::routes::{AppError, not_found};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/filters", get(list_filters).put(set_all_filters))
        .route("/filters/{category}/toggle", post(toggle_filter))
        .route("/selection", get(get_selection).put(set_selection))
}

/// One calendar and whether it's shown
#[derive(Serialize)]
pub struct FilterInfo {
    pub category: CalendarCategory,
    pub color: &'static str,
    pub active: bool,
}

fn filters(scheduler: &Scheduler) -> Vec<FilterInfo> {
    CalendarCategory::ALL
        .into_iter()
        .map(|category| FilterInfo {
            category,
            color: category.color(),
            active: scheduler.store().is_filter_active(category),
        })
        .collect()
}

/// GET /filters
async fn list_filters(State(state): State<AppState>) -> Json<Vec<FilterInfo>> {
    Json(filters(&*state.scheduler().await))
}

#[derive(Deserialize)]
pub struct SetAllFilters {
    pub all: bool,
}

/// PUT /filters - show or hide every calendar
async fn set_all_filters(
    State(state): State<AppState>,
    Json(req): Json<SetAllFilters>,
) -> Result<Json<Vec<FilterInfo>>, AppError> {
    let shown = state
        .transact(|scheduler| {
            scheduler.set_all_calendars(req.all);
            Ok::<_, AppError>(filters(scheduler))
        })
        .await?;

    Ok(Json(shown))
}

/// POST /filters/:category/toggle
async fn toggle_filter(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<FilterInfo>>, AppError> {
    let category: CalendarCategory = category
        .parse()
        .map_err(|e: pawcal_core::error::PawcalError| AppError::BadRequest(e.to_string()))?;

    let shown = state
        .transact(|scheduler| {
            scheduler.toggle_calendar(category);
            Ok::<_, AppError>(filters(scheduler))
        })
        .await?;

    Ok(Json(shown))
}

/// GET /selection
async fn get_selection(State(state): State<AppState>) -> Json<Option<EventRecord>> {
    Json(state.scheduler().await.store().selected_event().cloned())
}

#[derive(Deserialize)]
pub struct SetSelection {
    pub id: Option<String>,
}

/// PUT /selection - select an event by id, or clear with `null`
async fn set_selection(
    State(state): State<AppState>,
    Json(req): Json<SetSelection>,
) -> Result<Json<Option<EventRecord>>, AppError> {
    let selected = state
        .transact(|scheduler| {
            match req.id.as_deref() {
                Some(id) => {
                    if !scheduler.select_by_id(id) {
                        return Err(not_found(id));
                    }
                }
                None => scheduler.clear_selection(),
            }
            Ok(scheduler.store().selected_event().cloned())
        })
        .await?;

    Ok(Json(selected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::app;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use pawcal_core::EventStore;
    use tower::ServiceExt;

    fn test_state(dir: &tempfile::TempDir) -> AppState {
        AppState::new(
            Scheduler::new(EventStore::default()),
            dir.path().join("store.json"),
        )
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_toggle_filter() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(test_state(&dir));

        let resp = app
            .oneshot(
                Request::post("/filters/family/toggle")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body[2]["category"], "Family");
        assert_eq!(body[2]["active"], false);
        assert_eq!(body[0]["active"], true);
        assert!(dir.path().join("store.json").exists());
    }

    #[tokio::test]
    async fn test_toggle_unknown_category_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(test_state(&dir));

        let resp = app
            .oneshot(Request::post("/filters/Work/toggle").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_set_all_filters_off() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(test_state(&dir));

        let resp = app
            .oneshot(
                Request::put("/filters")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"all":false}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = body_json(resp).await;
        assert!(body.as_array().unwrap().iter().all(|f| f["active"] == false));
    }

    #[tokio::test]
    async fn test_select_unknown_event_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(test_state(&dir));

        let resp = app
            .oneshot(
                Request::put("/selection")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"id":"ghost"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
