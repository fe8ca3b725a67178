//! REST API handlers.
//!
//! Project CRUD goes straight to the `StateStore`; schedule generation
//! goes through the `Scheduler`. Successful responses carry the bare
//! resource as JSON, failures a `{ message, field? }` body.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{info, warn};

use weekplan_core::{NewProject, ProjectId};
use weekplan_state::PipelineSummary;

use crate::ApiState;

/// Error body returned by every failing endpoint.
#[derive(Debug, serde::Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

fn error_response(msg: &str, status: StatusCode) -> impl IntoResponse {
    (
        status,
        Json(ErrorBody {
            message: msg.to_string(),
            field: None,
        }),
    )
}

fn field_error(msg: &str, field: &str) -> impl IntoResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            message: msg.to_string(),
            field: Some(field.to_string()),
        }),
    )
}

// ── Projects ───────────────────────────────────────────────────

/// GET /api/projects
pub async fn list_projects(State(state): State<ApiState>) -> impl IntoResponse {
    match state.store.list_projects() {
        Ok(projects) => Json(projects).into_response(),
        Err(e) => error_response(&e.to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response(),
    }
}

/// GET /api/projects/:id
pub async fn get_project(
    State(state): State<ApiState>,
    Path(id): Path<ProjectId>,
) -> impl IntoResponse {
    match state.store.get_project(id) {
        Ok(Some(project)) => Json(project).into_response(),
        Ok(None) => error_response("Project not found", StatusCode::NOT_FOUND).into_response(),
        Err(e) => error_response(&e.to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response(),
    }
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<ApiState>,
    body: Result<Json<NewProject>, JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(&rejection.body_text(), StatusCode::BAD_REQUEST).into_response();
        }
    };

    let valid = match req.validate() {
        Ok(valid) => valid,
        Err(e) => {
            warn!(field = e.field, reason = e.message, "project rejected");
            return field_error(e.message, e.field).into_response();
        }
    };

    match state.store.create_project(&valid) {
        Ok(project) => {
            info!(id = project.id, title = %project.title, "project created");
            (StatusCode::CREATED, Json(project)).into_response()
        }
        Err(e) => error_response(&e.to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response(),
    }
}

/// DELETE /api/projects/:id
pub async fn delete_project(
    State(state): State<ApiState>,
    Path(id): Path<ProjectId>,
) -> impl IntoResponse {
    match state.store.delete_project(id) {
        Ok(true) => {
            info!(id, "project deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => error_response("Project not found", StatusCode::NOT_FOUND).into_response(),
        Err(e) => error_response(&e.to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response(),
    }
}

// ── Schedule ───────────────────────────────────────────────────

/// POST /api/projects/schedule
///
/// Returns every project with its newly committed day.
pub async fn generate_schedule(State(state): State<ApiState>) -> impl IntoResponse {
    match state.scheduler.generate().await {
        Ok(report) => Json(report.projects).into_response(),
        Err(e) => error_response(
            &format!("failed to generate schedule, previous schedule unchanged: {e}"),
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .into_response(),
    }
}

/// GET /api/projects/schedule/preview
pub async fn preview_schedule(State(state): State<ApiState>) -> impl IntoResponse {
    match state.scheduler.preview().await {
        Ok(week) => Json(week).into_response(),
        Err(e) => error_response(&e.to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response(),
    }
}

// ── Summary ────────────────────────────────────────────────────

/// GET /api/summary
pub async fn summary(State(state): State<ApiState>) -> impl IntoResponse {
    match state.store.list_projects() {
        Ok(projects) => Json(PipelineSummary::from_projects(&projects)).into_response(),
        Err(e) => error_response(&e.to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response(),
    }
}

/// GET /healthz
pub async fn healthz() -> &'static str {
    "ok"
}
