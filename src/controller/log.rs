use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    controller::util::require_admin,
    data::log::{AdminLogRepository, CandidateLogRepository},
    error::Error,
    model::{
        api::{ActivityLogDto, ErrorDto},
        app::AppState,
    },
};

pub static LOG_TAG: &str = "log";

/// List admin activity logs, newest first
#[utoipa::path(
    get,
    path = "/api/admin/logs/admins",
    tag = LOG_TAG,
    responses(
        (status = 200, description = "Success when retrieving admin logs", body = Vec<ActivityLogDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_logs(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let logs = AdminLogRepository::new(&state.db).list().await?;

    let log_dtos: Vec<ActivityLogDto> = logs.into_iter().map(ActivityLogDto::from).collect();

    Ok((StatusCode::OK, Json(log_dtos)).into_response())
}

/// List candidate activity logs, newest first
#[utoipa::path(
    get,
    path = "/api/admin/logs/candidates",
    tag = LOG_TAG,
    responses(
        (status = 200, description = "Success when retrieving candidate logs", body = Vec<ActivityLogDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_candidate_logs(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let logs = CandidateLogRepository::new(&state.db).list().await?;

    let log_dtos: Vec<ActivityLogDto> = logs.into_iter().map(ActivityLogDto::from).collect();

    Ok((StatusCode::OK, Json(log_dtos)).into_response())
}
