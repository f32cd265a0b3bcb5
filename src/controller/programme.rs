use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::util::require_admin,
    data::programme::ProgrammeRepository,
    error::Error,
    model::{
        api::{CreateProgrammeDto, ErrorDto, MessageDto, ProgrammeDto},
        app::AppState,
    },
};

pub static PROGRAMME_TAG: &str = "programme";

/// List all programmes
#[utoipa::path(
    get,
    path = "/api/admin/programmes",
    tag = PROGRAMME_TAG,
    responses(
        (status = 200, description = "Success when retrieving programmes", body = Vec<ProgrammeDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_programmes(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let programmes = ProgrammeRepository::new(&state.db).list().await?;

    let programme_dtos: Vec<ProgrammeDto> =
        programmes.into_iter().map(ProgrammeDto::from).collect();

    Ok((StatusCode::OK, Json(programme_dtos)).into_response())
}

/// Create a new programme
#[utoipa::path(
    post,
    path = "/api/admin/programmes",
    tag = PROGRAMME_TAG,
    responses(
        (status = 200, description = "Success when programme was created", body = ProgrammeDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_programme(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateProgrammeDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let programme = ProgrammeRepository::new(&state.db).create(&dto.name).await?;

    Ok((StatusCode::OK, Json(ProgrammeDto::from(programme))).into_response())
}

/// Delete a programme
#[utoipa::path(
    delete,
    path = "/api/admin/programmes/{id}",
    tag = PROGRAMME_TAG,
    params(
        ("id" = i32, Path, description = "Programme ID")
    ),
    responses(
        (status = 200, description = "Success when programme was deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_programme(
    State(state): State<AppState>,
    session: Session,
    Path(programme_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    ProgrammeRepository::new(&state.db).delete(programme_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Programme deleted".to_string(),
        }),
    )
        .into_response())
}
