use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::util::require_admin,
    data::school_class::SchoolClassRepository,
    error::Error,
    model::{
        api::{CreateSchoolClassDto, ErrorDto, MessageDto, SchoolClassDto},
        app::AppState,
    },
};

pub static SCHOOL_CLASS_TAG: &str = "class";

/// List all classes
#[utoipa::path(
    get,
    path = "/api/admin/classes",
    tag = SCHOOL_CLASS_TAG,
    responses(
        (status = 200, description = "Success when retrieving classes", body = Vec<SchoolClassDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_classes(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let classes = SchoolClassRepository::new(&state.db).list().await?;

    let class_dtos: Vec<SchoolClassDto> =
        classes.into_iter().map(SchoolClassDto::from).collect();

    Ok((StatusCode::OK, Json(class_dtos)).into_response())
}

/// Create a new class under a programme
#[utoipa::path(
    post,
    path = "/api/admin/classes",
    tag = SCHOOL_CLASS_TAG,
    responses(
        (status = 200, description = "Success when class was created", body = SchoolClassDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_class(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateSchoolClassDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let class = SchoolClassRepository::new(&state.db)
        .create(&dto.name, &dto.programme)
        .await?;

    Ok((StatusCode::OK, Json(SchoolClassDto::from(class))).into_response())
}

/// Delete a class
#[utoipa::path(
    delete,
    path = "/api/admin/classes/{id}",
    tag = SCHOOL_CLASS_TAG,
    params(
        ("id" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Success when class was deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_class(
    State(state): State<AppState>,
    session: Session,
    Path(class_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    SchoolClassRepository::new(&state.db).delete(class_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Class deleted".to_string(),
        }),
    )
        .into_response())
}
