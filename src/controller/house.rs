use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::util::require_admin,
    data::house::HouseRepository,
    error::{allocation::AllocationError, Error},
    model::{
        api::{CreateHouseDto, ErrorDto, HouseDto, MessageDto},
        app::AppState,
    },
};

pub static HOUSE_TAG: &str = "house";

/// List all houses with their occupancy
#[utoipa::path(
    get,
    path = "/api/admin/houses",
    tag = HOUSE_TAG,
    responses(
        (status = 200, description = "Success when retrieving houses", body = Vec<HouseDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_houses(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let houses = HouseRepository::new(&state.db).list().await?;

    let house_dtos: Vec<HouseDto> = houses.into_iter().map(HouseDto::from).collect();

    Ok((StatusCode::OK, Json(house_dtos)).into_response())
}

/// Create a new house
#[utoipa::path(
    post,
    path = "/api/admin/houses",
    tag = HOUSE_TAG,
    responses(
        (status = 200, description = "Success when house was created", body = HouseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_house(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateHouseDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let house = HouseRepository::new(&state.db)
        .create(&dto.name, &dto.gender, dto.capacity)
        .await?;

    Ok((StatusCode::OK, Json(HouseDto::from(house))).into_response())
}

/// Update a house's name, gender, or capacity
#[utoipa::path(
    put,
    path = "/api/admin/houses/{id}",
    tag = HOUSE_TAG,
    params(
        ("id" = i32, Path, description = "House ID")
    ),
    responses(
        (status = 200, description = "Success when house was updated", body = HouseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "House not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_house(
    State(state): State<AppState>,
    session: Session,
    Path(house_id): Path<i32>,
    Json(dto): Json<CreateHouseDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let house = HouseRepository::new(&state.db)
        .update(house_id, &dto.name, &dto.gender, dto.capacity)
        .await?
        .ok_or(AllocationError::HouseNotFound(house_id))?;

    Ok((StatusCode::OK, Json(HouseDto::from(house))).into_response())
}

/// Delete a house
#[utoipa::path(
    delete,
    path = "/api/admin/houses/{id}",
    tag = HOUSE_TAG,
    params(
        ("id" = i32, Path, description = "House ID")
    ),
    responses(
        (status = 200, description = "Success when house was deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "House not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_house(
    State(state): State<AppState>,
    session: Session,
    Path(house_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let result = HouseRepository::new(&state.db).delete(house_id).await?;

    if result.rows_affected == 0 {
        return Err(AllocationError::HouseNotFound(house_id).into());
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "House deleted".to_string(),
        }),
    )
        .into_response())
}
