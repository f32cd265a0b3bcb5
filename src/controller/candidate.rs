use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::util::require_admin,
    data::{candidate::CandidateRepository, log::AdminLogRepository},
    error::{allocation::AllocationError, Error},
    model::{
        api::{
            AllocateRequestDto, AllocatedHouseDto, ApplicationNumberDto, CandidateDto,
            CreateCandidateDto, ErrorDto, MessageDto, ReassignRequestDto, UpdateCandidateDto,
        },
        app::AppState,
    },
    service::{allocation::AllocationService, sequence::ApplicationNumberService},
};

pub static CANDIDATE_TAG: &str = "candidate";

/// List all candidates
#[utoipa::path(
    get,
    path = "/api/admin/candidates",
    tag = CANDIDATE_TAG,
    responses(
        (status = 200, description = "Success when retrieving candidates", body = Vec<CandidateDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_candidates(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let candidates = CandidateRepository::new(&state.db).list().await?;

    let candidate_dtos: Vec<CandidateDto> =
        candidates.into_iter().map(CandidateDto::from).collect();

    Ok((StatusCode::OK, Json(candidate_dtos)).into_response())
}

/// Create a new candidate record
#[utoipa::path(
    post,
    path = "/api/admin/candidates",
    tag = CANDIDATE_TAG,
    responses(
        (status = 200, description = "Success when candidate was created", body = CandidateDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_candidate(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateCandidateDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let candidate = CandidateRepository::new(&state.db).create(dto).await?;

    AdminLogRepository::new(&state.db)
        .create(
            &admin.username,
            &format!("Created candidate {}", candidate.index_number),
        )
        .await?;

    Ok((StatusCode::OK, Json(CandidateDto::from(candidate))).into_response())
}

/// Get a candidate by index number
#[utoipa::path(
    get,
    path = "/api/admin/candidates/{index_number}",
    tag = CANDIDATE_TAG,
    params(
        ("index_number" = String, Path, description = "BECE index number")
    ),
    responses(
        (status = 200, description = "Success when candidate exists", body = CandidateDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Candidate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_candidate(
    State(state): State<AppState>,
    session: Session,
    Path(index_number): Path<String>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let candidate = CandidateRepository::new(&state.db)
        .find_by_index_number(&index_number)
        .await?
        .ok_or(Error::CandidateNotFound(index_number))?;

    Ok((StatusCode::OK, Json(CandidateDto::from(candidate))).into_response())
}

/// Update a candidate's details
#[utoipa::path(
    put,
    path = "/api/admin/candidates/{index_number}",
    tag = CANDIDATE_TAG,
    params(
        ("index_number" = String, Path, description = "BECE index number")
    ),
    responses(
        (status = 200, description = "Success when candidate was updated", body = CandidateDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Candidate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_candidate(
    State(state): State<AppState>,
    session: Session,
    Path(index_number): Path<String>,
    Json(dto): Json<UpdateCandidateDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let candidate = CandidateRepository::new(&state.db)
        .update_details(&index_number, dto)
        .await?
        .ok_or(Error::CandidateNotFound(index_number))?;

    AdminLogRepository::new(&state.db)
        .create(
            &admin.username,
            &format!("Updated candidate {}", candidate.index_number),
        )
        .await?;

    Ok((StatusCode::OK, Json(CandidateDto::from(candidate))).into_response())
}

/// Delete a candidate record
#[utoipa::path(
    delete,
    path = "/api/admin/candidates/{index_number}",
    tag = CANDIDATE_TAG,
    params(
        ("index_number" = String, Path, description = "BECE index number")
    ),
    responses(
        (status = 200, description = "Success when candidate was deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Candidate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_candidate(
    State(state): State<AppState>,
    session: Session,
    Path(index_number): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let result = CandidateRepository::new(&state.db)
        .delete(&index_number)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::CandidateNotFound(index_number));
    }

    AdminLogRepository::new(&state.db)
        .create(&admin.username, &format!("Deleted candidate {}", index_number))
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Candidate deleted".to_string(),
        }),
    )
        .into_response())
}

/// Place a candidate into a house with spare capacity
#[utoipa::path(
    post,
    path = "/api/admin/candidates/{index_number}/allocate",
    tag = CANDIDATE_TAG,
    params(
        ("index_number" = String, Path, description = "BECE index number")
    ),
    responses(
        (status = 200, description = "Success when candidate was placed", body = AllocatedHouseDto),
        (status = 400, description = "All houses are at full capacity", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Candidate or houses not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn allocate_house(
    State(state): State<AppState>,
    session: Session,
    Path(index_number): Path<String>,
    Json(dto): Json<AllocateRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let candidate = CandidateRepository::new(&state.db)
        .find_by_index_number(&index_number)
        .await?
        .ok_or_else(|| AllocationError::CandidateNotFound(index_number.clone()))?;

    let gender = dto
        .gender
        .or(candidate.gender)
        .ok_or_else(|| AllocationError::GenderMissing(index_number.clone()))?;

    let allocated = AllocationService::new(&state.db)
        .allocate(&gender, &index_number)
        .await?;

    AdminLogRepository::new(&state.db)
        .create(
            &admin.username,
            &format!(
                "Allocated candidate {} to house {}",
                index_number, allocated.house_name
            ),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(AllocatedHouseDto {
            house_id: allocated.house_id,
            house_name: allocated.house_name,
        }),
    )
        .into_response())
}

/// Move a candidate to a specific house
#[utoipa::path(
    put,
    path = "/api/admin/candidates/{index_number}/house",
    tag = CANDIDATE_TAG,
    params(
        ("index_number" = String, Path, description = "BECE index number")
    ),
    responses(
        (status = 200, description = "Success when candidate was moved", body = AllocatedHouseDto),
        (status = 400, description = "House is at full capacity", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Candidate or house not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reassign_house(
    State(state): State<AppState>,
    session: Session,
    Path(index_number): Path<String>,
    Json(dto): Json<ReassignRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let allocated = AllocationService::new(&state.db)
        .reassign(&index_number, dto.house_id)
        .await?;

    AdminLogRepository::new(&state.db)
        .create(
            &admin.username,
            &format!(
                "Moved candidate {} to house {}",
                index_number, allocated.house_name
            ),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(AllocatedHouseDto {
            house_id: allocated.house_id,
            house_name: allocated.house_name,
        }),
    )
        .into_response())
}

/// Generate and stamp the daily application number for a candidate
#[utoipa::path(
    post,
    path = "/api/admin/candidates/{index_number}/finalize",
    tag = CANDIDATE_TAG,
    params(
        ("index_number" = String, Path, description = "BECE index number")
    ),
    responses(
        (status = 200, description = "Success when application number was generated", body = ApplicationNumberDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Candidate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn finalize_application(
    State(state): State<AppState>,
    session: Session,
    Path(index_number): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let generated = ApplicationNumberService::new(&state.db)
        .finalize(&index_number)
        .await?;

    AdminLogRepository::new(&state.db)
        .create(
            &admin.username,
            &format!(
                "Finalized application {} for candidate {}",
                generated.application_number, index_number
            ),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApplicationNumberDto {
            application_number: generated.application_number,
            position: generated.position,
        }),
    )
        .into_response())
}
