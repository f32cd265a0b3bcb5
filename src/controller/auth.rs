use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    data::{candidate::CandidateRepository, log::CandidateLogRepository},
    error::{auth::AuthError, Error},
    model::{
        api::{CandidateDto, CandidateLoginDto, ErrorDto, MessageDto, VerifyRequestDto},
        app::AppState,
        session::candidate::SessionCandidate,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Look up a candidate by BECE index number
#[utoipa::path(
    post,
    path = "/api/verify",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Success when candidate exists for index number", body = CandidateDto),
        (status = 404, description = "Candidate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_index_number(
    State(state): State<AppState>,
    Json(dto): Json<VerifyRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let candidate_repository = CandidateRepository::new(&state.db);

    let candidate = candidate_repository
        .find_by_index_number(&dto.index_number)
        .await?
        .ok_or(Error::CandidateNotFound(dto.index_number))?;

    Ok((StatusCode::OK, Json(CandidateDto::from(candidate))).into_response())
}

/// Log a candidate in with their serial number and PIN
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Success when serial number and PIN are valid", body = CandidateDto),
        (status = 401, description = "Invalid serial number or PIN", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn candidate_login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CandidateLoginDto>,
) -> Result<impl IntoResponse, Error> {
    let candidate_repository = CandidateRepository::new(&state.db);

    let Some(candidate) = candidate_repository
        .find_by_serial_number(&dto.serial_number)
        .await?
    else {
        return Err(AuthError::InvalidCredentials.into());
    };

    let Some(pin_hash) = candidate.pin.as_deref() else {
        return Err(AuthError::InvalidCredentials.into());
    };

    if !bcrypt::verify(&dto.pin, pin_hash)? {
        return Err(AuthError::InvalidCredentials.into());
    }

    SessionCandidate::insert(&session, &candidate.index_number).await?;

    CandidateLogRepository::new(&state.db)
        .create(
            &format!("{} {}", candidate.surname, candidate.other_names),
            "Logged in",
        )
        .await?;

    tracing::info!("Candidate {} logged in", candidate.index_number);

    Ok((StatusCode::OK, Json(CandidateDto::from(candidate))).into_response())
}

/// Log the current candidate out
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Success when session is cleared", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn candidate_logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    if let Some(index_number) = SessionCandidate::get(&session).await? {
        if let Some(candidate) = CandidateRepository::new(&state.db)
            .find_by_index_number(&index_number)
            .await?
        {
            CandidateLogRepository::new(&state.db)
                .create(
                    &format!("{} {}", candidate.surname, candidate.other_names),
                    "Logged out",
                )
                .await?;
        }
    }

    session.clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    )
        .into_response())
}
