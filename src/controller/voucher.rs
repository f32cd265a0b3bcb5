use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    data::candidate::CandidateRepository,
    error::{credential::CredentialError, Error},
    model::{
        api::{ErrorDto, MessageDto, RecoverPinDto, VoucherRequestDto},
        app::AppState,
    },
    service::credential::CredentialService,
};

pub static VOUCHER_TAG: &str = "voucher";

/// Issue login credentials by SMS to a candidate who has paid the fee
#[utoipa::path(
    post,
    path = "/api/voucher",
    tag = VOUCHER_TAG,
    responses(
        (status = 200, description = "Success when credentials were delivered by SMS", body = MessageDto),
        (status = 400, description = "Application fee has not been paid", body = ErrorDto),
        (status = 404, description = "Candidate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn issue_voucher(
    State(state): State<AppState>,
    Json(dto): Json<VoucherRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let candidate_repository = CandidateRepository::new(&state.db);

    let candidate = candidate_repository
        .find_by_index_number(&dto.index_number)
        .await?
        .ok_or_else(|| CredentialError::CandidateNotFound(dto.index_number.clone()))?;

    if !candidate.fee_paid {
        return Err(CredentialError::FeeNotPaid(dto.index_number).into());
    }

    let credential_service = CredentialService::new(&state.db, &state.hubtel);

    credential_service
        .issue(&dto.index_number, &dto.phone_number)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Credentials sent by SMS".to_string(),
        }),
    )
        .into_response())
}

/// Regenerate a candidate's PIN and resend it by SMS
#[utoipa::path(
    post,
    path = "/api/voucher/recover",
    tag = VOUCHER_TAG,
    responses(
        (status = 200, description = "Success when new PIN was delivered by SMS", body = MessageDto),
        (status = 400, description = "No credentials issued or no phone number on record", body = ErrorDto),
        (status = 404, description = "Candidate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recover_pin(
    State(state): State<AppState>,
    Json(dto): Json<RecoverPinDto>,
) -> Result<impl IntoResponse, Error> {
    let credential_service = CredentialService::new(&state.db, &state.hubtel);

    credential_service.recover(&dto.index_number).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "New PIN sent by SMS".to_string(),
        }),
    )
        .into_response())
}
