use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::{CheckoutDto, ErrorDto, InitiatePaymentDto, PaymentStatusDto},
        app::AppState,
    },
    service::payment::PaymentService,
};

pub static PAYMENT_TAG: &str = "payment";

/// Start an application fee checkout for a candidate
#[utoipa::path(
    post,
    path = "/api/payment/initiate",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "Success when checkout was created", body = CheckoutDto),
        (status = 404, description = "Candidate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn initiate_payment(
    State(state): State<AppState>,
    Json(dto): Json<InitiatePaymentDto>,
) -> Result<impl IntoResponse, Error> {
    let payment_service = PaymentService::new(&state.db, &state.hubtel, &state.status_checks);

    let payment = payment_service
        .initiate(&dto.index_number, state.application_fee)
        .await?;

    Ok((
        StatusCode::OK,
        Json(CheckoutDto {
            checkout_url: payment.checkout_url,
            client_reference: payment.client_reference,
        }),
    )
        .into_response())
}

/// Get the current status of a payment attempt
#[utoipa::path(
    get,
    path = "/api/payment/status/{client_reference}",
    tag = PAYMENT_TAG,
    params(
        ("client_reference" = String, Path, description = "Client reference returned at checkout initiation")
    ),
    responses(
        (status = 200, description = "Success when payment exists", body = PaymentStatusDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn payment_status(
    State(state): State<AppState>,
    Path(client_reference): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let payment_service = PaymentService::new(&state.db, &state.hubtel, &state.status_checks);

    let status = payment_service.check_status(&client_reference).await?;

    Ok((
        StatusCode::OK,
        Json(PaymentStatusDto {
            client_reference,
            status: status.as_str().to_string(),
        }),
    )
        .into_response())
}
