use crate::domain::model::Donation;
use crate::transport::http::error::ApiError;
use crate::transport::http::handlers::common::json_body;
use crate::transport::http::types::{AppState, DonationRequest, MessageResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    post,
    path = "/donate",
    request_body = DonationRequest,
    responses(
        (status = 201, description = "Donation recorded", body = MessageResponse),
        (status = 400, description = "A required field is missing or unparseable", body = MessageResponse),
        (status = 409, description = "Transaction hash already recorded", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn donate_handler(
    State(state): State<AppState>,
    request: Result<Json<DonationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let donation = json_body(request)?.into_new_donation()?;

    state
        .service
        .submit_donation(donation)
        .await
        .map_err(|e| ApiError::from_service(e, "Error submitting donation"))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Donation submitted successfully!")),
    ))
}

#[utoipa::path(
    get,
    path = "/transactions/{address}",
    params(
        ("address" = String, Path, description = "Recipient (temple) wallet address")
    ),
    responses(
        (status = 200, description = "Donations received by the address, possibly empty", body = Vec<Donation>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn transactions_handler(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<Vec<Donation>>, ApiError> {
    let donations = state
        .service
        .transactions_for(&address)
        .await
        .map_err(|e| ApiError::from_service(e, "Error fetching transactions"))?;
    Ok(Json(donations))
}
