use crate::domain::model::Feedback;
use crate::transport::http::error::ApiError;
use crate::transport::http::handlers::common::json_body;
use crate::transport::http::types::{AppState, FeedbackRequest, MessageResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    post,
    path = "/feedback",
    request_body = FeedbackRequest,
    responses(
        (status = 201, description = "Feedback recorded", body = MessageResponse),
        (status = 400, description = "A required field is missing", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn submit_feedback_handler(
    State(state): State<AppState>,
    request: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let feedback = json_body(request)?.into_new_feedback()?;

    state
        .service
        .submit_feedback(feedback)
        .await
        .map_err(|e| ApiError::from_service(e, "Error submitting feedback"))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Feedback submitted successfully!")),
    ))
}

#[utoipa::path(
    get,
    path = "/feedback",
    responses(
        (status = 200, description = "All feedback in submission order", body = Vec<Feedback>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn list_feedback_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Feedback>>, ApiError> {
    let feedback = state
        .service
        .list_feedback()
        .await
        .map_err(|e| ApiError::from_service(e, "Error fetching feedback data"))?;
    Ok(Json(feedback))
}
