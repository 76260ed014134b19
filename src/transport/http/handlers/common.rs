use crate::transport::http::error::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::Json;

/// Unwraps an optional-JSON extractor, turning a rejection into a 400.
pub fn json_body<T>(request: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    let Json(body) = request?;
    Ok(body)
}
