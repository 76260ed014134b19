use crate::app::ServiceError;
use crate::domain::ValidationError;
use crate::storage::Collection;
use crate::transport::http::types::MessageResponse;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Everything a handler can fail with, mapped onto a status code and a `{message}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    BadRequest(#[from] ValidationError),

    #[error("{0}")]
    Unauthorized(&'static str),

    #[error("{0}")]
    Conflict(&'static str),

    /// `message` is the only part the client sees; `cause` goes to the log.
    #[error("{message}: {cause}")]
    Internal {
        message: &'static str,
        #[source]
        cause: ServiceError,
    },
}

impl ApiError {
    /// Maps a service failure, using `message` for anything that ends up as a 500.
    pub fn from_service(err: ServiceError, message: &'static str) -> Self {
        match err {
            ServiceError::UnknownUser => ApiError::Unauthorized("User not found"),
            ServiceError::IncorrectPassword => ApiError::Unauthorized("Incorrect password"),
            ServiceError::Duplicate(Collection::Users) => {
                ApiError::Conflict("Username already exists")
            }
            ServiceError::Duplicate(Collection::Donations) => {
                ApiError::Conflict("Donation already recorded")
            }
            ServiceError::Duplicate(Collection::Feedback) => {
                ApiError::Conflict("Feedback already recorded")
            }
            cause @ (ServiceError::Store(_) | ServiceError::Password(_)) => {
                ApiError::Internal { message, cause }
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected request body");
        ApiError::BadRequest(ValidationError::MalformedBody)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(e) => e.to_string(),
            ApiError::Unauthorized(m) | ApiError::Conflict(m) => m.to_string(),
            ApiError::Internal { message, cause } => {
                tracing::error!(error = %cause, "{message}");
                message.to_string()
            }
        };
        (status, Json(MessageResponse::new(message))).into_response()
    }
}
