use crate::transport::http::error::ApiError;
use crate::transport::http::handlers::common::json_body;
use crate::transport::http::types::{AppState, LoginRequest, MessageResponse, SignupRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, description = "A required field is missing", body = MessageResponse),
        (status = 409, description = "Username already exists", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn signup_handler(
    State(state): State<AppState>,
    request: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let input = json_body(request)?.into_input()?;

    state
        .service
        .signup(input)
        .await
        .map_err(|e| ApiError::from_service(e, "Error creating user"))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully!")),
    ))
}

/// Advisory only: a successful login issues no token and gates nothing.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials match", body = MessageResponse),
        (status = 401, description = "Unknown user or wrong password", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn login_handler(
    State(state): State<AppState>,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let request = json_body(request)?;
    // A blank username can never match a stored user, and a blank password
    // never verifies, so both fall through to the usual 401s.
    let username = request.username.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    state
        .service
        .login(&username, &password)
        .await
        .map_err(|e| ApiError::from_service(e, "Error logging in"))?;

    Ok((StatusCode::OK, Json(MessageResponse::new("Login successful!"))))
}
