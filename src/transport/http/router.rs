use crate::domain::model::{Donation, Feedback};
use crate::transport::http::handlers::{accounts, donations, feedback, health};
use crate::transport::http::types::{
    AppState, DonationRequest, FeedbackRequest, HealthResponse, LoginRequest, MessageResponse,
    SignupRequest,
};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::root_handler,
        health::healthcheck_handler,
        accounts::signup_handler,
        accounts::login_handler,
        donations::donate_handler,
        donations::transactions_handler,
        feedback::submit_feedback_handler,
        feedback::list_feedback_handler
    ),
    components(schemas(
        SignupRequest,
        LoginRequest,
        DonationRequest,
        FeedbackRequest,
        MessageResponse,
        HealthResponse,
        Donation,
        Feedback
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::healthcheck_handler))
        .route("/signup", post(accounts::signup_handler))
        .route("/login", post(accounts::login_handler))
        .route("/donate", post(donations::donate_handler))
        .route("/transactions/:address", get(donations::transactions_handler))
        .route(
            "/feedback",
            get(feedback::list_feedback_handler).post(feedback::submit_feedback_handler),
        )
        .with_state(app_state)
}

/// The full application: routes plus Swagger UI, permissive CORS and request tracing.
pub fn build_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
