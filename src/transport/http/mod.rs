pub mod error;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod accounts;
    pub mod common;
    pub mod donations;
    pub mod feedback;
    pub mod health;
}

pub use error::ApiError;
pub use router::{build_app, create_router, ApiDoc};
pub use types::AppState;
