pub mod model;
pub mod validation;

pub use validation::ValidationError;
