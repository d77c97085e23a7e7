pub mod errors;

pub use errors::{first_validation_message, AppError, AppResult};
