//! Shared building blocks for the Airwave feature crates

mod error;
mod excerpt;
mod payload;

pub use error::{ErrorResponse, HttpError, error_response};
pub use excerpt::excerpt;
pub use payload::JsonPayload;
