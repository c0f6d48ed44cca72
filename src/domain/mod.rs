pub mod copy_request;
pub mod error;
pub mod status;

pub use copy_request::CopyRequest;
pub use error::AppError;
pub use status::{CopyOutcome, LOG_TAG, StatusMessage, USAGE};
