//! Advisory service errors.
//!
//! None of these reach callers of `advise_or_fallback`; they are logged and
//! replaced with the fallback report.

use thiserror::Error;

pub type AdvisoryResult<T> = Result<T, AdvisoryError>;

#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error("Advisory transport failed: {message}")]
    Transport { message: String },

    #[error("Advisory service returned status {status}: {message}")]
    Service { status: u16, message: String },

    #[error("Malformed advisory response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Advisory response is empty")]
    EmptyResponse,
}
