use thiserror::Error;

pub type OzResult<T> = Result<T, OzError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OzError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{what} must be positive")]
    NotPositive { what: &'static str },

    #[error("Value out of range for {what}: {value} (expected {min} ..= {max})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
