use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("vector lengths do not match ({left} vs {right})")]
    DimensionMismatch { left: usize, right: usize },

    #[error("zero vector found")]
    ZeroVector,

    #[error("similarity is not a finite number")]
    NonFinite,

    #[error("line exceeds {0} bytes")]
    LineTooLong(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("{0}")]
    Usage(&'static str),

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json wraps writer failures; keep those as I/O errors.
        if e.is_io() {
            DomainError::Io(e.into())
        } else {
            DomainError::Decode(e.to_string())
        }
    }
}
