use thiserror::Error;

/// Error type that captures common tally failures.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Usage error: {0}")]
    Usage(String),
}
