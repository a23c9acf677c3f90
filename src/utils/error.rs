use thiserror::Error;

#[derive(Debug, Error)]
pub enum MrzError {
    /// The line count and line lengths match no TD1, TD2 or TD3 layout.
    #[error("cannot determine MRZ type from {lines} line(s)")]
    UnknownFormat { lines: usize },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MrzError>;
