use thiserror::Error;

#[derive(Debug, Error)]
pub enum PilotError {
    /// Nothing to compare. Never reported as a zeroed result.
    #[error("Nothing to compare: {0}")]
    EmptyInput(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PilotError {
    /// True for the "nothing to compare" failure.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, PilotError::EmptyInput(_))
    }
}

pub type Result<T> = std::result::Result<T, PilotError>;
