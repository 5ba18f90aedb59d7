use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    Request(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Status code reported on the `serve` wire for this error.
    pub fn status(&self) -> u16 {
        match self {
            AppError::Request(_) | AppError::Json(_) => 400,
            AppError::Config(_) | AppError::Io(_) => 500,
        }
    }
}
