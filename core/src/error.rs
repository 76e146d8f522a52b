use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("cache store error: {0}")]
    Store(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ProfileResult<T> = Result<T, ProfileError>;
