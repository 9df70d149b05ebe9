use thiserror::Error;

/// Common error type shared by the xyfy crates
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Common Result type alias
pub type CommonResult<T> = Result<T, CommonError>;
