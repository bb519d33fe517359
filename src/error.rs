use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordFreqError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP status error: {0}")]
    HttpStatus(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialize(serde_json::Error),

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, WordFreqError>;
