//! Unified error types for phishscan

use thiserror::Error;

/// Main error type for phishscan operations
#[derive(Error, Debug)]
pub enum PhishscanError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("File error: {0}")]
    File(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PhishscanError>;
