use thiserror::Error;

/// Errors that can occur while browsing a repository
///
/// Rate-limit responses from the API (403/429) surface as plain `Http`
/// errors, indistinguishable from a missing folder. That conflation comes
/// from the deployment this crate models and is kept as-is.
#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("HTTP error {status}: {url}")]
    Http {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for browse operations
pub type Result<T> = std::result::Result<T, BrowseError>;
