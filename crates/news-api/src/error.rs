use thiserror::Error;

/// Everything that can go wrong talking to the backend.
///
/// Read operations collapse all of these into empty data; only the
/// strict `try_*` reads and the write operations hand them out.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API configuration: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Broadcast rejected: {0}")]
    Rejected(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
