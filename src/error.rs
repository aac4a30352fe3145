use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0} not set. Add it to the environment or run from a directory with a .env file.")]
    ApiKeyMissing(&'static str),

    #[error("Request failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a single request through the API gateway
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("unexpected response shape: {0}")]
    Shape(#[from] serde_json::Error),
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Transport(_) => ErrorKind::Transport,
            FetchError::Status { .. } => ErrorKind::Status,
            FetchError::Shape(_) => ErrorKind::Shape,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Status,
    Shape,
    /// Malformed ISO-8601 duration. Never carried by a `FetchError`; the
    /// formatter renders it as an empty string.
    Duration,
}

/// Where in a screen's load a failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Batched video-detail or channel-thumbnail calls of the pipeline
    Enrichment,
    /// Single video/channel lookups and related-video lists
    Detail,
    /// The primary search/feed request a command depends on
    Listing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Log and continue with the data absent
    Degrade,
    /// Return the error to the caller
    Surface,
}

/// Policy table mapping a failure to how it is handled.
pub fn disposition(stage: Stage, kind: ErrorKind) -> Disposition {
    match (stage, kind) {
        (_, ErrorKind::Duration) => Disposition::Degrade,
        (Stage::Enrichment | Stage::Detail, _) => Disposition::Degrade,
        (Stage::Listing, _) => Disposition::Surface,
    }
}
