use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Request never reached the backend (offline, CORS, aborted).
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-2xx status.
    #[error("HTTP {status}")]
    Http { status: u16 },

    /// Response arrived but did not contain any shape we accept.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl AppError {
    /// Whether the backend produced a response at all. Only used to pick
    /// the log line; the UI treats every failure as one banner.
    pub fn had_response(&self) -> bool {
        !matches!(self, AppError::Network(_))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
