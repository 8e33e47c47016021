use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaperlensError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend answered with a non-2xx status. `message` carries the
    /// body's `error` field when the endpoint provides one.
    #[error("Backend returned HTTP {status}")]
    Backend { status: u16, message: Option<String> },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaperlensError {
    /// True when the request never produced a usable response:
    /// connect/timeout/body errors, as opposed to an HTTP error status.
    pub fn is_transport(&self) -> bool {
        matches!(self, PaperlensError::Http(_))
    }
}

pub type Result<T> = std::result::Result<T, PaperlensError>;
