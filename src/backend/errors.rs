use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The referenced entity does not exist on the backend.
    #[error("Entity not found")]
    NotFound,

    /// The backend was unreachable, timed out, or answered with no usable
    /// body. Includes malformed responses.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend rejected the request and explained why.
    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

impl BackendError {
    /// The text shown to the user: the server's own message when it sent
    /// one, otherwise the caller's per-operation fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            BackendError::Rejected(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        BackendError::Transport(err.to_string())
    }
}
