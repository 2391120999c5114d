//! usersearch Client Library
//!
//! Blocking HTTP client for the paginated user search endpoint.

mod client;

pub use client::SearchClient;
pub use usersearch_core::{ClientConfig, OrderBy, SearchRequest, SearchResponse, User};

/// Coarse classification of a failed `find_users` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidParams,
    Unauthorized,
    ServerFault,
    Transport,
    DecodeError,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Rejected locally or by the server with a 400
    #[error("{0}")]
    InvalidParams(String),

    #[error("Bad AccessToken")]
    Unauthorized,

    #[error("SearchServer fatal error")]
    ServerFault,

    #[error("SearchServer fatal error: unexpected status {0}")]
    UnexpectedStatus(u16),

    #[error("timeout for {0}")]
    Timeout(String),

    #[error("unknown error {0}")]
    Request(#[source] reqwest::Error),

    #[error("cant unpack error json: {0}")]
    ErrorBody(#[source] serde_json::Error),

    #[error("cant unpack result json: {0}")]
    ResultBody(#[source] serde_json::Error),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::InvalidParams(_) => ErrorKind::InvalidParams,
            ClientError::Unauthorized => ErrorKind::Unauthorized,
            ClientError::ServerFault | ClientError::UnexpectedStatus(_) => ErrorKind::ServerFault,
            ClientError::Timeout(_) | ClientError::Request(_) => ErrorKind::Transport,
            ClientError::ErrorBody(_) | ClientError::ResultBody(_) => ErrorKind::DecodeError,
        }
    }

    /// Whether repeating the same call later could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind(), ErrorKind::ServerFault | ErrorKind::Transport)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
