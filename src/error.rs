use reqwest::StatusCode;
use thiserror::Error;

/// Error type for every client operation
///
/// Transport failures, timeouts and non-2xx statuses all arrive as
/// [`ClientError::Http`]; the client never tells them apart itself.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL could not be parsed when building the client
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Request failed, timed out, or came back with a non-success status
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Http(err) if err.is_timeout())
    }

    /// Status code of the response, when the server answered with a non-2xx status
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Http(err) => err.status(),
            ClientError::InvalidBaseUrl { .. } => None,
        }
    }
}
