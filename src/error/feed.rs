//! Repository feed errors.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure fetching or decoding the repository list.
///
/// Held by the feed's `Failed` state as the error marker; the working set is
/// empty whenever one of these is present.
#[derive(Debug, Clone, Error)]
pub enum FeedError {
    /// The request never produced a response.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: HttpError,
    },

    /// GitHub refused the unauthenticated request (HTTP 403/429).
    #[error("rate limited by the repository API (HTTP {status})")]
    RateLimited { status: u16 },

    /// Any other non-2xx response.
    #[error("repository API returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The body was not a JSON array of repositories.
    #[error("could not decode repository list: {message}")]
    Decode { message: String },
}

impl FeedError {
    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FeedError::Transport { .. } => "E_FEED_TRANSPORT",
            FeedError::RateLimited { .. } => "E_FEED_RATE_LIMIT",
            FeedError::Status { .. } => "E_FEED_STATUS",
            FeedError::Decode { .. } => "E_FEED_DECODE",
        }
    }

    /// Classify a non-success HTTP status.
    pub fn from_status(url: &str, status: u16) -> Self {
        match status {
            403 | 429 => FeedError::RateLimited { status },
            _ => FeedError::Status {
                url: url.to_string(),
                status,
            },
        }
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Decode {
            message: err.to_string(),
        }
    }
}
