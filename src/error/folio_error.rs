//! Unified error type for folio.

use thiserror::Error;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::feed::FeedError;
use super::route::RouteError;
use super::storage::StorageError;

/// Every failure the core can produce.
///
/// Components recover from these locally; `FolioError` exists so the binary
/// and the logs can classify them uniformly.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Route(#[from] RouteError),
}

impl FolioError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::Storage(_) => ErrorCategory::Storage,
            FolioError::Feed(err) => match err {
                FeedError::Transport { .. } => ErrorCategory::Network,
                FeedError::RateLimited { .. }
                | FeedError::Status { .. }
                | FeedError::Decode { .. } => ErrorCategory::Server,
            },
            FolioError::Config(_) => ErrorCategory::Configuration,
            FolioError::Route(_) => ErrorCategory::User,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            // A malformed body will not fix itself on the next request
            FolioError::Feed(FeedError::Decode { .. }) => false,
            other => other.category().is_retryable(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FolioError::Storage(err) => err.error_code(),
            FolioError::Feed(err) => err.error_code(),
            FolioError::Config(err) => err.error_code(),
            FolioError::Route(err) => err.error_code(),
        }
    }

    /// Message suitable for the status line.
    pub fn user_message(&self) -> String {
        format!("{}. {}", self.category().description(), self.category().recovery_hint())
    }
}
