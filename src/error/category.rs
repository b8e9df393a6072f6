//! Error category classification for unified error handling.
//!
//! Categories decide how a failure is surfaced: whether it is worth another
//! attempt, and what hint the view shows next to it.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS or timeout failures talking to the repository API.
    /// Generally transient.
    Network,

    /// The repository API answered with a non-success status.
    Server,

    /// Local preference or session storage could not be read or written.
    Storage,

    /// Malformed input from the user or a stale external reference.
    User,

    /// Invalid configuration file or environment override.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if a later attempt of the same operation may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Storage => "storage",
            ErrorCategory::User => "user",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Network connectivity issue",
            ErrorCategory::Server => "Repository service issue",
            ErrorCategory::Storage => "Local storage unavailable",
            ErrorCategory::User => "Unrecognized request",
            ErrorCategory::Configuration => "Configuration problem",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and press r to reload",
            ErrorCategory::Server => "The API may be rate limiting requests. Try again later",
            ErrorCategory::Storage => "Preferences will not be saved until storage is writable",
            ErrorCategory::User => "The request was ignored",
            ErrorCategory::Configuration => "Check ~/.folio/config.json and FOLIO_* variables",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
