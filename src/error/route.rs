//! Section navigation errors.

use thiserror::Error;

/// A section request that the router refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The identifier names no section at all (e.g. a stale deep link).
    #[error("unknown section '{0}'")]
    UnknownSection(String),

    /// The section exists but is switched off in this build's navigation.
    #[error("section '{0}' is disabled")]
    SectionDisabled(String),
}

impl RouteError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RouteError::UnknownSection(_) => "E_ROUTE_UNKNOWN",
            RouteError::SectionDisabled(_) => "E_ROUTE_DISABLED",
        }
    }
}
