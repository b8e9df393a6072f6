//! Configuration loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid configuration file or environment override.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value '{value}' for {var}")]
    InvalidEnv { var: String, value: String },

    #[error("page size must be at least 1")]
    ZeroPageSize,
}

impl ConfigError {
    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "E_CFG_READ",
            ConfigError::Parse { .. } => "E_CFG_PARSE",
            ConfigError::InvalidEnv { .. } => "E_CFG_ENV",
            ConfigError::ZeroPageSize => "E_CFG_PAGE_SIZE",
        }
    }
}
