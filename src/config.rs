//! Runtime configuration.
//!
//! Resolution order: built-in defaults, then `~/.folio/config.json` if it
//! exists, then `FOLIO_*` environment variables. Command-line flags are
//! applied on top by the binary.
//!
//! ```ignore
//! use folio::config::FolioConfig;
//!
//! let config = FolioConfig::default()
//!     .with_github_owner("octocat")
//!     .with_page_size(9);
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::adapters::file_store::STATE_DIR;
use crate::error::ConfigError;
use crate::feed::{DEFAULT_PAGE_SIZE, GITHUB_API_BASE};

/// Config file name inside the state directory.
pub const CONFIG_FILE: &str = "config.json";

pub const ENV_GITHUB_OWNER: &str = "FOLIO_GITHUB_OWNER";
pub const ENV_API_BASE: &str = "FOLIO_API_BASE";
pub const ENV_PAGE_SIZE: &str = "FOLIO_PAGE_SIZE";
pub const ENV_CERTIFICATES: &str = "FOLIO_CERTIFICATES";

/// Everything the binary needs to build a [`Portfolio`](crate::portfolio::Portfolio).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// GitHub account whose public repositories fill the projects section
    pub github_owner: String,
    /// REST API root
    pub api_base_url: String,
    /// Projects shown per page
    pub page_size: usize,
    /// Show the certificates section in navigation
    pub certificates_enabled: bool,
    /// Preferences file; `None` means `~/.folio/preferences.json`
    pub storage_path: Option<PathBuf>,
    pub request_timeout_secs: u64,
    pub profile_name: String,
    pub profile_title: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            github_owner: "octocat".to_string(),
            api_base_url: GITHUB_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            certificates_enabled: false,
            storage_path: None,
            request_timeout_secs: 15,
            profile_name: "Your Name".to_string(),
            profile_title: "Software Engineer".to_string(),
        }
    }
}

impl FolioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_github_owner(mut self, owner: impl Into<String>) -> Self {
        self.github_owner = owner.into();
        self
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_certificates_enabled(mut self, enabled: bool) -> Self {
        self.certificates_enabled = enabled;
        self
    }

    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_profile(mut self, name: impl Into<String>, title: impl Into<String>) -> Self {
        self.profile_name = name.into();
        self.profile_title = title.into();
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// `~/.folio/config.json`, if a home directory can be found.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(STATE_DIR).join(CONFIG_FILE))
    }

    /// Load defaults, the default config file, and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match Self::default_path() {
            Some(path) => Self::from_file_or_default(&path)?,
            None => Self::default(),
        };
        base.apply_env(|var| std::env::var(var).ok())
    }

    /// Parse `path`; a missing file yields the defaults.
    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        config.validate()
    }

    /// Overlay `FOLIO_*` variables read through `lookup`.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(owner) = present(ENV_GITHUB_OWNER) {
            self.github_owner = owner.trim().to_string();
        }
        if let Some(base) = present(ENV_API_BASE) {
            self.api_base_url = base.trim().to_string();
        }
        if let Some(raw) = present(ENV_PAGE_SIZE) {
            self.page_size = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_PAGE_SIZE.to_string(),
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = present(ENV_CERTIFICATES) {
            self.certificates_enabled = parse_flag(&raw).ok_or_else(|| ConfigError::InvalidEnv {
                var: ENV_CERTIFICATES.to_string(),
                value: raw.clone(),
            })?;
        }

        self.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(self)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
