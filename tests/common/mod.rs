//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{github_repos_fixture, TestPortfolioBuilder};
//!
//! let portfolio = TestPortfolioBuilder::new().with_platform_dark(true).build();
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use folio::adapters::MemoryStore;
use folio::config::FolioConfig;
use folio::portfolio::{Portfolio, PortfolioDeps};
use folio::traits::{FixedColorScheme, HttpClient, KeyValueStore};
use serde_json::{json, Value};

pub const TEST_OWNER: &str = "octocat";

/// Repository URL the feed requests for [`TEST_OWNER`] against api.github.com.
pub fn test_repos_url() -> String {
    format!("https://api.github.com/users/{}/repos", TEST_OWNER)
}

/// One repository as GitHub returns it.
pub fn repo_json(id: u64, language: Option<&str>, updated_at: &str, fork: bool) -> Value {
    json!({
        "id": id,
        "name": format!("project-{}", id),
        "full_name": format!("{}/project-{}", TEST_OWNER, id),
        "description": format!("Project number {}", id),
        "language": language,
        "html_url": format!("https://github.com/{}/project-{}", TEST_OWNER, id),
        "homepage": "",
        "updated_at": updated_at,
        "fork": fork,
        "stargazers_count": id * 3,
        "has_pages": id % 2 == 0,
        "private": false
    })
}

/// Ten repositories; ids 3 and 6 are forks. The rest, newest first, are
/// 10, 9, 8, 7, 5, 4, 2, 1.
pub fn github_repos_fixture() -> Value {
    let languages = [
        Some("Rust"),
        Some("TypeScript"),
        Some("Go"),
        Some("Rust"),
        None,
        Some("Go"),
        Some("Python"),
        Some("Rust"),
        Some("TypeScript"),
        Some("Rust"),
    ];
    let repos: Vec<Value> = (1..=10u64)
        .map(|id| {
            let updated = format!("2024-01-{:02}T12:00:00Z", id);
            repo_json(id, languages[(id - 1) as usize], &updated, id == 3 || id == 6)
        })
        .collect();
    Value::Array(repos)
}

/// Builder for a [`Portfolio`] over in-memory or caller-supplied stores.
pub struct TestPortfolioBuilder {
    config: FolioConfig,
    persistent: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
    http: Arc<dyn HttpClient>,
    platform_dark: Option<bool>,
}

impl TestPortfolioBuilder {
    pub fn new() -> Self {
        Self {
            config: FolioConfig::default().with_github_owner(TEST_OWNER),
            persistent: Arc::new(MemoryStore::new()),
            session: Arc::new(MemoryStore::new()),
            http: Arc::new(MockHttpClient::new()),
            platform_dark: None,
        }
    }

    pub fn with_config(mut self, config: FolioConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_persistent(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.persistent = store;
        self
    }

    pub fn with_session(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.session = store;
        self
    }

    pub fn with_http(mut self, http: Arc<dyn HttpClient>) -> Self {
        self.http = http;
        self
    }

    pub fn with_platform_dark(mut self, dark: bool) -> Self {
        self.platform_dark = Some(dark);
        self
    }

    pub fn build(self) -> Portfolio {
        Portfolio::new(
            &self.config,
            PortfolioDeps {
                persistent: self.persistent,
                session: self.session,
                http: self.http,
                color_scheme: Arc::new(FixedColorScheme(self.platform_dark)),
            },
        )
    }
}

impl Default for TestPortfolioBuilder {
    fn default() -> Self {
        Self::new()
    }
}
