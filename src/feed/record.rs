//! Repository records and the GitHub payload they are decoded from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of `GET /users/{owner}/repos` as GitHub sends it.
///
/// Only the fields the feed uses are decoded; GitHub sends many more.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepoPayload {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub fork: bool,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub has_pages: bool,
}

/// A repository as the feed stores and shows it.
///
/// This is also the session cache format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRecord {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub html_url: String,
    pub homepage_url: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub is_fork: bool,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub has_pages: bool,
}

/// GitHub reports "no value" as either null or an empty string.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<GitHubRepoPayload> for RepositoryRecord {
    fn from(repo: GitHubRepoPayload) -> Self {
        Self {
            id: repo.id,
            name: repo.name,
            description: non_empty(repo.description),
            language: non_empty(repo.language),
            html_url: repo.html_url,
            homepage_url: non_empty(repo.homepage),
            updated_at: repo.updated_at,
            is_fork: repo.fork,
            stargazers_count: repo.stargazers_count,
            has_pages: repo.has_pages,
        }
    }
}
