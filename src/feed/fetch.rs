//! The single outbound request behind the feed.

use crate::error::FeedError;
use crate::traits::{Headers, HttpClient};

use super::record::{GitHubRepoPayload, RepositoryRecord};

/// Public GitHub REST API root.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Sent with every request; GitHub rejects requests without a user agent.
pub const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Build the repository-listing URL for `owner`.
pub fn repos_url(api_base: &str, owner: &str) -> String {
    format!("{}/users/{}/repos", api_base.trim_end_matches('/'), owner)
}

fn request_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert("Accept".to_string(), "application/vnd.github+json".to_string());
    headers.insert("User-Agent".to_string(), USER_AGENT.to_string());
    headers
}

/// Drop forks and order the rest most recently updated first.
pub fn curate(records: Vec<RepositoryRecord>) -> Vec<RepositoryRecord> {
    let mut originals: Vec<RepositoryRecord> = records.into_iter().filter(|r| !r.is_fork).collect();
    originals.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    originals
}

/// GET `url` and decode a curated repository list.
pub async fn fetch_repositories(
    client: &dyn HttpClient,
    url: &str,
) -> Result<Vec<RepositoryRecord>, FeedError> {
    tracing::debug!("Fetching repositories from {}", url);

    let response = client
        .get(url, &request_headers())
        .await
        .map_err(|source| FeedError::Transport {
            url: url.to_string(),
            source,
        })?;

    if !response.is_success() {
        if let Some(remaining) = response.header("x-ratelimit-remaining") {
            tracing::warn!(
                "Repository API returned {} with {} requests remaining",
                response.status,
                remaining
            );
        }
        return Err(FeedError::from_status(url, response.status));
    }

    let payload: Vec<GitHubRepoPayload> = response.json()?;
    let fetched = payload.len();
    let records = curate(payload.into_iter().map(RepositoryRecord::from).collect());

    tracing::info!(
        "Fetched {} repositories ({} after excluding forks)",
        fetched,
        records.len()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::{HttpError, Response};
    use serde_json::json;

    const URL: &str = "https://api.github.com/users/octocat/repos";

    fn repo(id: u64, updated_at: &str, fork: bool) -> serde_json::Value {
        json!({
            "id": id,
            "name": format!("repo-{}", id),
            "description": null,
            "language": "Rust",
            "html_url": format!("https://github.com/octocat/repo-{}", id),
            "homepage": null,
            "updated_at": updated_at,
            "fork": fork,
            "stargazers_count": 0,
            "has_pages": false
        })
    }

    #[test]
    fn test_repos_url() {
        assert_eq!(repos_url("https://api.github.com/", "octocat"), URL);
        assert_eq!(repos_url("http://127.0.0.1:8080", "me"), "http://127.0.0.1:8080/users/me/repos");
    }

    #[tokio::test]
    async fn test_fetch_excludes_forks_and_sorts() {
        let client = MockHttpClient::new();
        client.set_response(
            URL,
            MockResponse::json(&json!([
                repo(1, "2023-01-01T00:00:00Z", false),
                repo(2, "2024-06-01T00:00:00Z", true),
                repo(3, "2024-01-01T00:00:00Z", false),
            ])),
        );

        let records = fetch_repositories(&client, URL).await.unwrap();

        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[tokio::test]
    async fn test_fetch_sends_github_headers() {
        let client = MockHttpClient::new();
        client.set_response(URL, MockResponse::json(&json!([])));

        fetch_repositories(&client, URL).await.unwrap();

        let request = &client.get_requests()[0];
        assert_eq!(
            request.headers.get("Accept").map(String::as_str),
            Some("application/vnd.github+json")
        );
        assert!(request.headers.get("User-Agent").unwrap().starts_with("folio/"));
    }

    #[tokio::test]
    async fn test_fetch_maps_failures() {
        let client = MockHttpClient::new();

        client.set_response(URL, MockResponse::status(403));
        assert!(matches!(
            fetch_repositories(&client, URL).await,
            Err(FeedError::RateLimited { status: 403 })
        ));

        client.set_response(URL, MockResponse::status(404));
        assert!(matches!(
            fetch_repositories(&client, URL).await,
            Err(FeedError::Status { status: 404, .. })
        ));

        client.set_response(URL, MockResponse::Success(Response::new(200, "{\"message\":1}")));
        assert!(matches!(
            fetch_repositories(&client, URL).await,
            Err(FeedError::Decode { .. })
        ));

        client.set_response(
            URL,
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );
        assert!(matches!(
            fetch_repositories(&client, URL).await,
            Err(FeedError::Transport { .. })
        ));
    }
}
