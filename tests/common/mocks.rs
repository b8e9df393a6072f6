//! Mock fixtures for integration tests.
//!
//! Re-exports the in-crate mocks and adds builders for common GitHub
//! responses.

pub use folio::adapters::mock::{MockHttpClient, MockResponse};
pub use folio::traits::{HttpError, Response};

/// Builder for a [`MockHttpClient`] answering the repository endpoint.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Answer `url` with a JSON body.
    pub fn with_json_response(self, url: &str, status: u16, json: &serde_json::Value) -> Self {
        self.client.set_response(
            url,
            MockResponse::Success(Response::new(status, json.to_string())),
        );
        self
    }

    /// Fail `url` at the transport level.
    #[allow(dead_code)]
    pub fn with_connection_failure(self, url: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string())),
        );
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
