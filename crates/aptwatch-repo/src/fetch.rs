//! Index fetch transport
//!
//! The tracker only needs "give me the current index text for this
//! component"; the trait keeps it testable against canned transports while
//! production uses plain HTTP(S).

use std::time::Duration;

use async_trait::async_trait;

use crate::config::Repository;
use crate::error::{RepoError, Result};

/// Transport handing the tracker the current index text.
#[async_trait]
pub trait IndexFetcher: Send + Sync {
    /// Fetch the raw `Packages` index for one component.
    ///
    /// Any failure to complete the fetch (connection, timeout, HTTP status)
    /// surfaces as an error; there is no retry policy at this layer.
    async fn fetch_index(&self, repo: &Repository, component: &str) -> Result<String>;
}

/// HTTP(S) index fetcher
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a 30 second request timeout.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("aptwatch/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| RepoError::Network {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl IndexFetcher for HttpFetcher {
    async fn fetch_index(&self, repo: &Repository, component: &str) -> Result<String> {
        let url = repo.index_url(component);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(RepoError::Http {
                status: response.status().as_u16(),
                url,
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_index_builds_apt_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dists/bookworm/main/binary-amd64/Packages"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Package: htop\n"))
            .expect(1)
            .mount(&server)
            .await;

        let repo = Repository::new(server.uri(), "bookworm", "amd64");
        let body = HttpFetcher::new()
            .unwrap()
            .fetch_index(&repo, "main")
            .await
            .unwrap();

        assert_eq!(body, "Package: htop\n");
    }

    #[tokio::test]
    async fn test_fetch_index_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let repo = Repository::new(server.uri(), "bookworm", "amd64");
        let err = HttpFetcher::new()
            .unwrap()
            .fetch_index(&repo, "main")
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::Http { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_fetch_index_unreachable_host() {
        // Port 1 is essentially never listening; the connect error must map
        // to the single fetch-failure class, not panic or hang.
        let repo = Repository::new("http://127.0.0.1:1", "bookworm", "amd64");
        let err = HttpFetcher::new()
            .unwrap()
            .fetch_index(&repo, "main")
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::Network { .. }));
    }
}
