//! GitHub Releases API client

use crate::domain::{ReleaseEntry, RepositoryRef};
use crate::error::RegistryError;
use crate::registry::{HttpClient, ReleaseNotesClient};
use async_trait::async_trait;

/// Default base URL for GitHub API
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub accepts at most 100 items per page
const MAX_PER_PAGE: usize = 100;

/// Release notes client for the GitHub Releases API
pub struct GitHubReleases {
    client: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl GitHubReleases {
    /// Creates a new client against the public GitHub API
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, DEFAULT_GITHUB_API_URL)
    }

    /// Creates a new client with a custom base URL
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Authenticate requests with a token (raises the rate limit)
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    fn build_url(&self, repo: &RepositoryRef, limit: usize) -> String {
        format!(
            "{}/repos/{}/{}/releases?per_page={}",
            self.base_url,
            repo.owner(),
            repo.name(),
            limit.clamp(1, MAX_PER_PAGE)
        )
    }
}

#[async_trait]
impl ReleaseNotesClient for GitHubReleases {
    async fn fetch_recent(
        &self,
        repo: &RepositoryRef,
        limit: usize,
    ) -> Result<Vec<ReleaseEntry>, RegistryError> {
        let url = self.build_url(repo, limit);
        let mut releases: Vec<ReleaseEntry> = self
            .client
            .get_json(&url, "application/vnd.github+json", self.token.as_deref())
            .await?;

        releases.truncate(limit);
        Ok(releases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn releases_client(base_url: &str) -> GitHubReleases {
        GitHubReleases::with_base_url(HttpClient::new().unwrap(), base_url)
    }

    #[test]
    fn test_build_url() {
        let client = GitHubReleases::new(HttpClient::new().unwrap());
        let repo = RepositoryRef::new("axios", "axios");
        assert_eq!(
            client.build_url(&repo, 5),
            "https://api.github.com/repos/axios/axios/releases?per_page=5"
        );
        assert_eq!(
            client.build_url(&repo, 500),
            "https://api.github.com/repos/axios/axios/releases?per_page=100"
        );
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let client = GitHubReleases::new(HttpClient::new().unwrap()).with_token(Some(String::new()));
        assert!(client.token.is_none());
    }

    #[tokio::test]
    async fn test_fetch_recent_returns_name_and_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/vitejs/vite/releases")
            .match_query(Matcher::UrlEncoded("per_page".into(), "5".into()))
            .match_header("accept", "application/vnd.github+json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"tag_name": "v6.0.0", "name": "v6.0.0", "body": "Breaking: Node 16 removed"},
                    {"tag_name": "v5.4.0", "name": null, "body": "Features"},
                    {"tag_name": "v5.3.0"}
                ]"#,
            )
            .create_async()
            .await;

        let releases = releases_client(&server.url())
            .fetch_recent(&RepositoryRef::new("vitejs", "vite"), 5)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            releases,
            vec![
                ReleaseEntry::new(Some("v6.0.0"), Some("Breaking: Node 16 removed")),
                ReleaseEntry::new(None, Some("Features")),
                ReleaseEntry::new(None, None),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_recent_truncates_to_limit() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/a/b/releases")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"[{"name": "1"}, {"name": "2"}, {"name": "3"}]"#)
            .create_async()
            .await;

        let releases = releases_client(&server.url())
            .fetch_recent(&RepositoryRef::new("a", "b"), 2)
            .await
            .unwrap();
        assert_eq!(releases.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_recent_sends_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/a/b/releases")
            .match_query(Matcher::Any)
            .match_header("authorization", "Bearer ghp_test")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = releases_client(&server.url()).with_token(Some("ghp_test".to_string()));
        let releases = client
            .fetch_recent(&RepositoryRef::new("a", "b"), 5)
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(releases.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_recent_rate_limited() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/a/b/releases")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body(r#"{"message": "API rate limit exceeded"}"#)
            .create_async()
            .await;

        let err = releases_client(&server.url())
            .fetch_recent(&RepositoryRef::new("a", "b"), 5)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Status { status: 403, .. }));
    }
}
