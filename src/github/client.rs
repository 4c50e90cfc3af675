//! GitHub API client implementation

use crate::config::Config;
use crate::core::{MonopackError, MonopackResult};
use crate::github::types::{ApiErrorBody, ContentEntry};
use crate::github::ContentsLister;
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient, StatusCode};
use std::time::Duration;

/// GitHub API client
pub struct GitHubClient {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client from config.
    ///
    /// Anonymous by default; an `Authorization` header is attached only when
    /// the config carries a token.
    pub fn new(config: &Config) -> MonopackResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("monopack"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        if let Some(ref token) = config.token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("token {}", token))
                    .map_err(|e| MonopackError::Config(format!("Invalid GitHub token: {}", e)))?,
            );
        }

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                MonopackError::RemoteTransport(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            api_url: config.api_url.clone(),
        })
    }

    fn contents_url(&self, owner: &str, repo: &str, path: &str) -> String {
        let encoded_path = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| urlencoding::encode(s).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url, owner, repo, encoded_path
        )
    }
}

#[async_trait]
impl ContentsLister for GitHubClient {
    async fn list_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> MonopackResult<Vec<ContentEntry>> {
        let url = self.contents_url(owner, repo, path);
        tracing::debug!(%url, "listing repository contents");

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            MonopackError::RemoteTransport(format!("GitHub API request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            // GitHub attaches a JSON message body to errors; fold it into the
            // report when present.
            let detail = response
                .json::<ApiErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| format!("HTTP {}", status));

            return Err(match status {
                StatusCode::NOT_FOUND => MonopackError::RemoteNotFound(format!(
                    "{}/{} path \"{}\" ({})",
                    owner, repo, path, detail
                )),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => MonopackError::RemoteAuth(
                    format!("{} (HTTP {}). Consider setting GITHUB_TOKEN.", detail, status),
                ),
                _ => MonopackError::RemoteTransport(format!("HTTP {}: {}", status, detail)),
            });
        }

        let entries: Vec<ContentEntry> = response.json().await.map_err(|e| {
            MonopackError::RemoteTransport(format!("Failed to parse contents response: {}", e))
        })?;

        tracing::debug!(count = entries.len(), "listing returned entries");
        Ok(entries)
    }
}
