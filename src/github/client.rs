use crate::github::{
    config::GitHubConfig,
    models::{
        FileContent, IssueRef, Participation, PullRef, RateLimit, RateLimitOverview, Repository,
        User,
    },
    rate_limiter::RateLimitTracker,
};
use crate::{Error, Result};
use reqwest::{header, Client, StatusCode};
use tracing::{debug, error, warn};

/// GitHub API client
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    config: GitHubConfig,
    rate_limits: RateLimitTracker,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)
                .map_err(|e| Error::Config(format!("Invalid user agent: {e}")))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        // Add authentication if token is provided
        if let Some(token) = &config.token {
            let auth_value = format!("Bearer {token}");
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&auth_value)
                    .map_err(|e| Error::Config(format!("Invalid GitHub token: {e}")))?,
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            rate_limits: RateLimitTracker::new(),
        })
    }

    /// Make a GET request to the GitHub API
    async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.config.api_base_url, path);
        debug!("GitHub API request: GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("GitHub API request failed: {e}")))?;

        // Update rate limit from headers
        self.rate_limits
            .update_from_headers(response.headers())
            .await;

        if self.rate_limits.is_low().await {
            let (remaining, limit, reset) = self.rate_limits.status().await;
            warn!(
                "GitHub rate limit running low: {}/{} (resets at {})",
                remaining, limit, reset
            );
        }

        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            error!("GitHub API error: {} - {}", status, error_body);

            return Err(match status {
                StatusCode::NOT_FOUND => {
                    Error::NotFound(format!("GitHub resource not found: {path}"))
                }
                StatusCode::FORBIDDEN => {
                    Error::RateLimited("rate limit reached or access forbidden".to_string())
                }
                _ => Error::Upstream(format!("GitHub API error: {status}")),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to parse GitHub API response: {e}")))
    }

    /// Get a user by login
    pub async fn get_user(&self, login: &str) -> Result<User> {
        let path = format!("/users/{login}");
        self.get(&path).await
    }

    /// List one page of a user's repositories, most recently updated first
    pub async fn list_repositories(
        &self,
        login: &str,
        page: usize,
        per_page: usize,
    ) -> Result<Vec<Repository>> {
        let path = format!("/users/{login}/repos?sort=updated&per_page={per_page}&page={page}");
        self.get(&path).await
    }

    /// Get file content from the contents API
    pub async fn get_file_content(
        &self,
        owner: &str,
        repo: &str,
        file_path: &str,
    ) -> Result<FileContent> {
        let path = format!("/repos/{owner}/{repo}/contents/{file_path}");
        self.get(&path).await
    }

    /// Get weekly commit participation stats for a repository
    pub async fn get_participation(&self, owner: &str, repo: &str) -> Result<Participation> {
        let path = format!("/repos/{owner}/{repo}/stats/participation");
        self.get(&path).await
    }

    /// List issues for a repository (single-element page, used for counting)
    pub async fn list_issues(&self, owner: &str, repo: &str) -> Result<Vec<IssueRef>> {
        let path = format!("/repos/{owner}/{repo}/issues?state=all&per_page=1");
        self.get(&path).await
    }

    /// List pull requests for a repository (single-element page, used for counting)
    pub async fn list_pulls(&self, owner: &str, repo: &str) -> Result<Vec<PullRef>> {
        let path = format!("/repos/{owner}/{repo}/pulls?state=all&per_page=1");
        self.get(&path).await
    }

    /// Query the rate-limit endpoint (does not count against the limit)
    pub async fn get_rate_limit(&self) -> Result<RateLimit> {
        let overview: RateLimitOverview = self.get("/rate_limit").await?;
        Ok(overview.resources.core)
    }

    /// Whether requests carry an auth token
    pub fn is_authenticated(&self) -> bool {
        self.config.is_authenticated()
    }

    /// Get current rate limit status
    pub async fn rate_limit_status(&self) -> (u32, u32, chrono::DateTime<chrono::Utc>) {
        self.rate_limits.status().await
    }
}
