use std::env;

/// GitHub API configuration
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// Optional GitHub personal access token for increased rate limits
    pub token: Option<String>,

    /// Base URL for the REST API
    pub api_base_url: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl GitHubConfig {
    /// Create a new GitHubConfig from environment variables
    pub fn from_env() -> Self {
        Self {
            token: env::var("GITHUB_TOKEN").ok(),
            api_base_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            request_timeout_secs: env::var("GITHUB_REQUEST_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            user_agent: format!("Reposcope/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// True when requests will be authenticated
    /// Unauthenticated access works, just with a lower rate limit
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base_url: "https://api.github.com".to_string(),
            request_timeout_secs: 30,
            user_agent: format!("Reposcope/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
