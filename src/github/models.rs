use crate::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// GitHub user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
}

/// GitHub repository as returned by the list-repositories endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub updated_at: DateTime<Utc>,
    pub description: Option<String>,
}

/// File content from the contents API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileContent {
    pub name: String,
    pub path: String,
    pub content: Option<String>,
    pub encoding: Option<String>,
}

impl FileContent {
    /// Decode the base64 payload the contents API returns.
    /// GitHub wraps the encoded content with newlines, so strip
    /// whitespace before decoding.
    pub fn decoded(&self) -> Result<String> {
        let raw = self
            .content
            .as_deref()
            .ok_or_else(|| Error::Upstream("File content missing from response".to_string()))?;

        let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

        let bytes = STANDARD
            .decode(cleaned)
            .map_err(|e| Error::Upstream(format!("Failed to decode file content: {e}")))?;

        String::from_utf8(bytes)
            .map_err(|e| Error::Upstream(format!("File content is not valid UTF-8: {e}")))
    }
}

/// GitHub API rate limit information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimit {
    pub limit: u32,
    pub remaining: u32,
    pub reset: i64,
}

/// Response from the rate-limit endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitOverview {
    pub resources: RateLimitResources,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitResources {
    pub core: RateLimit,
}

/// Weekly commit counts from the participation stats endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participation {
    pub all: Vec<u64>,
}

/// Minimal issue record, only used for counting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRef {
    pub number: u64,
}

/// Minimal pull request record, only used for counting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRef {
    pub number: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_base64_content_with_newlines() {
        // "hello world" split across lines the way GitHub returns it
        let file = FileContent {
            name: "greeting.txt".to_string(),
            path: "greeting.txt".to_string(),
            content: Some("aGVsbG8g\nd29ybGQ=\n".to_string()),
            encoding: Some("base64".to_string()),
        };

        assert_eq!(file.decoded().unwrap(), "hello world");
    }

    #[test]
    fn test_decode_missing_content_is_an_error() {
        let file = FileContent {
            name: "empty".to_string(),
            path: "empty".to_string(),
            content: None,
            encoding: None,
        };

        assert!(file.decoded().is_err());
    }
}
