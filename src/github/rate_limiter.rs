use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Tracks GitHub rate-limit headers across requests.
///
/// This crate never waits or retries: a rate-limited call fails
/// terminally. The tracker only feeds logging and the `status` command.
#[derive(Clone)]
pub struct RateLimitTracker {
    state: Arc<RwLock<RateLimitState>>,
}

#[derive(Debug, Clone)]
struct RateLimitState {
    /// Total rate limit
    limit: u32,

    /// Remaining requests
    remaining: u32,

    /// Unix timestamp when rate limit resets
    reset_at: i64,
}

impl RateLimitTracker {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(RateLimitState {
                limit: 60, // Default for unauthenticated requests
                remaining: 60,
                reset_at: Utc::now().timestamp() + 3600,
            })),
        }
    }

    /// Update rate limit from GitHub API response headers
    pub async fn update_from_headers(&self, headers: &reqwest::header::HeaderMap) {
        let mut state = self.state.write().await;

        if let Some(limit) = headers
            .get("x-ratelimit-limit")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
        {
            state.limit = limit;
        }

        if let Some(remaining) = headers
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
        {
            state.remaining = remaining;
        }

        if let Some(reset) = headers
            .get("x-ratelimit-reset")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
        {
            state.reset_at = reset;
        }

        debug!(
            "Rate limit updated: {}/{} (resets at {})",
            state.remaining, state.limit, state.reset_at
        );
    }

    /// True when fewer than 10% of requests (minimum 5) remain
    pub async fn is_low(&self) -> bool {
        let state = self.state.read().await;
        state.remaining <= (state.limit / 10).max(5)
    }

    /// Get current rate limit status
    pub async fn status(&self) -> (u32, u32, DateTime<Utc>) {
        let state = self.state.read().await;
        (
            state.remaining,
            state.limit,
            DateTime::from_timestamp(state.reset_at, 0).unwrap_or_else(Utc::now),
        )
    }
}

impl Default for RateLimitTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue};

    #[tokio::test]
    async fn test_update_from_headers() {
        let tracker = RateLimitTracker::new();

        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("5000"));
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("4321"));
        headers.insert("x-ratelimit-reset", HeaderValue::from_static("1700000000"));

        tracker.update_from_headers(&headers).await;

        let (remaining, limit, _reset) = tracker.status().await;
        assert_eq!(remaining, 4321);
        assert_eq!(limit, 5000);
        assert!(!tracker.is_low().await);
    }

    #[tokio::test]
    async fn test_low_threshold() {
        let tracker = RateLimitTracker::new();

        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("60"));
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("4"));

        tracker.update_from_headers(&headers).await;
        assert!(tracker.is_low().await);
    }
}
