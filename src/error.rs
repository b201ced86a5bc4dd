use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("GitHub rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get a sanitized error message safe for logging
    /// Filters out potentially sensitive information
    pub fn log_safe(&self) -> String {
        match self {
            // Upstream errors might echo request URLs or authentication info
            Error::Upstream(msg) => {
                if msg.to_lowercase().contains("token")
                    || msg.to_lowercase().contains("authorization")
                    || msg.to_lowercase().contains("secret")
                {
                    "Upstream error (details redacted)".to_string()
                } else {
                    format!("Upstream error: {msg}")
                }
            }

            // These errors are generally safe to log as-is
            Error::InvalidInput(msg) => format!("Invalid input: {msg}"),
            Error::NotFound(msg) => format!("Not found: {msg}"),
            Error::RateLimited(msg) => format!("Rate limited: {msg}"),
            Error::Config(msg) => format!("Configuration error: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_safe_redacts_token_details() {
        let err = Error::Upstream("request failed: bad token abc123".to_string());
        assert_eq!(err.log_safe(), "Upstream error (details redacted)");

        let err = Error::Upstream("HTTP 502".to_string());
        assert_eq!(err.log_safe(), "Upstream error: HTTP 502");
    }
}
