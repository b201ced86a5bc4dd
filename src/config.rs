use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub aggregator: AggregatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// Number of repositories kept in the returned report, sorted by stars
    pub top_repos: usize,

    /// Number of most-recently-updated repositories probed for manifests
    pub probe_repos: usize,

    /// Repository list page size (GitHub caps this at 100)
    pub page_size: usize,

    /// Concurrent manifest probes
    pub probe_concurrency: usize,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let top_repos = std::env::var("REPOSCOPE_TOP_REPOS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid REPOSCOPE_TOP_REPOS value".to_string()))?;

        let probe_repos = std::env::var("REPOSCOPE_PROBE_REPOS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid REPOSCOPE_PROBE_REPOS value".to_string()))?;

        let page_size = std::env::var("REPOSCOPE_PAGE_SIZE")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid REPOSCOPE_PAGE_SIZE value".to_string()))?;

        let probe_concurrency = std::env::var("REPOSCOPE_PROBE_CONCURRENCY")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid REPOSCOPE_PROBE_CONCURRENCY value".to_string()))?;

        Ok(Settings {
            aggregator: AggregatorConfig {
                top_repos,
                probe_repos,
                page_size,
                probe_concurrency,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.aggregator.page_size == 0 || self.aggregator.page_size > 100 {
            return Err(Error::Config(
                "Page size must be between 1 and 100".to_string(),
            ));
        }

        if self.aggregator.probe_concurrency == 0 {
            return Err(Error::Config(
                "Probe concurrency must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            top_repos: 10,
            probe_repos: 5,
            page_size: 100,
            probe_concurrency: 5,
        }
    }
}
