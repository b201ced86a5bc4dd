pub mod aggregator;
pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod techstack;

// Re-exports
pub use aggregator::ProfileAggregator;
pub use config::Settings;
pub use error::{Error, Result};
