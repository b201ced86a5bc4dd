use crate::github::models::{Repository, User};
use crate::techstack::TechStack;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable profile snapshot, fetched once per aggregation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
}

impl From<User> for Profile {
    fn from(user: User) -> Self {
        Self {
            login: user.login,
            name: user.name,
            bio: user.bio,
            public_repos: user.public_repos,
            followers: user.followers,
            following: user.following,
            created_at: user.created_at,
        }
    }
}

/// One repository in the aggregated report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub updated_at: DateTime<Utc>,
    pub description: Option<String>,
}

impl From<&Repository> for RepositorySummary {
    fn from(repo: &Repository) -> Self {
        Self {
            name: repo.name.clone(),
            language: repo.language.clone(),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            updated_at: repo.updated_at,
            description: repo.description.clone(),
        }
    }
}

/// Best-effort contribution counts.
///
/// `stars` is exact: the sum over the full fetched repository set.
/// The other counts come from secondary endpoints keyed on the single
/// most-recently-updated repository and fall back to zero when those
/// endpoints fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributions {
    pub commits: u64,
    pub prs: u64,
    pub issues: u64,
    pub stars: u64,
}

/// The complete aggregation result for one username
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedProfile {
    pub profile: Profile,
    /// Top repositories by star count, truncated for display
    pub repositories: Vec<RepositorySummary>,
    pub tech_stack: TechStack,
    pub contributions: Contributions,
}
