pub mod models;

use crate::config::AggregatorConfig;
use crate::github::{models::Repository, GitHubClient};
use crate::techstack::{self, manifest};
use crate::{Error, Result};
use futures::stream::{self, StreamExt};
use self::models::{AggregatedProfile, Contributions, Profile, RepositorySummary};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Aggregates a GitHub user's profile, repositories, tech stack and
/// contribution counts into one immutable report.
///
/// Every call re-fetches everything; there is no cache and no state
/// carried between calls.
#[derive(Clone)]
pub struct ProfileAggregator {
    client: GitHubClient,
    config: AggregatorConfig,
}

impl ProfileAggregator {
    pub fn new(client: GitHubClient, config: AggregatorConfig) -> Self {
        Self { client, config }
    }

    /// Aggregate one user.
    ///
    /// Fails with `InvalidInput` for an empty username, `NotFound` for an
    /// unknown user, `RateLimited` or `Upstream` for hard API failures on
    /// the profile or repository-list fetches. Manifest probes and
    /// contribution stats are best-effort and never fail the run.
    pub async fn aggregate(&self, username: &str) -> Result<AggregatedProfile> {
        let username = username.trim();
        if username.is_empty() {
            return Err(Error::InvalidInput("Username cannot be empty".to_string()));
        }

        info!("Aggregating profile for {}", username);

        let profile: Profile = self
            .client
            .get_user(username)
            .await
            .map_err(|e| match e {
                Error::NotFound(_) => Error::NotFound(format!(
                    "GitHub user \"{username}\" not found. Check the username and try again."
                )),
                other => other,
            })?
            .into();

        // Full repository set, most recently updated first
        let repos = self.fetch_all_repositories(username).await?;
        debug!("Fetched {} repositories for {}", repos.len(), username);

        // Stars are summed over the full set, before any truncation
        let total_stars: u64 = repos.iter().map(|r| r.stargazers_count).sum();

        let tech_stack = self.detect_tech_stack(username, &repos).await;

        let mut contributions = self.fetch_contributions(username, &repos).await;
        contributions.stars = total_stars;

        let mut repositories: Vec<RepositorySummary> =
            repos.iter().map(RepositorySummary::from).collect();
        // Stable sort keeps pagination order for equal star counts
        repositories.sort_by(|a, b| b.stars.cmp(&a.stars));
        repositories.truncate(self.config.top_repos);

        info!(
            "Aggregated {}: {} repositories, {} stars",
            username,
            repos.len(),
            contributions.stars
        );

        Ok(AggregatedProfile {
            profile,
            repositories,
            tech_stack,
            contributions,
        })
    }

    /// Aggregate two users concurrently for a comparison view.
    /// The two runs share no mutable state; either failure fails the pair.
    pub async fn aggregate_pair(
        &self,
        first: &str,
        second: &str,
    ) -> Result<(AggregatedProfile, AggregatedProfile)> {
        futures::future::try_join(self.aggregate(first), self.aggregate(second)).await
    }

    /// Fetch the complete repository list, paginating until a page comes
    /// back short or empty. Pagination is sequential: each request only
    /// makes sense once the previous page is known to be full. A failed
    /// page fails the whole fetch; no partial list is returned.
    async fn fetch_all_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        let per_page = self.config.page_size;
        let mut all = Vec::new();
        let mut page = 1;

        loop {
            let batch = self.client.list_repositories(username, page, per_page).await?;
            let count = batch.len();
            all.extend(batch);

            if count < per_page {
                break;
            }
            page += 1;
        }

        Ok(all)
    }

    /// Probe manifests in a bounded subset of repositories and classify
    /// the union of all candidate dependency names found.
    async fn detect_tech_stack(
        &self,
        username: &str,
        repos: &[Repository],
    ) -> techstack::TechStack {
        // Probing is expensive, so only the most recently updated
        // repositories are inspected
        let subset: Vec<&Repository> = repos.iter().take(self.config.probe_repos).collect();

        // Each probe yields an independent candidate set; the union is
        // folded explicitly once all probes are done, so probe order
        // never matters
        let candidate_sets: Vec<BTreeSet<String>> = stream::iter(subset)
            .map(|repo| self.probe_repository(username, &repo.name))
            .buffer_unordered(self.config.probe_concurrency)
            .collect()
            .await;

        let candidates: BTreeSet<String> = candidate_sets.into_iter().flatten().collect();
        debug!(
            "Collected {} candidate dependency names for {}",
            candidates.len(),
            username
        );

        techstack::classify(&candidates)
    }

    /// Best-effort manifest probe for one repository. A missing file or
    /// unparseable content is no signal, never an error.
    async fn probe_repository(&self, username: &str, repo: &str) -> BTreeSet<String> {
        let mut names = BTreeSet::new();

        match self.client.get_file_content(username, repo, "package.json").await {
            Ok(file) => match file.decoded() {
                Ok(content) => {
                    if let Some(deps) = manifest::package_json_deps(&content) {
                        names.extend(deps);
                    }
                }
                Err(e) => debug!("Could not decode package.json in {}: {}", repo, e),
            },
            Err(e) => debug!("No package.json signal from {}: {}", repo, e.log_safe()),
        }

        match self.client.get_file_content(username, repo, "requirements.txt").await {
            Ok(file) => match file.decoded() {
                Ok(content) => names.extend(manifest::requirements_deps(&content)),
                Err(e) => debug!("Could not decode requirements.txt in {}: {}", repo, e),
            },
            Err(e) => debug!("No requirements.txt signal from {}: {}", repo, e.log_safe()),
        }

        names
    }

    /// Best-effort commit/PR/issue counts, keyed on the most recently
    /// updated repository. Each count independently falls back to zero.
    /// `stars` is filled in by the caller from the full repository set.
    async fn fetch_contributions(&self, username: &str, repos: &[Repository]) -> Contributions {
        let mut contributions = Contributions::default();

        let Some(newest) = repos.first() else {
            return contributions;
        };

        match self.client.get_participation(username, &newest.name).await {
            Ok(participation) => {
                contributions.commits = participation.all.iter().sum();
            }
            Err(e) => warn!(
                "Could not fetch participation stats for {}/{}: {}",
                username,
                newest.name,
                e.log_safe()
            ),
        }

        match self.client.list_issues(username, &newest.name).await {
            Ok(issues) => contributions.issues = issues.len() as u64,
            Err(e) => warn!(
                "Could not fetch issues for {}/{}: {}",
                username,
                newest.name,
                e.log_safe()
            ),
        }

        match self.client.list_pulls(username, &newest.name).await {
            Ok(pulls) => contributions.prs = pulls.len() as u64,
            Err(e) => warn!(
                "Could not fetch pull requests for {}/{}: {}",
                username,
                newest.name,
                e.log_safe()
            ),
        }

        contributions
    }
}
