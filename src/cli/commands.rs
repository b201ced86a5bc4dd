use crate::aggregator::models::AggregatedProfile;
use crate::aggregator::ProfileAggregator;
use crate::config::Settings;
use crate::github::{GitHubClient, GitHubConfig};
use crate::Result;
use chrono::{DateTime, Utc};
use tracing::warn;

/// Aggregate and print a single user's profile
pub async fn profile(
    settings: &Settings,
    username: &str,
    top: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut config = settings.aggregator.clone();
    if let Some(top) = top {
        config.top_repos = top;
    }

    let aggregator = ProfileAggregator::new(build_client()?, config);
    let report = aggregator.aggregate(username).await?;

    if json {
        print_json(&report);
    } else {
        print_report(&report);
    }

    Ok(())
}

/// Aggregate two users concurrently and print a comparison
pub async fn compare(settings: &Settings, first: &str, second: &str, json: bool) -> Result<()> {
    let aggregator = ProfileAggregator::new(build_client()?, settings.aggregator.clone());
    let (left, right) = aggregator.aggregate_pair(first, second).await?;

    if json {
        match serde_json::to_string_pretty(&(&left, &right)) {
            Ok(s) => println!("{s}"),
            Err(e) => warn!("Failed to serialize comparison: {e}"),
        }
        return Ok(());
    }

    println!("Comparing {} and {}\n", left.profile.login, right.profile.login);
    print_comparison_row("Public repos", left.profile.public_repos, right.profile.public_repos);
    print_comparison_row("Followers", left.profile.followers, right.profile.followers);
    print_comparison_row("Total stars", left.contributions.stars, right.contributions.stars);
    print_comparison_row("Commits", left.contributions.commits, right.contributions.commits);
    print_comparison_row("Pull requests", left.contributions.prs, right.contributions.prs);
    print_comparison_row("Issues", left.contributions.issues, right.contributions.issues);

    println!();
    for report in [&left, &right] {
        println!("{}:", report.profile.login);
        print_tech_stack(report);
        println!();
    }

    Ok(())
}

/// Show the current GitHub rate-limit status
pub async fn status() -> Result<()> {
    let client = build_client()?;
    let rate_limit = client.get_rate_limit().await?;

    let reset = DateTime::<Utc>::from_timestamp(rate_limit.reset, 0).unwrap_or_else(Utc::now);

    println!("GitHub API rate limit");
    println!("  Authenticated: {}", client.is_authenticated());
    println!("  Remaining: {}/{}", rate_limit.remaining, rate_limit.limit);
    println!("  Resets at: {}", reset.format("%Y-%m-%d %H:%M:%S UTC"));

    Ok(())
}

fn build_client() -> Result<GitHubClient> {
    let config = GitHubConfig::from_env();
    if config.token.is_none() {
        warn!("GITHUB_TOKEN not set; using the lower unauthenticated rate limit");
    }
    GitHubClient::new(config)
}

fn print_json(report: &AggregatedProfile) {
    match serde_json::to_string_pretty(report) {
        Ok(s) => println!("{s}"),
        Err(e) => warn!("Failed to serialize report: {e}"),
    }
}

fn print_report(report: &AggregatedProfile) {
    let profile = &report.profile;

    match &profile.name {
        Some(name) => println!("{} ({})", profile.login, name),
        None => println!("{}", profile.login),
    }
    if let Some(bio) = &profile.bio {
        println!("  {bio}");
    }
    println!("  Joined: {}", profile.created_at.format("%Y-%m-%d"));
    println!(
        "  Public repos: {} | Followers: {} | Following: {}",
        profile.public_repos, profile.followers, profile.following
    );

    if !report.repositories.is_empty() {
        println!("\nTop repositories:");
        for repo in &report.repositories {
            let language = repo.language.as_deref().unwrap_or("Unknown");
            println!(
                "  ★ {:<6} {} ({}) - {} forks",
                repo.stars, repo.name, language, repo.forks
            );
            if let Some(description) = &repo.description {
                println!("           {description}");
            }
        }
    }

    println!();
    print_tech_stack(report);

    let contributions = &report.contributions;
    println!("\nContributions:");
    println!(
        "  Commits: {} | PRs: {} | Issues: {} | Stars: {}",
        contributions.commits, contributions.prs, contributions.issues, contributions.stars
    );
}

fn print_tech_stack(report: &AggregatedProfile) {
    let stack = &report.tech_stack;

    if stack.is_empty() {
        println!("Tech stack: no signal found");
        return;
    }

    println!("Tech stack:");
    if !stack.frameworks.is_empty() {
        println!("  Frameworks: {}", join(&stack.frameworks));
    }
    if !stack.databases.is_empty() {
        println!("  Databases: {}", join(&stack.databases));
    }
    if !stack.tools.is_empty() {
        println!("  Tools: {}", join(&stack.tools));
    }
}

fn join(labels: &std::collections::BTreeSet<String>) -> String {
    labels.iter().cloned().collect::<Vec<_>>().join(", ")
}

fn print_comparison_row(label: &str, left: impl std::fmt::Display, right: impl std::fmt::Display) {
    println!("  {label:<14} {left:>10} | {right:<10}");
}
