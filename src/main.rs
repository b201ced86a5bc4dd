use clap::Parser;
use reposcope::{
    cli::{commands, Cli, Commands},
    config::Settings,
    Result,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    // Silently ignore if file doesn't exist
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,reposcope=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::from_env()?;
    settings.validate()?;

    // Handle commands
    match cli.command {
        Commands::Profile {
            username,
            top,
            json,
        } => {
            commands::profile(&settings, &username, top, json).await?;
        }
        Commands::Compare {
            first,
            second,
            json,
        } => {
            commands::compare(&settings, &first, &second, json).await?;
        }
        Commands::Status => {
            commands::status().await?;
        }
    }

    Ok(())
}
