pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "reposcope")]
#[command(about = "Reposcope - GitHub profile aggregation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Aggregate a single user's profile
    Profile {
        /// GitHub username
        username: String,

        /// Number of top repositories to show
        #[arg(long, env = "REPOSCOPE_TOP_REPOS")]
        top: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Aggregate and compare two users
    Compare {
        /// First GitHub username
        first: String,

        /// Second GitHub username
        second: String,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show current GitHub rate-limit status
    Status,
}
