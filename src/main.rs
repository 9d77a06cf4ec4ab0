//! branchline - branch context and line reconciliation for analysis runs
//!
//! CLI binary resolving the branch/pull-request context of a project and
//! mapping issue lines across diffs.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

#[derive(Parser)]
#[command(name = "branchline")]
#[command(about = "Branch context resolution and line reconciliation for analysis runs")]
#[command(version)]
struct Cli {
    /// Analysis properties file
    #[arg(long, global = true)]
    properties: Option<PathBuf>,

    /// Override an analysis property (repeatable)
    #[arg(short = 'D', value_name = "KEY=VALUE", global = true)]
    define: Vec<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InventoryArgs {
    /// Project key (defaults to the sonar.projectKey property)
    #[arg(long)]
    project: Option<String>,

    /// Read the branch inventory from a JSON file instead of the server
    #[arg(long, conflicts_with = "host")]
    inventory: Option<PathBuf>,

    /// Server URL
    #[arg(long)]
    host: Option<String>,

    /// Authentication token
    #[arg(long)]
    token: Option<String>,
}

impl From<InventoryArgs> for cli::InventoryOptions {
    fn from(args: InventoryArgs) -> Self {
        Self {
            project: args.project,
            inventory: args.inventory,
            host: args.host,
            token: args.token,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the branch configuration of the analysis
    Resolve {
        #[command(flatten)]
        inventory: InventoryArgs,

        /// Print the configuration as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the branch settings for conflicts
    Validate,

    /// Map a line of the edited revision back to the base revision
    BaseLine {
        /// Line in the edited revision (1-based)
        #[arg(long)]
        line: usize,

        /// Unified diffs from base to edited revision, oldest first
        #[arg(required = true)]
        diffs: Vec<PathBuf>,
    },

    /// Print the component key of the project (or a file) on the analyzed branch
    Key {
        #[command(flatten)]
        inventory: InventoryArgs,

        /// Path of a file or directory inside the project
        #[arg(long)]
        file: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = cli::load_settings(cli.properties.as_deref(), &cli.define)?;

    match cli.command {
        Commands::Resolve { inventory, json } => {
            cli::run_resolve(&settings, &inventory.into(), json).await?;
        }
        Commands::Validate => {
            if cli::run_validate(&settings) > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::BaseLine { line, diffs } => {
            cli::run_base_line(&diffs, line).await?;
        }
        Commands::Key { inventory, file } => {
            cli::run_key(&settings, &inventory.into(), file.as_deref()).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
