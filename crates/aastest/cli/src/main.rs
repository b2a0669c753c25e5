//! aastest CLI - conformance checks for AAS HTTP API servers
//!
//! This CLI lets operators and CI pipelines:
//! - Check a running server against one profile or all of them
//! - List the profiles known to the built-in or a custom profile table

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::api::{self, ApiArgs};
use commands::profiles;
use config::CliConfig;
use error::CliResult;

/// aastest CLI application
#[derive(Parser)]
#[command(name = "aastest")]
#[command(about = "aastest - AAS HTTP API profile conformance checks", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "AASTEST_CONFIG", global = true)]
    config: Option<String>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text", global = true)]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Check a server against API profiles
    Api(ApiArgs),

    /// List known profiles
    Profiles,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            output::print_error(&e.to_string());
            std::process::exit(2);
        }
    }
}

/// Execute the command; `false` when a server failed its checks
async fn run(cli: Cli) -> CliResult<bool> {
    // Load config
    let config = CliConfig::load(cli.config.as_deref())?;
    let registry = config.registry()?;

    // Execute command
    match cli.command {
        Commands::Api(args) => api::execute(args, &config, registry, cli.output).await,
        Commands::Profiles => {
            profiles::execute(&registry, cli.output)?;
            Ok(true)
        }
    }
}
