//! oweb - command-line client for Open WebUI
//!
//! Main entry point for the oweb CLI.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod output;

use commands::{ask, knowledge, load_dir, models, upload};
use config::{Config, Overrides};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// oweb - Open WebUI CLI Tool
#[derive(Parser)]
#[command(name = "oweb")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Requires OPEN_WEBUI_API_KEY in the environment or in a .env file.")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Service root [env: BASE_URL] (default: http://localhost:3000/api)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds [env: OWEB_TIMEOUT]
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a knowledge document
    Upload(upload::UploadArgs),

    /// Load all MD files from a directory and subdirectories
    LoadDir(load_dir::LoadDirArgs),

    /// List all loaded knowledge documents
    ListKnowledge,

    /// List all available LLM models
    ListModels,

    /// Ask a one-shot question
    Ask(ask::AskArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be applied before any variable is read
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let filter = if cli.verbose {
        "oweb=debug,oweb_client=debug,info"
    } else {
        "oweb=info,oweb_client=info,warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env file"),
    }

    // Fails here, before any request, when the API key is missing
    let config = Config::from_env(Overrides {
        base_url: cli.base_url,
        timeout_secs: cli.timeout,
    })?;
    tracing::debug!(?config, "resolved configuration");

    let ctx = commands::Context {
        config,
        json_output: cli.json,
        verbose: cli.verbose,
    };

    // Dispatch to command handlers
    let result = match cli.command {
        Commands::Upload(args) => upload::run(args, &ctx).await,
        Commands::LoadDir(args) => load_dir::run(args, &ctx).await,
        Commands::ListKnowledge => knowledge::run(&ctx).await,
        Commands::ListModels => models::run(&ctx).await,
        Commands::Ask(args) => ask::run(args, &ctx).await,
    };
    result.map_err(|e| commands::explain_unreachable(e, &ctx.config.base_url))
}
