use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(name = "people", version, about = "People directory HTTP service")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Load environment variables from this file instead of ./.env
    #[arg(long, global = true, value_name = "PATH")]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (list, create, and delete people)
    Serve(commands::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_file = config::load_dotenv(cli.env_file.as_deref())?;
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match &env_file {
        Some(path) => tracing::info!("Loaded configuration from {}", path.display()),
        None => tracing::debug!("No .env file found, using environment variables only"),
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }

    Ok(())
}
