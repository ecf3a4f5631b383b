//! HTTP server command
//!
//! Startup is strictly ordered: configuration, then the store, then the
//! listener. Any failure before the listener is bound exits non-zero.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use people_server::{run_server, Database, DbConfig, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind to (overrides HOST, default: 127.0.0.1; use 0.0.0.0 for all interfaces)
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Port to listen on (overrides PORT, default: 3000)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Directory of static files served alongside the API (overrides STATIC_DIR)
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,
}

impl ServeArgs {
    /// Apply command-line overrides on top of environment configuration.
    fn apply(self, mut config: ServerConfig) -> ServerConfig {
        let host = self.host.unwrap_or(config.bind_addr.ip());
        let port = self.port.unwrap_or(config.bind_addr.port());
        config.bind_addr = SocketAddr::new(host, port);
        if self.static_dir.is_some() {
            config.static_dir = self.static_dir;
        }
        config
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DbConfig::from_env()
        .context("Database configuration incomplete (set DB_HOST, DB_NAME, DB_USER, DB_PASSWORD)")?;
    let server_config = args.apply(ServerConfig::from_env().context("Invalid server configuration")?);

    tracing::debug!(?db_config, ?server_config, "configuration loaded");

    let database = Database::initialize(&db_config)
        .await
        .context("Failed to initialize database")?;

    // Blocks until shutdown; the pool is closed before this returns
    run_server(database, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
