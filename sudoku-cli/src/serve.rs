//! Server launch: flags/environment to library config

use anyhow::{Context, Result};
use clap::Args;

use sudoku_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use sudoku_server::{create_pool, run_server, DbConfig, ServerConfig};

/// Listener and store settings
///
/// Every flag can also be supplied through the environment variable shown
/// in `--help`; a `.env` file in the working directory is loaded first.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Host or address to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Database host (falls back to PGHOST, then localhost)
    #[arg(long, env = "DB_HOST")]
    pub db_host: Option<String>,

    /// Database port (falls back to PGPORT, then 5432)
    #[arg(long, env = "DB_PORT")]
    pub db_port: Option<u16>,

    /// Database user
    #[arg(long, env = "DB_USER")]
    pub db_user: Option<String>,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Database name
    #[arg(long, env = "DB_NAME")]
    pub db_name: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl ServeArgs {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
        }
    }

    pub fn db_config(&self) -> DbConfig {
        DbConfig {
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            database: self.db_name.clone(),
            max_connections: self.max_connections,
        }
    }
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.db_config();
    tracing::debug!(
        host = ?db_config.host,
        port = ?db_config.port,
        database = ?db_config.database,
        max_connections = db_config.max_connections,
        "connecting to database"
    );

    let pool = create_pool(&db_config)
        .await
        .context("Failed to create database pool")?;

    run_server(pool, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
