//! sudokud - HTTP backend for the sudoku game
//!
//! Loads `.env`, initialises tracing, and serves puzzles, leaderboards,
//! and multiplayer rooms until Ctrl+C or SIGTERM.

use anyhow::Result;
use clap::Parser;

mod serve;
mod tracing_setup;

use serve::ServeArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "sudokud",
    author,
    version,
    about = "HTTP backend for the sudoku game: puzzles, leaderboards, and multiplayer rooms"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(flatten)]
    serve: ServeArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Existing environment variables win over .env entries
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match dotenv {
        Ok(path) => tracing::debug!("Loaded .env from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No .env file found, using environment only"),
        Err(e) => tracing::warn!("Failed to load .env: {}", e),
    }

    serve::run_serve(cli.serve).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_map_to_configs() {
        let cli = Cli::try_parse_from([
            "sudokud",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--db-host",
            "db.internal",
            "--db-port",
            "5433",
            "--db-user",
            "sudoku",
            "--db-name",
            "puzzles",
            "--max-connections",
            "4",
            "--debug",
        ])
        .unwrap();

        assert!(cli.debug);

        let server = cli.serve.server_config();
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 8080);

        let db = cli.serve.db_config();
        assert_eq!(db.host.as_deref(), Some("db.internal"));
        assert_eq!(db.port, Some(5433));
        assert_eq!(db.user.as_deref(), Some("sudoku"));
        assert_eq!(db.database.as_deref(), Some("puzzles"));
        assert_eq!(db.max_connections, 4);
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = Cli::try_parse_from(["sudokud", "--port", "three-thousand"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
