//! sudoku-server: HTTP backend for the sudoku game
//!
//! Serves puzzles, per-puzzle leaderboards, and multiplayer rooms. Every
//! route runs one parameterized statement against PostgreSQL and maps the
//! rows straight to JSON.

pub mod db;
pub mod http;

pub use db::{create_pool, DbConfig, DbError};
pub use http::{build_router, run_server, ServerConfig, ServerError};
