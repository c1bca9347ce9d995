//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the shared pool, one statement per method
//! - Writes bind one JSONB record expanded by `jsonb_populate_record`, so
//!   values are coerced to whatever type the column really has
//! - Id and numeric columns are read through `to_jsonb`, keeping integers
//!   integral and working for both text and integer ids
//! - Path parameters are compared against `id::text`
//! - "No row" is `Ok(None)`; the HTTP layer decides what that means

pub mod puzzles;
pub mod leaderboard;
pub mod scoreboard;

pub use puzzles::{PuzzleRepo, Puzzle};
pub use leaderboard::{LeaderboardRepo, LeaderboardEntry, LeaderboardRecord, NewLeaderboardEntry, LEADERBOARD_SIZE};
pub use scoreboard::{ScoreboardRepo, ScoreboardRow, ScoreboardFields};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    /// The store's own message text, without driver framing.
    ///
    /// Falls back to the driver's description for failures that never
    /// reached the store (pool timeouts, I/O errors).
    pub fn details(&self) -> String {
        match self {
            Self::Sqlx(sqlx::Error::Database(e)) => e.message().to_owned(),
            Self::Sqlx(e) => e.to_string(),
        }
    }
}
