//! Leaderboard repository
//!
//! Entries are append-only: inserted on submission, never updated or
//! deleted. The puzzle id is not checked against `puzzles`.

use serde::Serialize;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::db::Scalar;

/// Number of entries returned for a puzzle's leaderboard.
pub const LEADERBOARD_SIZE: i64 = 10;

/// Ranked entry as shown on a leaderboard
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LeaderboardEntry {
    pub player_name: Option<String>,
    pub completion_time: Option<Value>,
}

/// Full leaderboard row, as returned by an insert
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LeaderboardRecord {
    /// Puzzle the time was recorded against
    pub id: Option<Value>,
    pub player_name: Option<String>,
    pub completion_time: Option<Value>,
}

/// Values for a new leaderboard row, keyed by column name
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewLeaderboardEntry {
    pub id: Option<Scalar>,
    pub player_name: Option<Scalar>,
    pub completion_time: Option<Scalar>,
}

/// Leaderboard repository
pub struct LeaderboardRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> LeaderboardRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fastest entries for a puzzle, at most [`LEADERBOARD_SIZE`].
    pub async fn top_for_puzzle(&self, puzzle_id: &str) -> Result<Vec<LeaderboardEntry>, DbError> {
        let entries = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            SELECT player_name::text AS player_name,
                   to_jsonb(completion_time) AS completion_time
            FROM leaderboard
            WHERE id::text = $1
            ORDER BY leaderboard.completion_time ASC
            LIMIT $2
            "#,
        )
        .bind(puzzle_id)
        .bind(LEADERBOARD_SIZE)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Record a completion time.
    ///
    /// Values are passed through unchecked; `None` becomes `NULL` and the
    /// store's column types and constraints decide what is acceptable.
    pub async fn insert(&self, entry: &NewLeaderboardEntry) -> Result<LeaderboardRecord, DbError> {
        let record = sqlx::query_as::<_, LeaderboardRecord>(
            r#"
            INSERT INTO leaderboard (id, player_name, completion_time)
            SELECT id, player_name, completion_time
            FROM jsonb_populate_record(NULL::leaderboard, $1)
            RETURNING to_jsonb(id) AS id,
                      player_name::text AS player_name,
                      to_jsonb(completion_time) AS completion_time
            "#,
        )
        .bind(Json(entry))
        .fetch_one(self.pool)
        .await?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_entry_serializes_with_column_names() {
        let entry = NewLeaderboardEntry {
            id: Some(Scalar::from(42)),
            player_name: Some(Scalar::from("Alice")),
            completion_time: None,
        };

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({ "id": 42, "player_name": "Alice", "completion_time": null })
        );
    }
}
