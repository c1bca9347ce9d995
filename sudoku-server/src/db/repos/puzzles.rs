//! Puzzle repository
//!
//! Puzzles are read-only here; rows are loaded out of band.

use serde::Serialize;
use serde_json::Value;
use sqlx::{FromRow, PgPool};

use super::DbError;

/// Puzzle record from database
///
/// `id` and `puzzle` keep the column's JSON form: a `SERIAL` id stays a
/// number, a text id stays a string.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Puzzle {
    pub id: Value,
    pub difficulty: Option<String>,
    pub puzzle: Option<Value>,
}

/// Puzzle repository
pub struct PuzzleRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PuzzleRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Pick one puzzle uniformly at random among those with `difficulty`.
    ///
    /// The label is matched exactly and is not checked against a known set.
    pub async fn random_by_difficulty(&self, difficulty: &str) -> Result<Option<Puzzle>, DbError> {
        let puzzle = sqlx::query_as::<_, Puzzle>(
            r#"
            SELECT to_jsonb(id) AS id, difficulty::text AS difficulty, to_jsonb(puzzle) AS puzzle
            FROM puzzles
            WHERE difficulty::text = $1
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .bind(difficulty)
        .fetch_optional(self.pool)
        .await?;

        Ok(puzzle)
    }

    /// Get a single puzzle by id, compared in its text form.
    pub async fn get(&self, id: &str) -> Result<Option<Puzzle>, DbError> {
        let puzzle = sqlx::query_as::<_, Puzzle>(
            r#"
            SELECT to_jsonb(id) AS id, difficulty::text AS difficulty, to_jsonb(puzzle) AS puzzle
            FROM puzzles
            WHERE id::text = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(puzzle)
    }
}
