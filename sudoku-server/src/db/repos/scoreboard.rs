//! Scoreboard repository - room/session state
//!
//! A room is the set of scoreboard rows sharing a room code. Rows are
//! created by room generation and mutated in place afterwards:
//! - start: rewrites `player_name` on every row of the room
//! - progress: rewrites `percentage_completed` on one (room, player) row
//!
//! Updates that match nothing are no-ops and return `None`; they never
//! create rows. Nothing here deletes a room.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::db::Scalar;

/// Per-player scoreboard row
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScoreboardRow {
    pub room_code: Option<String>,
    pub game_code: Option<String>,
    pub player_name: Option<String>,
    pub time_stamp: Option<DateTime<Utc>>,
    pub percentage_completed: Option<Value>,
    /// Read for ordering only; no route writes it.
    pub time_taken: Option<Value>,
}

/// Client-supplied scoreboard values, keyed by column name
///
/// Each write reads only the columns it needs; the rest stay `None`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScoreboardFields {
    pub room_code: Option<Scalar>,
    pub game_code: Option<Scalar>,
    pub player_name: Option<Scalar>,
    pub percentage_completed: Option<Scalar>,
}

/// Scoreboard repository
pub struct ScoreboardRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreboardRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert the first row of a room, stamped with the store's clock.
    ///
    /// Room codes are not checked for uniqueness here; a unique constraint
    /// in the store (if any) surfaces as an error.
    pub async fn create_room(&self, fields: &ScoreboardFields) -> Result<ScoreboardRow, DbError> {
        let row = sqlx::query_as::<_, ScoreboardRow>(
            r#"
            INSERT INTO scoreboard (room_code, game_code, player_name, time_stamp)
            SELECT room_code, game_code, player_name, NOW()
            FROM jsonb_populate_record(NULL::scoreboard, $1)
            RETURNING room_code::text AS room_code,
                      game_code::text AS game_code,
                      player_name::text AS player_name,
                      time_stamp::timestamptz AS time_stamp,
                      to_jsonb(percentage_completed) AS percentage_completed,
                      to_jsonb(time_taken) AS time_taken
            "#,
        )
        .bind(Json(fields))
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Whether any row carries `room_code`.
    pub async fn room_exists(&self, room_code: &str) -> Result<bool, DbError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM scoreboard WHERE room_code::text = $1)",
        )
        .bind(room_code)
        .fetch_one(self.pool)
        .await?;

        Ok(exists)
    }

    /// Game code of the room, `None` when the room does not exist.
    ///
    /// The inner option is the column value itself, which may be `NULL`.
    pub async fn game_code(&self, room_code: &str) -> Result<Option<Option<String>>, DbError> {
        let code = sqlx::query_scalar::<_, Option<String>>(
            "SELECT game_code::text FROM scoreboard WHERE room_code::text = $1 LIMIT 1",
        )
        .bind(room_code)
        .fetch_optional(self.pool)
        .await?;

        Ok(code)
    }

    /// Set the player name on every row of the room, returning the first.
    pub async fn start_game(&self, fields: &ScoreboardFields) -> Result<Option<ScoreboardRow>, DbError> {
        let rows = sqlx::query_as::<_, ScoreboardRow>(
            r#"
            UPDATE scoreboard AS s
            SET player_name = p.player_name
            FROM jsonb_populate_record(NULL::scoreboard, $1) AS p
            WHERE s.room_code = p.room_code
            RETURNING s.room_code::text AS room_code,
                      s.game_code::text AS game_code,
                      s.player_name::text AS player_name,
                      s.time_stamp::timestamptz AS time_stamp,
                      to_jsonb(s.percentage_completed) AS percentage_completed,
                      to_jsonb(s.time_taken) AS time_taken
            "#,
        )
        .bind(Json(fields))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().next())
    }

    /// Set the completion percentage of one player in a room.
    pub async fn update_progress(&self, fields: &ScoreboardFields) -> Result<Option<ScoreboardRow>, DbError> {
        let rows = sqlx::query_as::<_, ScoreboardRow>(
            r#"
            UPDATE scoreboard AS s
            SET percentage_completed = p.percentage_completed
            FROM jsonb_populate_record(NULL::scoreboard, $1) AS p
            WHERE s.room_code = p.room_code AND s.player_name = p.player_name
            RETURNING s.room_code::text AS room_code,
                      s.game_code::text AS game_code,
                      s.player_name::text AS player_name,
                      s.time_stamp::timestamptz AS time_stamp,
                      to_jsonb(s.percentage_completed) AS percentage_completed,
                      to_jsonb(s.time_taken) AS time_taken
            "#,
        )
        .bind(Json(fields))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().next())
    }

    /// All rows of a room ordered by `time_taken`, unset values last.
    pub async fn list_for_room(&self, room_code: &str) -> Result<Vec<ScoreboardRow>, DbError> {
        let rows = sqlx::query_as::<_, ScoreboardRow>(
            r#"
            SELECT room_code::text AS room_code,
                   game_code::text AS game_code,
                   player_name::text AS player_name,
                   time_stamp::timestamptz AS time_stamp,
                   to_jsonb(percentage_completed) AS percentage_completed,
                   to_jsonb(time_taken) AS time_taken
            FROM scoreboard
            WHERE room_code::text = $1
            ORDER BY scoreboard.time_taken ASC
            "#,
        )
        .bind(room_code)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fields_serialize_with_column_names() {
        let fields = ScoreboardFields {
            room_code: Some(Scalar::from(1234)),
            percentage_completed: Some(Scalar::from("40")),
            ..ScoreboardFields::default()
        };

        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({
                "room_code": 1234,
                "game_code": null,
                "player_name": null,
                "percentage_completed": "40"
            })
        );
    }
}
