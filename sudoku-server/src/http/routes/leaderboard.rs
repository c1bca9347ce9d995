//! Leaderboard endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::db::repos::{LeaderboardEntry, LeaderboardRecord, LeaderboardRepo, NewLeaderboardEntry};
use crate::db::Scalar;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Submit score request
///
/// Fields are optional JSON scalars: absent values become `NULL` and the
/// store coerces the rest to its column types.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreRequest {
    pub puzzle_id: Option<Scalar>,
    pub player_name: Option<Scalar>,
    pub completion_time: Option<Scalar>,
}

impl From<SubmitScoreRequest> for NewLeaderboardEntry {
    fn from(req: SubmitScoreRequest) -> Self {
        Self {
            id: req.puzzle_id,
            player_name: req.player_name,
            completion_time: req.completion_time,
        }
    }
}

/// GET /leaderboard/{id} - fastest completions for a puzzle
async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Path(puzzle_id): Path<String>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    let entries = LeaderboardRepo::new(&state.pool)
        .top_for_puzzle(&puzzle_id)
        .await
        .map_err(ApiError::internal("Error fetching leaderboard"))?;

    Ok(Json(entries))
}

/// POST /leaderboard - record a completion time
async fn submit_score(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> Result<Json<LeaderboardRecord>, ApiError> {
    let Json(req) = body.map_err(ApiError::internal("Error adding leaderboard entry"))?;

    let record = LeaderboardRepo::new(&state.pool)
        .insert(&req.into())
        .await
        .map_err(ApiError::internal("Error adding leaderboard entry"))?;

    Ok(Json(record))
}

/// Leaderboard routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/leaderboard", post(submit_score))
        .route("/leaderboard/{id}", get(get_leaderboard))
}
