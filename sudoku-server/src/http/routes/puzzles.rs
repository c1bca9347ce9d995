//! Puzzle endpoints
//!
//! The two lookups deliberately report failures in different shapes:
//! difficulty lookups use `{"error": ...}`, id lookups use the
//! `{"id": "0000", "message": ...}` game shape clients already parse.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::db::repos::{Puzzle, PuzzleRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /puzzle/{difficulty} - random puzzle of the given difficulty
async fn random_puzzle(
    State(state): State<Arc<AppState>>,
    Path(difficulty): Path<String>,
) -> Result<Json<Puzzle>, ApiError> {
    let puzzle = PuzzleRepo::new(&state.pool)
        .random_by_difficulty(&difficulty)
        .await
        .map_err(ApiError::internal("Error fetching puzzle by difficulty"))?
        .ok_or(ApiError::NotFound {
            message: "Puzzle not found",
        })?;

    Ok(Json(puzzle))
}

/// GET /puzzle/id/{id} - a single puzzle
async fn get_puzzle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Puzzle>, ApiError> {
    let puzzle = PuzzleRepo::new(&state.pool)
        .get(&id)
        .await
        .map_err(ApiError::GameLookup)?
        .ok_or(ApiError::GameNotFound)?;

    Ok(Json(puzzle))
}

/// Puzzle routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/puzzle/{difficulty}", get(random_puzzle))
        .route("/puzzle/id/{id}", get(get_puzzle))
}
