//! Room endpoints - multiplayer session lifecycle
//!
//! A room exists once `/generate-room` has written its first scoreboard
//! row. Start and progress updates rewrite existing rows only; when nothing
//! matches they answer 200 with `null` rather than an error.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{ScoreboardFields, ScoreboardRepo, ScoreboardRow};
use crate::db::Scalar;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Generate room request
///
/// Like every write body here, fields are optional JSON scalars the store
/// coerces to its column types.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRoomRequest {
    pub room_code: Option<Scalar>,
    pub game_code: Option<Scalar>,
    pub user_name: Option<Scalar>,
}

impl From<GenerateRoomRequest> for ScoreboardFields {
    fn from(req: GenerateRoomRequest) -> Self {
        Self {
            room_code: req.room_code,
            game_code: req.game_code,
            player_name: req.user_name,
            ..Self::default()
        }
    }
}

/// Generate room response
#[derive(Debug, Serialize)]
pub struct GenerateRoomResponse {
    pub success: bool,
    pub message: &'static str,
    pub room: ScoreboardRow,
}

/// Room existence response
#[derive(Debug, Serialize)]
pub struct SearchRoomResponse {
    pub exists: bool,
}

/// Game code response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCodeResponse {
    pub game_code: Option<String>,
}

/// Start game request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameRequest {
    pub room_code: Option<Scalar>,
    pub player_name: Option<Scalar>,
}

impl From<StartGameRequest> for ScoreboardFields {
    fn from(req: StartGameRequest) -> Self {
        Self {
            room_code: req.room_code,
            player_name: req.player_name,
            ..Self::default()
        }
    }
}

/// Progress update request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressRequest {
    pub room_code: Option<Scalar>,
    /// Percentage of the puzzle completed
    pub completed: Option<Scalar>,
    pub player_name: Option<Scalar>,
}

impl From<UpdateProgressRequest> for ScoreboardFields {
    fn from(req: UpdateProgressRequest) -> Self {
        Self {
            room_code: req.room_code,
            player_name: req.player_name,
            percentage_completed: req.completed,
            ..Self::default()
        }
    }
}

/// POST /generate-room - open a room with its first scoreboard row
async fn generate_room(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GenerateRoomRequest>, JsonRejection>,
) -> Result<Json<GenerateRoomResponse>, ApiError> {
    let Json(req) = body.map_err(ApiError::room_creation)?;

    let room = ScoreboardRepo::new(&state.pool)
        .create_room(&req.into())
        .await
        .map_err(ApiError::room_creation)?;

    tracing::debug!(room_code = ?room.room_code, "room created");

    Ok(Json(GenerateRoomResponse {
        success: true,
        message: "Room created successfully",
        room,
    }))
}

/// GET /search-room/{roomCode} - does the room exist
async fn search_room(
    State(state): State<Arc<AppState>>,
    Path(room_code): Path<String>,
) -> Result<Json<SearchRoomResponse>, ApiError> {
    let exists = ScoreboardRepo::new(&state.pool)
        .room_exists(&room_code)
        .await
        .map_err(ApiError::internal("Error checking room code"))?;

    Ok(Json(SearchRoomResponse { exists }))
}

/// GET /game-code/{roomCode} - game played in the room
async fn game_code(
    State(state): State<Arc<AppState>>,
    Path(room_code): Path<String>,
) -> Result<Json<GameCodeResponse>, ApiError> {
    let game_code = ScoreboardRepo::new(&state.pool)
        .game_code(&room_code)
        .await
        .map_err(ApiError::internal("Error fetching game code"))?
        .ok_or(ApiError::NotFound {
            message: "Room code not found",
        })?;

    Ok(Json(GameCodeResponse { game_code }))
}

/// PUT /start-game - set the player name on the room's rows
async fn start_game(
    State(state): State<Arc<AppState>>,
    body: Result<Json<StartGameRequest>, JsonRejection>,
) -> Result<Json<Option<ScoreboardRow>>, ApiError> {
    let Json(req) = body.map_err(ApiError::internal("Error starting game"))?;

    let row = ScoreboardRepo::new(&state.pool)
        .start_game(&req.into())
        .await
        .map_err(ApiError::internal("Error starting game"))?;

    Ok(Json(row))
}

/// PUT /update-progress - record a player's completion percentage
async fn update_progress(
    State(state): State<Arc<AppState>>,
    body: Result<Json<UpdateProgressRequest>, JsonRejection>,
) -> Result<Json<Option<ScoreboardRow>>, ApiError> {
    let Json(req) = body.map_err(ApiError::internal("Error updating progress"))?;

    let row = ScoreboardRepo::new(&state.pool)
        .update_progress(&req.into())
        .await
        .map_err(ApiError::internal("Error updating progress"))?;

    Ok(Json(row))
}

/// GET /scoreboard/{roomCode} - every player row in the room
async fn scoreboard(
    State(state): State<Arc<AppState>>,
    Path(room_code): Path<String>,
) -> Result<Json<Vec<ScoreboardRow>>, ApiError> {
    // No route writes time_taken; rows are ordered by it regardless.
    let rows = ScoreboardRepo::new(&state.pool)
        .list_for_room(&room_code)
        .await
        .map_err(ApiError::internal("Error fetching scoreboard"))?;

    Ok(Json(rows))
}

/// Room routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate-room", post(generate_room))
        .route("/search-room/{roomCode}", get(search_room))
        .route("/game-code/{roomCode}", get(game_code))
        .route("/start-game", put(start_game))
        .route("/update-progress", put(update_progress))
        .route("/scoreboard/{roomCode}", get(scoreboard))
}
