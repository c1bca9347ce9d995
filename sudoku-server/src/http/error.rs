//! API error types with IntoResponse
//!
//! Only two outcomes exist: a 404 whose body shape depends on the route,
//! and a 500 for anything else. A body the JSON extractor cannot read is a
//! failure like any store error and gets the route's own 500 body. Failures
//! are logged here, once, with the context the handler supplied.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;

/// Message used for every 500 body.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Sentinel id reported by the puzzle-by-id route when it has no puzzle.
pub const MISSING_GAME_ID: &str = "0000";

/// Why a request ended in a 500
#[derive(Debug, thiserror::Error)]
pub enum InternalError {
    #[error(transparent)]
    Store(#[from] DbError),

    #[error("unreadable request body: {0}")]
    Body(#[from] JsonRejection),
}

impl InternalError {
    /// Text reported to clients that receive failure details.
    pub fn details(&self) -> String {
        match self {
            Self::Store(e) => e.details(),
            Self::Body(rejection) => rejection.body_text(),
        }
    }
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// 404 `{"error": message}`
    NotFound { message: &'static str },

    /// 404 `{"id": "0000", "message": "Game not found"}`
    GameNotFound,

    /// 500 `{"id": "0000", "message": "Internal Server Error"}`, logged
    GameLookup(DbError),

    /// 500 `{"error": "Internal Server Error"}`, logged
    Internal { context: &'static str, source: InternalError },

    /// 500 `{"success": false, "error": ..., "details": <failure text>}`, logged
    RoomCreation(InternalError),
}

impl ApiError {
    /// Wrap a failure with the log context of the failing route.
    ///
    /// ```ignore
    /// repo.room_exists(&code).await.map_err(ApiError::internal("Error checking room code"))?;
    /// ```
    pub fn internal<E>(context: &'static str) -> impl FnOnce(E) -> Self
    where
        E: Into<InternalError>,
    {
        move |source| Self::Internal {
            context,
            source: source.into(),
        }
    }

    pub fn room_creation(source: impl Into<InternalError>) -> Self {
        Self::RoomCreation(source.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::NotFound { message } => (StatusCode::NOT_FOUND, json!({ "error": message })),
            Self::GameNotFound => (
                StatusCode::NOT_FOUND,
                json!({
                    "id": MISSING_GAME_ID,
                    "message": "Game not found"
                }),
            ),
            Self::GameLookup(e) => {
                tracing::error!(error = %e, "Error fetching puzzle by ID");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "id": MISSING_GAME_ID,
                        "message": INTERNAL_SERVER_ERROR
                    }),
                )
            }
            Self::Internal { context, source } => {
                tracing::error!(error = %source, "{}", context);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": INTERNAL_SERVER_ERROR }),
                )
            }
            Self::RoomCreation(e) => {
                let details = e.details();
                tracing::error!(error = %details, "Error creating room");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "success": false,
                        "error": INTERNAL_SERVER_ERROR,
                        "details": details
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_404_with_error_key() {
        let response = ApiError::NotFound { message: "Puzzle not found" }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "error": "Puzzle not found" }));
    }

    #[tokio::test]
    async fn game_not_found_uses_sentinel_id() {
        let response = ApiError::GameNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "id": "0000", "message": "Game not found" })
        );
    }

    #[tokio::test]
    async fn game_lookup_failure_keeps_game_shape() {
        let response = ApiError::GameLookup(sqlx::Error::PoolTimedOut.into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "id": "0000", "message": "Internal Server Error" })
        );
    }

    #[tokio::test]
    async fn database_error_hides_cause() {
        let err = ApiError::internal("Error fetching leaderboard")(DbError::from(sqlx::Error::RowNotFound));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Internal Server Error" })
        );
    }

    #[tokio::test]
    async fn room_creation_reports_details() {
        let response = ApiError::room_creation(DbError::from(sqlx::Error::PoolTimedOut)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Internal Server Error"));
        assert_eq!(body["details"], json!(sqlx::Error::PoolTimedOut.to_string()));
    }
}
