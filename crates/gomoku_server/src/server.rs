//! HTTP API for the hosted game.

use crate::session::{GameSession, GameSnapshot, MoveRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use gomoku_engine::MoveError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
    /// Machine-readable error kind, absent for malformed requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Error returned by API handlers.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum ApiError {
    /// The game rejected the move.
    #[display("{}", _0)]
    Move(MoveError),
    /// The request body was not a valid move.
    #[display("invalid json")]
    InvalidJson(JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::Move(e) => ErrorBody {
                error: e.to_string(),
                kind: Some(e.kind().to_string()),
            },
            ApiError::InvalidJson(rejection) => {
                debug!(error = %rejection.body_text(), "Malformed move request");
                ErrorBody {
                    error: self.to_string(),
                    kind: None,
                }
            }
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Builds the API router around a shared session.
pub fn router(session: Arc<GameSession>) -> Router {
    Router::new()
        .route("/api/state", get(get_state))
        .route("/api/move", post(make_move))
        .layer(middleware::map_response(no_cache))
        .with_state(session)
}

/// Returns the current game state.
#[instrument(skip(session))]
async fn get_state(State(session): State<Arc<GameSession>>) -> Json<GameSnapshot> {
    Json(session.snapshot().await)
}

/// Plays a move for the side to move.
#[instrument(skip(session, body))]
async fn make_move(
    State(session): State<Arc<GameSession>>,
    body: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<GameSnapshot>, ApiError> {
    let Json(req) = body?;
    debug!(x = req.x, y = req.y, "Processing move");

    let snapshot = session.play(req.into()).await.inspect_err(|e| {
        warn!(x = req.x, y = req.y, error = %e, kind = e.kind(), "Move failed");
    })?;
    Ok(Json(snapshot))
}

/// Marks every response as uncacheable; the state changes on every move.
async fn no_cache(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store, no-cache, must-revalidate, max-age=0"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    response
}
