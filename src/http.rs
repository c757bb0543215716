//! HTTP hosting surface — the webhook the channel posts activities to.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::activity::Activity;
use crate::dispatcher::{TurnDispatcher, TurnOutcome};

/// Shared state for the bot routes.
#[derive(Clone)]
pub struct BotRouteState {
    pub dispatcher: Arc<TurnDispatcher>,
}

/// POST /api/messages
///
/// One inbound activity per request. Handled turns (including ignored
/// non-message activities) return 202; a failed turn — unreadable card asset
/// or reply delivery failure — returns 500 and no reply is sent.
async fn messages(
    State(state): State<BotRouteState>,
    Json(activity): Json<Activity>,
) -> impl IntoResponse {
    match state.dispatcher.handle_turn(&activity).await {
        Ok(TurnOutcome::Ignored) => StatusCode::ACCEPTED.into_response(),
        Ok(TurnOutcome::Replied { attachments }) => {
            tracing::debug!(attachments, "reply sent");
            StatusCode::ACCEPTED.into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "turn failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": err.to_string()})),
            )
                .into_response()
        }
    }
}

/// GET /healthz — liveness probe.
async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Build the bot routes.
pub fn bot_routes(dispatcher: Arc<TurnDispatcher>) -> Router {
    Router::new()
        .route("/api/messages", post(messages))
        .route("/healthz", get(healthz))
        .with_state(BotRouteState { dispatcher })
}
