//! Chat Routes
//!
//! One round per request: validate the message, call the completion
//! service with the shared instruction string, format the answer as HTML.

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use touchline::{format, validate, ChatError, Tool};

use crate::AppState;

const CHAT_PAGE: &str = include_str!("../../templates/index.html");

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/chat", post(chat))
}

/// Serve the single-page chat UI.
async fn index() -> Html<&'static str> {
    Html(CHAT_PAGE)
}

#[derive(Serialize)]
struct ChatReply {
    response: String,
}

#[derive(Serialize)]
struct ErrorReply {
    error: String,
}

fn error_reply(err: ChatError) -> (StatusCode, Json<ErrorReply>) {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    let error = match &err {
        ChatError::Upstream(detail) => format!("An error occurred: {detail}"),
        _ => err.to_string(),
    };
    (status, Json(ErrorReply { error }))
}

/// Handle one chat turn.
///
/// The body arrives as `Option<Json<Value>>` so an absent or undecodable
/// body flows into validation as `None` instead of producing a framework
/// rejection with a different error shape.
async fn chat(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<ChatReply>, (StatusCode, Json<ErrorReply>)> {
    let value = body.map(|Json(value)| value);
    let message = validate::validate_message(value.as_ref()).map_err(error_reply)?;

    tracing::info!("💬 Chat request ({} chars)", message.len());

    let raw = state
        .provider
        .complete(&message, &state.instructions, &[Tool::WebSearch])
        .await
        .map_err(|err| {
            tracing::error!("Completion call failed: {err}");
            error_reply(err)
        })?;

    Ok(Json(ChatReply {
        response: format::format_response(&raw),
    }))
}
