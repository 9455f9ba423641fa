//! Rule-based chat service: `POST /chat`, the web page at `/`, and `/health`.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::info;

use super::{cors, extract_message, health};
use crate::responder::Responder;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Shared state for the chat routes.
#[derive(Clone)]
pub struct ChatState {
    pub responder: Arc<Responder>,
}

/// POST /chat
///
/// Always answers 200 with `{"reply", "crisis"}`, whatever the body holds.
async fn chat(State(state): State<ChatState>, body: Bytes) -> impl IntoResponse {
    let message = extract_message(&body);
    let result = state.responder.respond(&message);
    if result.crisis {
        info!("Crisis resources returned");
    }
    Json(result)
}

/// GET /
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Build the rule-based chat routes.
pub fn chat_routes(state: ChatState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/chat", post(chat))
        .route("/health", get(|| health("mindmate")))
        .layer(cors())
        .with_state(state)
}
