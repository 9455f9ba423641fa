//! LLM proxy service: `POST /chat` forwarded to the completion API.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::warn;

use super::{cors, extract_message, health};
use crate::llm::TherapistProxy;

/// Shared state for the proxy routes.
#[derive(Clone)]
pub struct ProxyState {
    pub proxy: Arc<TherapistProxy>,
}

/// POST /chat
///
/// `{"reply"}` on success; `502 {"error"}` when the upstream call fails.
async fn chat(State(state): State<ProxyState>, body: Bytes) -> Response {
    let message = extract_message(&body);
    match state.proxy.reply(&message).await {
        Ok(reply) => Json(serde_json::json!({ "reply": reply })).into_response(),
        Err(e) => {
            warn!(error = %e, "Upstream completion failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Build the proxy routes.
pub fn proxy_routes(state: ProxyState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/health", get(|| health("mindmate-proxy")))
        .layer(cors())
        .with_state(state)
}
