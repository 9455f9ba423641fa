//! HTTP surfaces for both services.
//!
//! [`chat`] serves the rule-based responder and its web page; [`proxy`]
//! serves the LLM pass-through. They are built into separate binaries and
//! never mounted on the same router.

pub mod chat;
pub mod proxy;

pub use chat::{ChatState, chat_routes};
pub use proxy::{ProxyState, proxy_routes};

use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::Value;
use tower_http::cors::CorsLayer;

use crate::config::ServerConfig;
use crate::error::Result;

/// Bind the configured address and serve `app` until the process exits.
pub async fn serve(app: Router, config: &ServerConfig, service: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, service, "Server started");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Permissive CORS, so the page can be hosted elsewhere during development.
pub(crate) fn cors() -> CorsLayer {
    CorsLayer::permissive()
}

pub(crate) async fn health(service: &'static str) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": service
    }))
}

/// Pull the `message` field out of a raw request body.
///
/// Never fails: a missing, `null`, or unparseable body yields an empty
/// string, and non-string values are rendered as their JSON text.
pub fn extract_message(body: &[u8]) -> String {
    let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) else {
        return String::new();
    };
    match map.get("message") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
