//! Integration tests for both HTTP services.
//!
//! Each test spins up an Axum server on a random port and talks to it over
//! real HTTP with reqwest. The proxy tests point the OpenAI client at a fake
//! upstream server so the full request/response path is exercised.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use secrecy::SecretString;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::time::timeout;

use mindmate::api::{ChatState, ProxyState, chat_routes, proxy_routes};
use mindmate::llm::{OpenAiProvider, TherapistProxy};
use mindmate::responder::Responder;
use mindmate::responder::templates::{OPENING, REFLECTIVE};
use mindmate::safety::HOTLINES;

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Serve `app` on a random local port and return the port.
async fn spawn(app: Router) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    port
}

async fn start_chat_server() -> u16 {
    spawn(chat_routes(ChatState {
        responder: Arc::new(Responder::default()),
    }))
    .await
}

async fn post_json(port: u16, body: Value) -> (StatusCode, Value) {
    let resp = reqwest::Client::new()
        .post(format!("http://127.0.0.1:{port}/chat"))
        .json(&body)
        .send()
        .await
        .expect("request failed");
    let status = StatusCode::from_u16(resp.status().as_u16()).unwrap();
    (status, resp.json().await.expect("invalid JSON from server"))
}

// ── Rule-based service ───────────────────────────────────────────────

#[tokio::test]
async fn crisis_message_lists_all_hotlines() {
    timeout(TEST_TIMEOUT, async {
        let port = start_chat_server().await;
        let (status, json) = post_json(port, json!({"message": "I want to die"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["crisis"], true);
        let reply = json["reply"].as_str().unwrap();
        for entry in HOTLINES {
            assert!(reply.contains(entry.region), "missing {}", entry.region);
        }
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn greetings_get_opening_lines() {
    timeout(TEST_TIMEOUT, async {
        let port = start_chat_server().await;
        for greeting in ["hi", "hello", "hey", "hii", "HELLO"] {
            let (_, json) = post_json(port, json!({ "message": greeting })).await;
            assert_eq!(json["crisis"], false);
            let reply = json["reply"].as_str().unwrap();
            assert!(OPENING.contains(&reply), "{greeting}: {reply}");
        }
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn sad_and_anxious_resolves_to_low_mood() {
    timeout(TEST_TIMEOUT, async {
        let port = start_chat_server().await;
        let (_, json) = post_json(port, json!({"message": "I feel sad and anxious"})).await;
        assert_eq!(json["crisis"], false);
        assert!(
            json["reply"]
                .as_str()
                .unwrap()
                .starts_with("I'm sorry you're feeling sad or low.")
        );
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn empty_and_missing_messages_fall_back() {
    timeout(TEST_TIMEOUT, async {
        let port = start_chat_server().await;
        for body in [json!({"message": ""}), json!({}), json!({"message": null})] {
            let (status, json) = post_json(port, body).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(json, json!({"reply": REFLECTIVE, "crisis": false}));
        }
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn numeric_message_is_coerced() {
    timeout(TEST_TIMEOUT, async {
        let port = start_chat_server().await;
        let (status, json) = post_json(port, json!({"message": 12345})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["reply"], REFLECTIVE);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn cors_preflight_is_allowed() {
    timeout(TEST_TIMEOUT, async {
        let port = start_chat_server().await;
        let resp = reqwest::Client::new()
            .request(
                reqwest::Method::OPTIONS,
                format!("http://127.0.0.1:{port}/chat"),
            )
            .header("Origin", "http://example.com")
            .header("Access-Control-Request-Method", "POST")
            .send()
            .await
            .unwrap();
        assert!(resp.status().is_success());
        assert!(resp.headers().contains_key("access-control-allow-origin"));
    })
    .await
    .expect("test timed out");
}

// ── LLM proxy service ────────────────────────────────────────────────

#[derive(Clone, Default)]
struct Upstream {
    last_body: Arc<Mutex<Option<Value>>>,
    last_auth: Arc<Mutex<Option<String>>>,
    response: Arc<Mutex<(u16, Value)>>,
}

async fn fake_completions(
    State(upstream): State<Upstream>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    *upstream.last_body.lock().unwrap() = Some(body);
    *upstream.last_auth.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let (status, json) = upstream.response.lock().unwrap().clone();
    (StatusCode::from_u16(status).unwrap(), Json(json))
}

/// Start a fake upstream plus a proxy pointed at it; returns (proxy port, upstream).
async fn start_proxy(status: u16, response: Value) -> (u16, Upstream) {
    let upstream = Upstream::default();
    *upstream.response.lock().unwrap() = (status, response);

    let upstream_port = spawn(
        Router::new()
            .route("/v1/chat/completions", post(fake_completions))
            .with_state(upstream.clone()),
    )
    .await;

    let provider = OpenAiProvider::new(
        SecretString::from("sk-test"),
        &format!("http://127.0.0.1:{upstream_port}/v1"),
        "gpt-5-mini",
    )
    .unwrap();
    let proxy = TherapistProxy::new(Arc::new(provider));
    let port = spawn(proxy_routes(ProxyState {
        proxy: Arc::new(proxy),
    }))
    .await;

    (port, upstream)
}

#[tokio::test]
async fn proxy_returns_first_choice() {
    timeout(TEST_TIMEOUT, async {
        let (port, upstream) = start_proxy(
            200,
            json!({"choices": [
                {"message": {"role": "assistant", "content": "That sounds hard."}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ]}),
        )
        .await;

        let (status, json) = post_json(port, json!({"message": "I had a rough day"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"reply": "That sounds hard."}));

        let sent = upstream.last_body.lock().unwrap().clone().unwrap();
        assert_eq!(sent["model"], "gpt-5-mini");
        assert_eq!(sent["messages"][0]["role"], "system");
        assert_eq!(
            sent["messages"][0]["content"],
            "You are a compassionate AI therapist..."
        );
        assert_eq!(sent["messages"][1]["role"], "user");
        assert_eq!(sent["messages"][1]["content"], "I had a rough day");

        let auth = upstream.last_auth.lock().unwrap().clone();
        assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn proxy_maps_missing_choices_to_bad_gateway() {
    timeout(TEST_TIMEOUT, async {
        let (port, _upstream) = start_proxy(200, json!({"choices": []})).await;
        let (status, json) = post_json(port, json!({"message": "hello"})).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(json["error"].as_str().unwrap().contains("Invalid response"));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn proxy_maps_auth_errors_to_bad_gateway() {
    timeout(TEST_TIMEOUT, async {
        let (port, _upstream) =
            start_proxy(401, json!({"error": {"message": "Incorrect API key"}})).await;
        let (status, json) = post_json(port, json!({"message": "hello"})).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(json["error"].as_str().unwrap().contains("Authentication failed"));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn proxy_maps_forbidden_to_auth_failure() {
    timeout(TEST_TIMEOUT, async {
        let (port, _upstream) =
            start_proxy(403, json!({"error": {"message": "Project not allowed"}})).await;
        let (status, json) = post_json(port, json!({"message": "hello"})).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"], "Authentication failed for provider openai");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn proxy_reports_upstream_status_on_server_error() {
    timeout(TEST_TIMEOUT, async {
        let (port, _upstream) =
            start_proxy(500, json!({"error": {"message": "overloaded"}})).await;
        let (status, json) = post_json(port, json!({"message": "hello"})).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let error = json["error"].as_str().unwrap();
        assert!(error.starts_with("Provider openai request failed"), "{error}");
        assert!(error.contains("HTTP 500"), "{error}");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn proxy_rejects_null_completion_content() {
    timeout(TEST_TIMEOUT, async {
        let (port, _upstream) = start_proxy(
            200,
            json!({"choices": [{"message": {"role": "assistant", "content": null}}]}),
        )
        .await;
        let (status, json) = post_json(port, json!({"message": "hello"})).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(
            json["error"],
            "Invalid response from openai: response has no completion text"
        );
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn proxy_rejects_malformed_completion_body() {
    timeout(TEST_TIMEOUT, async {
        // A bare JSON string cannot be read as a completion object.
        let (port, _upstream) = start_proxy(200, json!("not a completion")).await;
        let (status, json) = post_json(port, json!({"message": "hello"})).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let error = json["error"].as_str().unwrap();
        assert!(error.starts_with("JSON error:"), "{error}");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn proxy_reports_unreachable_upstream() {
    timeout(TEST_TIMEOUT, async {
        // Bind then drop a listener to get a port nothing is listening on.
        let dead_port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };
        let provider = OpenAiProvider::new(
            SecretString::from("sk-test"),
            &format!("http://127.0.0.1:{dead_port}/v1"),
            "gpt-5-mini",
        )
        .unwrap();
        let port = spawn(proxy_routes(ProxyState {
            proxy: Arc::new(TherapistProxy::new(Arc::new(provider))),
        }))
        .await;

        let (status, json) = post_json(port, json!({"message": "hello"})).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(json["error"].as_str().unwrap().contains("request failed"));
    })
    .await
    .expect("test timed out");
}
