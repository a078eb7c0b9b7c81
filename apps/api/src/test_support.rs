//! Helpers shared by the in-module tests: stub upstreams and shape checks.

use axum::{body::to_bytes, response::Response, routing::post, Json, Router};
use serde_json::{json, Value};

/// Nothing listens on port 1, so connections are refused immediately.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1/api/generate";

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub upstream");
    let addr = listener.local_addr().expect("stub upstream address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    format!("http://{addr}")
}

/// Stub generation endpoint whose reply `response` field is always `text`.
/// Returns the full endpoint URL.
pub async fn ollama_replying(text: impl Into<String>) -> String {
    let reply = json!({ "model": "llama3.2", "response": text.into(), "done": true });
    let router = Router::new().route(
        "/api/generate",
        post(move || {
            let reply = reply.clone();
            async move { Json(reply) }
        }),
    );
    format!("{}/api/generate", spawn_upstream(router).await)
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("response body is JSON")
}

/// Asserts two JSON trees have the same keys and value kinds, recursively.
/// Arrays are compared by their first element when both are non-empty.
pub fn assert_same_shape(actual: &Value, expected: &Value) {
    match (actual, expected) {
        (Value::Object(a), Value::Object(e)) => {
            let mut a_keys: Vec<_> = a.keys().collect();
            let mut e_keys: Vec<_> = e.keys().collect();
            a_keys.sort();
            e_keys.sort();
            assert_eq!(a_keys, e_keys, "object keys differ");
            for (key, value) in a {
                assert_same_shape(value, &e[key]);
            }
        }
        (Value::Array(a), Value::Array(e)) => {
            if let (Some(a0), Some(e0)) = (a.first(), e.first()) {
                assert_same_shape(a0, e0);
            }
        }
        (Value::String(_), Value::String(_))
        | (Value::Number(_), Value::Number(_))
        | (Value::Bool(_), Value::Bool(_))
        | (Value::Null, Value::Null) => {}
        _ => panic!("kind mismatch: {actual} vs {expected}"),
    }
}
