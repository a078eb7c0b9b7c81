//! Code execution client for a Piston-compatible sandbox.
//!
//! The sandbox reply is passed through untouched. Transport failures are
//! folded into the same shape (`run.output`) so the caller always just
//! displays output text.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::fallback::Outcome;

/// Known languages: request name → (sandbox runtime, version).
const RUNTIMES: &[(&str, &str, &str)] = &[
    ("python", "python", "3.10.0"),
    ("javascript", "javascript", "18.15.0"),
    ("java", "java", "15.0.2"),
    ("c", "c", "10.2.0"),
    ("cpp", "c++", "10.2.0"),
    ("c++", "c++", "10.2.0"),
    ("go", "go", "1.16.2"),
];

const ANY_VERSION: &str = "*";

#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("sandbox returned status {status}: {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExecutionRequest {
    pub language: String,
    pub code: String,
    #[serde(default)]
    pub stdin: String,
}

/// Sandbox runtime selected for a request language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runtime {
    pub language: String,
    pub version: String,
}

/// Maps a language name onto the sandbox's runtime table. Unknown names are
/// forwarded lowercased with a wildcard version and left for the sandbox to judge.
pub fn resolve_runtime(name: &str) -> Runtime {
    let key = name.to_lowercase();
    match RUNTIMES.iter().find(|(alias, _, _)| *alias == key) {
        Some((_, language, version)) => Runtime {
            language: language.to_string(),
            version: version.to_string(),
        },
        None => Runtime {
            language: key,
            version: ANY_VERSION.to_string(),
        },
    }
}

#[derive(Debug, Serialize)]
struct SourceFile<'a> {
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct PistonRequest<'a> {
    language: &'a str,
    version: &'a str,
    files: Vec<SourceFile<'a>>,
    stdin: &'a str,
}

#[derive(Clone)]
pub struct ExecutionClient {
    client: Client,
    endpoint: String,
}

impl ExecutionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Runs the code once. Never fails; see the module docs for the failure shape.
    pub async fn execute(&self, request: &ExecutionRequest) -> Outcome<Value> {
        match self.dispatch(request).await {
            Ok(reply) => Outcome::Generated(reply),
            Err(e) => {
                warn!(language = %request.language, error = %e, "Code execution failed");
                Outcome::Fallback {
                    value: json!({ "run": { "output": format!("Execution Error: {e}") } }),
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn dispatch(&self, request: &ExecutionRequest) -> Result<Value, ExecutionError> {
        let runtime = resolve_runtime(&request.language);
        let body = PistonRequest {
            language: &runtime.language,
            version: &runtime.version,
            files: vec![SourceFile {
                content: &request.code,
            }],
            stdin: &request.stdin,
        };

        debug!(runtime = %runtime.language, version = %runtime.version, "Dispatching code");

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExecutionError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{spawn_upstream, UNREACHABLE_URL};
    use axum::{http::StatusCode, routing::post, Json, Router};

    fn request(language: &str) -> ExecutionRequest {
        ExecutionRequest {
            language: language.to_string(),
            code: "print(input())".to_string(),
            stdin: "hello".to_string(),
        }
    }

    async fn echo_sandbox() -> String {
        let router = Router::new().route(
            "/execute",
            post(|Json(body): Json<Value>| async move { Json(body) }),
        );
        format!("{}/execute", spawn_upstream(router).await)
    }

    #[test]
    fn test_python_resolves_to_pinned_version() {
        assert_eq!(
            resolve_runtime("python"),
            Runtime {
                language: "python".to_string(),
                version: "3.10.0".to_string()
            }
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(resolve_runtime("JavaScript").version, "18.15.0");
        assert_eq!(resolve_runtime("Go").language, "go");
    }

    #[test]
    fn test_cpp_aliases_map_to_cplusplus() {
        assert_eq!(resolve_runtime("cpp").language, "c++");
        assert_eq!(resolve_runtime("c++").language, "c++");
    }

    #[test]
    fn test_unknown_language_passes_through_with_wildcard() {
        assert_eq!(
            resolve_runtime("Rust"),
            Runtime {
                language: "rust".to_string(),
                version: "*".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_cpp_is_dispatched_as_cplusplus() {
        let client = ExecutionClient::new(echo_sandbox().await);
        let outcome = client.execute(&request("cpp")).await;
        assert!(!outcome.is_fallback());
        let sent = outcome.into_value();
        assert_eq!(sent["language"], "c++");
        assert_eq!(sent["version"], "10.2.0");
        assert_eq!(sent["files"], json!([{"content": "print(input())"}]));
        assert_eq!(sent["stdin"], "hello");
    }

    #[tokio::test]
    async fn test_sandbox_reply_is_passed_through() {
        let reply = json!({
            "language": "python",
            "version": "3.10.0",
            "run": {"stdout": "hello\n", "stderr": "", "code": 0, "signal": null, "output": "hello\n"}
        });
        let canned = reply.clone();
        let router = Router::new().route(
            "/execute",
            post(move || {
                let canned = canned.clone();
                async move { Json(canned) }
            }),
        );
        let client = ExecutionClient::new(format!("{}/execute", spawn_upstream(router).await));
        assert_eq!(client.execute(&request("python")).await, Outcome::Generated(reply));
    }

    #[tokio::test]
    async fn test_unreachable_sandbox_reports_output_text() {
        let client = ExecutionClient::new(UNREACHABLE_URL);
        let outcome = client.execute(&request("python")).await;
        assert!(outcome.is_fallback());
        let output = outcome.value()["run"]["output"].as_str().unwrap();
        assert!(output.starts_with("Execution Error: "));
    }

    #[tokio::test]
    async fn test_error_status_reports_output_text() {
        let router = Router::new().route(
            "/execute",
            post(|| async { (StatusCode::BAD_REQUEST, "runtime is unknown") }),
        );
        let client = ExecutionClient::new(format!("{}/execute", spawn_upstream(router).await));
        let outcome = client.execute(&request("brainfuck")).await;
        assert_eq!(
            outcome.value()["run"]["output"],
            "Execution Error: sandbox returned status 400: runtime is unknown"
        );
    }
}
