//! Axum route handlers for DSA practice and the trivia game.

use axum::extract::State;
use serde_json::{json, Value};

use crate::errors::AppJson;
use crate::execution::ExecutionRequest;
use crate::fallback::Outcome;
use crate::state::AppState;
use crate::tasks::{
    self,
    dsa::{ask_tutor, DsaQuestionRequest, TutorRequest},
    trivia::TriviaRequest,
};

/// POST /dsa/generate
pub async fn handle_dsa_generate(
    State(state): State<AppState>,
    AppJson(request): AppJson<DsaQuestionRequest>,
) -> Outcome<Value> {
    tasks::run(&state.llm, &request).await
}

/// POST /dsa/run
///
/// Returns the sandbox reply verbatim.
pub async fn handle_dsa_run(
    State(state): State<AppState>,
    AppJson(request): AppJson<ExecutionRequest>,
) -> Outcome<Value> {
    state.executor.execute(&request).await
}

/// POST /dsa/yuvi
pub async fn handle_dsa_tutor(
    State(state): State<AppState>,
    AppJson(request): AppJson<TutorRequest>,
) -> Outcome<Value> {
    ask_tutor(&state.llm, &request)
        .await
        .map(|response| json!({ "response": response }))
}

/// POST /game/generate
pub async fn handle_game_generate(
    State(state): State<AppState>,
    AppJson(request): AppJson<TriviaRequest>,
) -> Outcome<Value> {
    tasks::run(&state.llm, &request).await
}
