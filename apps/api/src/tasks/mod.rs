//! Generation tasks: one prompt template, one reply schema and one fallback each.
//!
//! Every JSON task goes through [`run`], which owns the shared
//! prompt → generate → parse → conform → fallback pipeline.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::fallback::Outcome;
use crate::llm_client::{LlmClient, LlmError};

pub mod analysis;
pub mod dsa;
pub mod portfolio;
pub mod profile;
pub mod prompts;
pub mod roadmap;
pub mod trivia;

/// A JSON-producing generation task.
pub trait Task {
    /// Typed schema the model's reply must satisfy.
    type Reply: DeserializeOwned + Serialize;

    /// Name used in diagnostics.
    const NAME: &'static str;

    fn prompt(&self) -> String;

    /// Placeholder reply served when the real one is unusable. `reason` is the
    /// failure text; some placeholders surface it to the user.
    fn fallback(&self, reason: &str) -> Self::Reply;

    /// Semantic checks beyond what deserialization enforces.
    fn check(_reply: &Self::Reply) -> Result<(), String> {
        Ok(())
    }
}

/// Runs one task against the model. Never fails: any upstream, parse or schema
/// problem is logged and replaced by the task's fallback.
///
/// A conforming reply is returned as the parsed tree, not re-serialized from
/// `Task::Reply`, so extra keys and number formatting survive untouched.
pub async fn run<T: Task>(llm: &LlmClient, task: &T) -> Outcome<Value> {
    match generate_conforming(llm, task).await {
        Ok(value) => Outcome::Generated(value),
        Err(e) => {
            warn!(task = T::NAME, error = %e, "Generation failed, serving fallback");
            let reason = e.to_string();
            let value = serde_json::to_value(task.fallback(&reason)).unwrap_or_default();
            Outcome::Fallback { value, reason }
        }
    }
}

async fn generate_conforming<T: Task>(llm: &LlmClient, task: &T) -> Result<Value, LlmError> {
    let value: Value = llm.generate_json(&task.prompt()).await?;
    let reply = <T::Reply as Deserialize>::deserialize(&value)
        .map_err(|e| LlmError::Schema(e.to_string()))?;
    T::check(&reply).map_err(LlmError::Schema)?;
    Ok(value)
}
