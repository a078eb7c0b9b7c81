//! DSA practice: problem generation and the "Yuvi" tutor hints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::fallback::Outcome;
use crate::llm_client::prompts::{fill, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{LlmClient, LlmError};
use crate::tasks::prompts::{DSA_QUESTION_PROMPT_TEMPLATE, TUTOR_PROMPT_TEMPLATE};
use crate::tasks::Task;

const TUTOR_THINKING: &str = "Yuvi is thinking...";

#[derive(Debug, Clone, Deserialize)]
pub struct DsaQuestionRequest {
    pub topic: String,
    pub difficulty: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DsaExample {
    /// Models write these as strings or as literal arrays/numbers; either is kept.
    pub input: Value,
    pub output: Value,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DsaQuestion {
    pub title: String,
    pub description: String,
    pub examples: Vec<DsaExample>,
    pub constraints: Vec<String>,
    pub starter_code: String,
}

impl Task for DsaQuestionRequest {
    type Reply = DsaQuestion;
    const NAME: &'static str = "dsa_question";

    fn prompt(&self) -> String {
        fill(
            DSA_QUESTION_PROMPT_TEMPLATE,
            &[
                ("difficulty", self.difficulty.as_str()),
                ("topic", self.topic.as_str()),
                ("json_only", JSON_ONLY_INSTRUCTION),
            ],
        )
    }

    fn fallback(&self, _reason: &str) -> DsaQuestion {
        DsaQuestion {
            title: "Error Generating Question".to_string(),
            description: "Please try again.".to_string(),
            examples: Vec::new(),
            constraints: Vec::new(),
            starter_code: "# Error".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TutorRequest {
    pub code: String,
    pub question: String,
    pub user_query: String,
}

impl TutorRequest {
    pub fn prompt(&self) -> String {
        fill(
            TUTOR_PROMPT_TEMPLATE,
            &[
                ("question", self.question.as_str()),
                ("code", self.code.as_str()),
                ("user_query", self.user_query.as_str()),
            ],
        )
    }
}

/// Asks the tutor for a hint. The model answers in prose, so the reply text is
/// passed through as-is; failures become a friendly message instead.
pub async fn ask_tutor(llm: &LlmClient, request: &TutorRequest) -> Outcome<String> {
    let reply = llm
        .generate(&request.prompt(), None)
        .await
        .and_then(|text| {
            if text.trim().is_empty() {
                Err(LlmError::EmptyContent)
            } else {
                Ok(text)
            }
        });

    match reply {
        Ok(text) => Outcome::Generated(text),
        Err(e @ LlmError::EmptyContent) => {
            warn!(task = "tutor", error = %e, "Tutor returned nothing, serving placeholder");
            Outcome::Fallback {
                value: TUTOR_THINKING.to_string(),
                reason: e.to_string(),
            }
        }
        Err(e) => {
            warn!(task = "tutor", error = %e, "Tutor call failed, serving fallback");
            Outcome::Fallback {
                value: format!("Yuvi is having trouble connecting: {e}"),
                reason: e.to_string(),
            }
        }
    }
}
