//! Multiple-choice questions for the trivia battle game.

use serde::{Deserialize, Serialize};

use crate::llm_client::prompts::{fill, JSON_ONLY_INSTRUCTION};
use crate::tasks::prompts::TRIVIA_PROMPT_TEMPLATE;
use crate::tasks::Task;

#[derive(Debug, Clone, Deserialize)]
pub struct TriviaRequest {
    pub topic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriviaQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub difficulty: String,
}

impl Task for TriviaRequest {
    type Reply = TriviaQuestion;
    const NAME: &'static str = "trivia";

    fn prompt(&self) -> String {
        fill(
            TRIVIA_PROMPT_TEMPLATE,
            &[
                ("topic", self.topic.as_str()),
                ("json_only", JSON_ONLY_INSTRUCTION),
            ],
        )
    }

    fn fallback(&self, _reason: &str) -> TriviaQuestion {
        TriviaQuestion {
            question: format!("Which of these is related to {}?", self.topic),
            options: ["Knowledge", "Power", "Wisdom", "All of the above"]
                .map(String::from)
                .to_vec(),
            correct_index: 3,
            difficulty: "Easy".to_string(),
        }
    }

    fn check(reply: &TriviaQuestion) -> Result<(), String> {
        if reply.correct_index >= reply.options.len() {
            return Err(format!(
                "correct_index {} does not point at one of {} options",
                reply.correct_index,
                reply.options.len()
            ));
        }
        Ok(())
    }
}
