//! Career roadmap from a current role to a target role.

use serde::{Deserialize, Serialize};

use crate::llm_client::prompts::{fill, JSON_ONLY_INSTRUCTION};
use crate::tasks::prompts::ROADMAP_PROMPT_TEMPLATE;
use crate::tasks::Task;

#[derive(Debug, Clone, Deserialize)]
pub struct RoadmapRequest {
    pub current_role: String,
    pub target_role: String,
    pub skills: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub step_number: u32,
    pub title: String,
    pub description: String,
    pub resources: Vec<String>,
    pub estimated_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub roadmap: Vec<RoadmapStep>,
}

impl Task for RoadmapRequest {
    type Reply = Roadmap;
    const NAME: &'static str = "roadmap";

    fn prompt(&self) -> String {
        fill(
            ROADMAP_PROMPT_TEMPLATE,
            &[
                ("current_role", self.current_role.as_str()),
                ("target_role", self.target_role.as_str()),
                ("skills", self.skills.as_str()),
                ("json_only", JSON_ONLY_INSTRUCTION),
            ],
        )
    }

    fn fallback(&self, reason: &str) -> Roadmap {
        Roadmap {
            roadmap: vec![RoadmapStep {
                step_number: 1,
                title: "Error".to_string(),
                description: format!(
                    "Failed to generate roadmap. Ensure Ollama is running. Error: {reason}"
                ),
                resources: Vec::new(),
                estimated_time: "0 weeks".to_string(),
            }],
        }
    }

    fn check(reply: &Roadmap) -> Result<(), String> {
        if reply.roadmap.is_empty() {
            return Err("roadmap has no steps".to_string());
        }
        Ok(())
    }
}
