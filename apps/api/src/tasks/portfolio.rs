//! Portfolio field extraction from a resume and/or free-form notes.

use serde::{Deserialize, Serialize};

use crate::llm_client::prompts::{fill, JSON_ONLY_INSTRUCTION};
use crate::tasks::prompts::PORTFOLIO_PROMPT_TEMPLATE;
use crate::tasks::Task;

#[derive(Debug, Clone, Default)]
pub struct PortfolioTask {
    pub user_data: String,
}

impl PortfolioTask {
    /// Combines extracted resume text and user notes into one labeled input.
    /// Either part may be absent; returns `None` when nothing usable remains.
    pub fn from_sources(resume_text: Option<&str>, notes: Option<&str>) -> Option<Self> {
        let mut user_data = String::new();
        if let Some(text) = resume_text.filter(|t| !t.is_empty()) {
            user_data.push_str(&format!("\nRESUME CONTENT:\n{text}\n"));
        }
        if let Some(notes) = notes.filter(|n| !n.is_empty()) {
            user_data.push_str(&format!("\nUSER NOTES:\n{notes}\n"));
        }

        if user_data.trim().is_empty() {
            None
        } else {
            Some(Self { user_data })
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioProject {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub tagline: String,
    pub about: String,
    pub skills: Vec<String>,
    pub projects: Vec<PortfolioProject>,
    pub contact: Contact,
}

impl Task for PortfolioTask {
    type Reply = Portfolio;
    const NAME: &'static str = "portfolio";

    fn prompt(&self) -> String {
        fill(
            PORTFOLIO_PROMPT_TEMPLATE,
            &[
                ("user_data", self.user_data.as_str()),
                ("json_only", JSON_ONLY_INSTRUCTION),
            ],
        )
    }

    fn fallback(&self, _reason: &str) -> Portfolio {
        Portfolio {
            name: "Professional".to_string(),
            tagline: "Building the future with code.".to_string(),
            about: "I am a passionate developer. (AI failed to extract details)".to_string(),
            skills: ["HTML", "CSS", "JavaScript"].map(String::from).to_vec(),
            projects: Vec::new(),
            contact: Contact {
                email: "email@example.com".to_string(),
                linkedin: String::new(),
                github: String::new(),
            },
        }
    }
}
