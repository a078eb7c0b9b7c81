//! LinkedIn-style profile generation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::llm_client::prompts::{fill, JSON_ONLY_INSTRUCTION};
use crate::tasks::prompts::PROFILE_PROMPT_TEMPLATE;
use crate::tasks::Task;

fn default_tone() -> String {
    "Professional".to_string()
}

/// Profile inputs as sent by the web client (camelCase keys).
///
/// The list fields are free-form objects; they are embedded in the prompt as
/// JSON without interpretation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub full_name: String,
    pub target_role: String,
    pub current_summary: String,
    pub skills: String,
    #[serde(default)]
    pub projects: Vec<Value>,
    #[serde(default)]
    pub experience: Vec<Value>,
    #[serde(default)]
    pub education: Vec<Value>,
    #[serde(default)]
    pub certifications: Vec<Value>,
    #[serde(default)]
    pub strengths: String,
    #[serde(default)]
    pub soft_skills: String,
    #[serde(default)]
    pub career_goal: String,
    #[serde(default)]
    pub achievements: String,
    #[serde(default)]
    pub tools: String,
    #[serde(default)]
    pub languages: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_tone")]
    pub tone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceDescription {
    pub company: String,
    pub role: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedInProfile {
    pub headline: String,
    pub about: String,
    pub experience_descriptions: Vec<ExperienceDescription>,
    pub projects_section: String,
    pub skills_section: String,
    pub recommendation_draft: String,
}

fn to_json(items: &[Value]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

impl Task for ProfileRequest {
    type Reply = LinkedInProfile;
    const NAME: &'static str = "linkedin_profile";

    fn prompt(&self) -> String {
        let projects = to_json(&self.projects);
        let experience = to_json(&self.experience);
        let education = to_json(&self.education);
        let certifications = to_json(&self.certifications);

        fill(
            PROFILE_PROMPT_TEMPLATE,
            &[
                ("full_name", self.full_name.as_str()),
                ("target_role", self.target_role.as_str()),
                ("current_summary", self.current_summary.as_str()),
                ("skills", self.skills.as_str()),
                ("projects", projects.as_str()),
                ("experience", experience.as_str()),
                ("education", education.as_str()),
                ("certifications", certifications.as_str()),
                ("strengths", self.strengths.as_str()),
                ("soft_skills", self.soft_skills.as_str()),
                ("career_goal", self.career_goal.as_str()),
                ("achievements", self.achievements.as_str()),
                ("tools", self.tools.as_str()),
                ("languages", self.languages.as_str()),
                ("location", self.location.as_str()),
                ("tone", self.tone.as_str()),
                ("json_only", JSON_ONLY_INSTRUCTION),
            ],
        )
    }

    fn fallback(&self, _reason: &str) -> LinkedInProfile {
        LinkedInProfile {
            headline: "Error Generating Profile".to_string(),
            about: "Please try again.".to_string(),
            experience_descriptions: Vec::new(),
            projects_section: String::new(),
            skills_section: String::new(),
            recommendation_draft: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmClient;
    use crate::test_support::{assert_same_shape, ollama_replying};
    use serde_json::json;

    fn minimal() -> ProfileRequest {
        serde_json::from_value(json!({
            "fullName": "Jane Doe",
            "targetRole": "Platform Engineer",
            "currentSummary": "Three years of backend work.",
            "skills": "Rust, Go"
        }))
        .unwrap()
    }

    #[test]
    fn test_optional_fields_default() {
        let request = minimal();
        assert!(request.projects.is_empty());
        assert_eq!(request.location, "");
        assert_eq!(request.tone, "Professional");
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let parsed = serde_json::from_value::<ProfileRequest>(json!({
            "fullName": "Jane Doe",
            "targetRole": "Platform Engineer"
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_prompt_serializes_nested_lists() {
        let request: ProfileRequest = serde_json::from_value(json!({
            "fullName": "Jane Doe",
            "targetRole": "Platform Engineer",
            "currentSummary": "Backend work.",
            "skills": "Rust",
            "experience": [{"company": "Acme", "role": "SWE"}],
            "tone": "Friendly"
        }))
        .unwrap();
        let prompt = request.prompt();
        assert!(prompt.contains("FULL NAME: Jane Doe"));
        assert!(prompt.contains(r#"EXPERIENCE HISTORY: [{"company":"Acme","role":"SWE"}]"#));
        assert!(prompt.contains("PROJECTS: []"));
        assert!(prompt.contains("TONE: Friendly"));
    }

    #[test]
    fn test_fallback_matches_success_shape() {
        let success = json!({
            "headline": "Platform Engineer | Rust",
            "about": "I build platforms.",
            "experience_descriptions": [{"company": "Acme", "role": "SWE", "description": "- Shipped"}],
            "projects_section": "kv store",
            "skills_section": "Rust, Go",
            "recommendation_draft": "Jane is great."
        });
        let fallback = serde_json::to_value(minimal().fallback("x")).unwrap();
        assert_same_shape(&fallback, &success);
        assert_eq!(fallback["headline"], "Error Generating Profile");
    }

    #[tokio::test]
    async fn test_conforming_reply_is_returned_unchanged() {
        let reply = r#"{
            "headline": "Platform Engineer | Rust, Go | Reliable infrastructure",
            "about": "I build the systems other teams build on.",
            "experience_descriptions": [
                {"company": "Acme", "role": "Backend Engineer", "description": "Cut p99 latency by 40%."}
            ],
            "projects_section": "Ledger: a double-entry accounting service.",
            "skills_section": "Rust, Go, Kubernetes",
            "recommendation_draft": "Jane is a dependable engineer."
        }"#;
        let llm = LlmClient::new(ollama_replying(reply).await, "llama3.2");
        let outcome = crate::tasks::run(&llm, &minimal()).await;
        assert!(!outcome.is_fallback());
        assert_eq!(
            outcome.into_value(),
            serde_json::from_str::<Value>(reply).unwrap()
        );
    }
}
