//! ATS-style analysis of a resume against a job description.

use serde::{Deserialize, Serialize};

use crate::llm_client::prompts::{fill, JSON_ONLY_INSTRUCTION};
use crate::tasks::prompts::ANALYSIS_PROMPT_TEMPLATE;
use crate::tasks::Task;

/// Built by the upload handler once the resume text has been extracted.
#[derive(Debug, Clone)]
pub struct AnalysisTask {
    pub resume_text: String,
    /// May be empty; the model then gives a generic review.
    pub job_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    /// 0 – 100. Kept as f64 so "82.5" from the model still conforms.
    pub ats_score: f64,
    pub summary: String,
    pub missing_keywords: Vec<String>,
    pub feedback: String,
}

impl Task for AnalysisTask {
    type Reply = ResumeAnalysis;
    const NAME: &'static str = "resume_analysis";

    fn prompt(&self) -> String {
        fill(
            ANALYSIS_PROMPT_TEMPLATE,
            &[
                ("resume_text", self.resume_text.as_str()),
                ("job_description", self.job_description.as_str()),
                ("json_only", JSON_ONLY_INSTRUCTION),
            ],
        )
    }

    fn fallback(&self, reason: &str) -> ResumeAnalysis {
        ResumeAnalysis {
            ats_score: 0.0,
            summary: "Error analyzing resume.".to_string(),
            missing_keywords: Vec::new(),
            feedback: format!(
                "Failed to connect to AI model. Ensure Ollama is running. Error: {reason}"
            ),
        }
    }

    fn check(reply: &ResumeAnalysis) -> Result<(), String> {
        if !(0.0..=100.0).contains(&reply.ats_score) {
            return Err(format!("ats_score {} is outside 0-100", reply.ats_score));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_same_shape;
    use serde_json::json;

    fn task() -> AnalysisTask {
        AnalysisTask {
            resume_text: "Jane Doe. Rust, Postgres, 3 years at Acme.".to_string(),
            job_description: "Backend engineer, Rust required.".to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_resume_and_jd() {
        let prompt = task().prompt();
        assert!(prompt.contains("RESUME:\nJane Doe. Rust, Postgres, 3 years at Acme."));
        assert!(prompt.contains("JOB DESCRIPTION:\nBackend engineer, Rust required."));
        assert!(prompt.contains("\"missing_keywords\""));
    }

    #[test]
    fn test_fallback_has_zero_score_and_reason() {
        let fallback = task().fallback("connection refused");
        assert_eq!(fallback.ats_score, 0.0);
        assert_eq!(fallback.summary, "Error analyzing resume.");
        assert!(fallback.missing_keywords.is_empty());
        assert!(fallback.feedback.ends_with("Error: connection refused"));
    }

    #[test]
    fn test_fallback_matches_success_shape() {
        let success = json!({
            "ats_score": 72,
            "summary": "Solid backend fit.",
            "missing_keywords": ["Kubernetes"],
            "feedback": "Quantify impact."
        });
        let fallback = serde_json::to_value(task().fallback("x")).unwrap();
        assert_same_shape(&fallback, &success);
    }

    #[test]
    fn test_integer_and_fractional_scores_conform() {
        for raw in [json!(72), json!(82.5)] {
            let reply: ResumeAnalysis = serde_json::from_value(json!({
                "ats_score": raw,
                "summary": "",
                "missing_keywords": [],
                "feedback": ""
            }))
            .unwrap();
            assert!(AnalysisTask::check(&reply).is_ok());
        }
    }

    #[test]
    fn test_out_of_range_score_is_rejected() {
        let reply = ResumeAnalysis {
            ats_score: 140.0,
            summary: String::new(),
            missing_keywords: vec![],
            feedback: String::new(),
        };
        assert!(AnalysisTask::check(&reply).is_err());
    }
}
