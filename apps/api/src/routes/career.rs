//! Axum route handlers for the career tools: resume analysis, roadmap,
//! portfolio and LinkedIn profile.

use axum::extract::{Multipart, State};
use serde_json::{json, Value};

use crate::errors::{AppError, AppJson};
use crate::extraction::extract_upload;
use crate::fallback::Outcome;
use crate::routes::upload::UploadForm;
use crate::state::AppState;
use crate::tasks::{
    self, analysis::AnalysisTask, portfolio::PortfolioTask, profile::ProfileRequest,
    roadmap::RoadmapRequest,
};

const PREVIEW_CHARS: usize = 200;

fn preview(text: &str) -> String {
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}

/// POST /analyze
///
/// Multipart: `file` (PDF resume, required), `job_description` (optional).
/// Returns `{filename, extracted_text_preview, analysis}`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Outcome<Value>, AppError> {
    let form = UploadForm::read(multipart).await?;
    let upload = form
        .file
        .as_ref()
        .ok_or_else(|| AppError::Validation("A resume file is required.".to_string()))?;

    let resume_text = extract_upload(state.extractor.as_ref(), upload).await?;
    if resume_text.is_empty() {
        return Err(AppError::Validation(
            "Could not extract text from PDF.".to_string(),
        ));
    }

    let extracted_text_preview = preview(&resume_text);
    let task = AnalysisTask {
        resume_text,
        job_description: form.text("job_description").unwrap_or_default().to_string(),
    };

    let filename = upload.filename.clone();
    Ok(tasks::run(&state.llm, &task).await.map(|analysis| {
        json!({
            "filename": filename,
            "extracted_text_preview": extracted_text_preview,
            "analysis": analysis
        })
    }))
}

/// POST /roadmap
pub async fn handle_roadmap(
    State(state): State<AppState>,
    AppJson(request): AppJson<RoadmapRequest>,
) -> Outcome<Value> {
    tasks::run(&state.llm, &request).await
}

/// POST /generate-portfolio
///
/// Multipart: `file` (PDF resume) and/or `text_content`. At least one must
/// carry text.
pub async fn handle_portfolio(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Outcome<Value>, AppError> {
    let form = UploadForm::read(multipart).await?;

    let resume_text = match &form.file {
        Some(upload) => Some(extract_upload(state.extractor.as_ref(), upload).await?),
        None => None,
    };

    let task = PortfolioTask::from_sources(resume_text.as_deref(), form.text("text_content"))
        .ok_or_else(|| {
            AppError::Validation("Please provide a resume or text description.".to_string())
        })?;

    Ok(tasks::run(&state.llm, &task).await)
}

/// POST /linkedin/generate
pub async fn handle_linkedin(
    State(state): State<AppState>,
    AppJson(request): AppJson<ProfileRequest>,
) -> Outcome<Value> {
    tasks::run(&state.llm, &request).await
}
