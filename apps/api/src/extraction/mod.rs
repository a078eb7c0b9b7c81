//! Text extraction for uploaded documents.
//!
//! Extraction never fails past this boundary: an unreadable document yields an
//! empty string and the caller decides whether that is an error.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use tracing::{info, warn};

/// Pluggable document-to-text backend. Carried in `AppState` as
/// `Arc<dyn TextExtractor>` so tests can swap it out.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, path: &Path) -> String;
}

/// PDF extraction via `pdf-extract`, run on the blocking pool.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, path: &Path) -> String {
        let owned: PathBuf = path.to_path_buf();
        match tokio::task::spawn_blocking(move || pdf_extract::extract_text(&owned)).await {
            Ok(Ok(text)) => text.trim().to_string(),
            Ok(Err(e)) => {
                warn!(path = %path.display(), error = %e, "Error parsing PDF");
                String::new()
            }
            // pdf-extract panics on some malformed inputs
            Err(e) => {
                warn!(path = %path.display(), error = %e, "PDF extraction task aborted");
                String::new()
            }
        }
    }
}

/// An uploaded file held in memory until extraction.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub bytes: Bytes,
}

/// Spools an upload to a temp file, extracts its text, and removes the file.
///
/// Only the spooling can fail; extraction problems surface as empty text.
pub async fn extract_upload(extractor: &dyn TextExtractor, upload: &Upload) -> Result<String> {
    let mut file = tempfile::Builder::new()
        .prefix("upload_")
        .suffix(".pdf")
        .tempfile()
        .context("Failed to create temp file for upload")?;
    file.write_all(&upload.bytes)
        .context("Failed to write upload to temp file")?;

    let text = extractor.extract(file.path()).await;
    info!(
        filename = %upload.filename,
        bytes = upload.bytes.len(),
        chars = text.len(),
        "Extracted upload text"
    );
    Ok(text)
}
