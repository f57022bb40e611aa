// Request intake: everything between the HTTP body and the scoring pipeline.
// Reads the submission, decodes any uploaded document, and enforces the input
// limits. The scoring core never sees binary data or invalid lengths.

pub mod docx;
pub mod extract;
pub mod validation;

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::BytesMut;
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::intake::extract::{Document, DocumentKind, TextExtractor};
use crate::intake::validation::{validate_job_description, validate_resume_text};

pub const FIELD_JOB_DESCRIPTION: &str = "jobDescription";
pub const FIELD_RESUME_TEXT: &str = "resumeText";
pub const FIELD_RESUME_FILE: &str = "resumeFile";

/// JSON form of the analyze request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub job_description: Option<String>,
    pub resume_text: Option<String>,
}

/// Raw, unvalidated submission from either request form.
#[derive(Debug, Default)]
pub struct Submission {
    pub job_description: Option<String>,
    pub resume_text: Option<String>,
    pub document: Option<Document>,
}

impl From<AnalyzeRequest> for Submission {
    fn from(req: AnalyzeRequest) -> Self {
        Submission {
            job_description: req.job_description,
            resume_text: req.resume_text,
            document: None,
        }
    }
}

/// Validated inputs ready for scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisInput {
    pub resume_text: String,
    pub job_description: String,
}

impl AnalysisInput {
    /// (resume, job description) lengths in characters, as validation counts them.
    pub fn char_counts(&self) -> (usize, usize) {
        (
            self.resume_text.chars().count(),
            self.job_description.chars().count(),
        )
    }
}

/// Reads the multipart form. Unknown fields are ignored; the file part is
/// capped at `max_upload_bytes`.
pub async fn read_multipart(
    mut multipart: Multipart,
    max_upload_bytes: usize,
) -> Result<Submission, AppError> {
    let mut submission = Submission::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            FIELD_JOB_DESCRIPTION => {
                submission.job_description = Some(field.text().await.map_err(multipart_error)?);
            }
            FIELD_RESUME_TEXT => {
                submission.resume_text = Some(field.text().await.map_err(multipart_error)?);
            }
            FIELD_RESUME_FILE => {
                submission.document = read_document(field, max_upload_bytes).await?;
            }
            other => debug!(field = other, "ignoring unknown form field"),
        }
    }

    Ok(submission)
}

async fn read_document(
    mut field: Field<'_>,
    max_upload_bytes: usize,
) -> Result<Option<Document>, AppError> {
    let file_name = field.file_name().map(str::to_string);
    let media_type = field.content_type().map(str::to_string);

    let mut buf = BytesMut::new();
    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        if buf.len() + chunk.len() > max_upload_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "Uploaded file exceeds the {} MB limit.",
                max_upload_bytes / (1024 * 1024)
            )));
        }
        buf.extend_from_slice(&chunk);
    }

    // Browsers send an empty part when no file was chosen.
    if buf.is_empty() && file_name.as_deref().unwrap_or_default().is_empty() {
        return Ok(None);
    }

    let kind = DocumentKind::detect(media_type.as_deref(), file_name.as_deref())?;
    Ok(Some(Document {
        kind,
        file_name,
        bytes: buf.freeze(),
    }))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(format!("Malformed form data: {}", err.body_text()))
    }
}

/// Validates the job description, resolves the resume text (an uploaded file
/// takes precedence over pasted text) and validates it.
pub async fn resolve(
    submission: Submission,
    extractor: &dyn TextExtractor,
) -> Result<AnalysisInput, AppError> {
    let job_description = validate_job_description(submission.job_description.as_deref())?;

    let resume_text = match submission.document {
        Some(document) => Some(extractor.extract(document).await?),
        None => submission.resume_text,
    };
    let resume_text = validate_resume_text(resume_text.as_deref())?;

    Ok(AnalysisInput {
        resume_text,
        job_description,
    })
}
