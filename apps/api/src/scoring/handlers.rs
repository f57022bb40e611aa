//! Axum route handlers for the Analysis API.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::intake::{read_multipart, resolve, AnalyzeRequest, Submission};
use crate::models::analysis::AnalysisResult;
use crate::scoring::analyze_concurrent;
use crate::state::AppState;

/// POST /api/analyze
///
/// Accepts `multipart/form-data` (jobDescription, resumeText, resumeFile) or a
/// JSON body (jobDescription, resumeText) and returns the ATS analysis.
pub async fn handle_analyze(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<AnalysisResult>, AppError> {
    let request_id = Uuid::new_v4();
    let started = Instant::now();

    let submission = if is_multipart(&request) {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|e| rejection_error(e.status(), e.body_text()))?;
        read_multipart(multipart, state.config.max_upload_bytes).await?
    } else {
        let Json(body) = Json::<AnalyzeRequest>::from_request(request, &state)
            .await
            .map_err(|e| rejection_error(e.status(), e.body_text()))?;
        Submission::from(body)
    };

    let uploaded = submission.document.is_some();
    let input = resolve(submission, state.extractor.as_ref()).await?;
    let (resume_chars, jd_chars) = input.char_counts();

    info!(
        %request_id,
        uploaded,
        resume_chars,
        jd_chars,
        "analyzing resume"
    );

    let result = analyze_concurrent(
        Arc::from(input.resume_text),
        Arc::from(input.job_description),
    )
    .await
    .map_err(AppError::Internal)?;

    info!(
        %request_id,
        ats_score = result.ats_score,
        matched = result.matched_skills.len(),
        missing = result.missing_skills.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "analysis complete"
    );

    Ok(Json(result))
}

/// Body-limit rejections keep their 413; every other extractor rejection is a 400.
fn rejection_error(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::Validation(message)
    }
}

fn is_multipart(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_ascii_lowercase().starts_with("multipart/form-data"))
        .unwrap_or(false)
}
