//! Top-level analysis: four independent analyzers, then aggregation and suggestions.
//!
//! `analyze_concurrent` runs the analyzers as separate blocking tasks and joins
//! them before the reducers. Tests compare it against the inline `analyze`.

use std::sync::Arc;

use anyhow::Result;

use crate::models::analysis::{
    AnalysisResult, FormatAnalysis, KeywordAnalysis, ReadabilityAnalysis, SectionAnalysis,
};
use crate::scoring::aggregate::{aggregate, ComponentScores};
use crate::scoring::format::analyze_format;
use crate::scoring::keywords::analyze_keywords;
use crate::scoring::readability::analyze_readability;
use crate::scoring::sections::analyze_sections;
use crate::scoring::suggestions::generate_suggestions;

/// Scores a resume against a job description inline. Total over all string inputs.
#[cfg(test)]
pub fn analyze(resume_text: &str, job_description: &str) -> AnalysisResult {
    let keyword = analyze_keywords(resume_text, job_description);
    let section = analyze_sections(resume_text);
    let format = analyze_format(resume_text);
    let readability = analyze_readability(resume_text);

    combine(keyword, section, format, readability)
}

/// Scores a resume against a job description, each analyzer on its own
/// blocking task. Fails only if an analyzer task cannot be joined.
pub async fn analyze_concurrent(
    resume_text: Arc<str>,
    job_description: Arc<str>,
) -> Result<AnalysisResult> {
    let keyword = {
        let (resume, jd) = (Arc::clone(&resume_text), Arc::clone(&job_description));
        tokio::task::spawn_blocking(move || analyze_keywords(&resume, &jd))
    };
    let section = {
        let resume = Arc::clone(&resume_text);
        tokio::task::spawn_blocking(move || analyze_sections(&resume))
    };
    let format = {
        let resume = Arc::clone(&resume_text);
        tokio::task::spawn_blocking(move || analyze_format(&resume))
    };
    let readability = {
        let resume = Arc::clone(&resume_text);
        tokio::task::spawn_blocking(move || analyze_readability(&resume))
    };

    let (keyword, section, format, readability) =
        tokio::try_join!(keyword, section, format, readability)?;

    Ok(combine(keyword, section, format, readability))
}

fn combine(
    keyword: KeywordAnalysis,
    section: SectionAnalysis,
    format: FormatAnalysis,
    readability: ReadabilityAnalysis,
) -> AnalysisResult {
    let (ats_score, scores_breakdown) = aggregate(ComponentScores {
        keyword: keyword.score,
        section: section.score,
        format: format.score,
        readability: readability.score,
    });

    let suggestions = generate_suggestions(&keyword, &section, &format, &readability);

    AnalysisResult {
        ats_score,
        scores_breakdown,
        matched_skills: keyword.matched_skills,
        missing_skills: keyword.missing_skills,
        suggestions,
    }
}
