//! Keyword coverage: which dictionary skills the JD asks for and the resume mentions.
//!
//! Algorithm:
//! 1. Lowercase both texts.
//! 2. Collect dictionary terms found (whole-word) in each, in dictionary order.
//! 3. matched = jd ∩ resume, missing = jd − resume (both in jd order).
//! 4. score = round(100 × matched / jd), or 0 when the JD names no known skill.

use tracing::debug;

use crate::models::analysis::KeywordAnalysis;
use crate::scoring::dictionaries::{Term, DICTIONARIES};
use crate::scoring::to_score;

pub fn analyze_keywords(resume_text: &str, job_description: &str) -> KeywordAnalysis {
    let jd_skills = extract_skills(job_description, &DICTIONARIES.skills);
    let resume_skills = extract_skills(resume_text, &DICTIONARIES.skills);

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = jd_skills
        .iter()
        .cloned()
        .partition(|skill| resume_skills.contains(skill));

    let coverage = if jd_skills.is_empty() {
        0.0
    } else {
        matched_skills.len() as f64 / jd_skills.len() as f64 * 100.0
    };
    let score = to_score(coverage);

    debug!(
        jd = jd_skills.len(),
        resume = resume_skills.len(),
        matched = matched_skills.len(),
        score,
        "keyword analysis"
    );

    KeywordAnalysis {
        score,
        jd_skills,
        resume_skills,
        matched_skills,
        missing_skills,
    }
}

fn extract_skills(text: &str, dictionary: &[Term]) -> Vec<String> {
    let normalized = text.to_lowercase();
    dictionary
        .iter()
        .filter(|t| t.pattern.is_match(&normalized))
        .map(|t| t.term.clone())
        .collect()
}
