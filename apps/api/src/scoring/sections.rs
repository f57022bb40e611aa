use tracing::debug;

use crate::models::analysis::SectionAnalysis;
use crate::scoring::dictionaries::DICTIONARIES;
use crate::scoring::to_score;

const NEAR_COMPLETE_BONUS: f64 = 5.0;

/// Detects which canonical sections appear anywhere in the resume.
/// score = round(100 × present / total), +5 when at most one section is missing.
pub fn analyze_sections(resume_text: &str) -> SectionAnalysis {
    let mut present_sections = Vec::new();
    let mut missing_sections = Vec::new();

    for rule in &DICTIONARIES.sections {
        if rule.is_present(resume_text) {
            present_sections.push(rule.name.clone());
        } else {
            missing_sections.push(rule.name.clone());
        }
    }

    let total = DICTIONARIES.sections.len();
    let present = present_sections.len();

    let raw_score = if total == 0 {
        0.0
    } else {
        present as f64 / total as f64 * 100.0
    };
    let bonus = if present + 1 >= total {
        NEAR_COMPLETE_BONUS
    } else {
        0.0
    };
    let score = to_score(raw_score + bonus);

    debug!(present, total, score, "section analysis");

    SectionAnalysis {
        score,
        present_sections,
        missing_sections,
    }
}
