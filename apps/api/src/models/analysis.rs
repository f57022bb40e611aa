#![allow(dead_code)]

use serde::Serialize;

/// Skill coverage of the resume against the job description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordAnalysis {
    pub score: u32, // 0 – 100
    pub jd_skills: Vec<String>,
    pub resume_skills: Vec<String>,
    /// Subset of `jd_skills` also found in the resume, in `jd_skills` order.
    pub matched_skills: Vec<String>,
    /// `jd_skills` minus `matched_skills`, in `jd_skills` order.
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionAnalysis {
    pub score: u32, // 0 – 100
    pub present_sections: Vec<String>,
    pub missing_sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatAnalysis {
    pub score: u32, // 0 – 100
    pub char_count: usize,
    pub word_count: usize,
    pub bullet_count: usize,
    pub has_potential_tables: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadabilityAnalysis {
    pub score: u32, // 0 – 100
    pub word_count: usize,
    /// Never below 1.
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    pub action_verb_count: usize,
}

/// Weighted contribution of each component (raw score × weight, rounded).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoresBreakdown {
    pub keyword: u32,
    pub section: u32,
    pub format: u32,
    pub readability: u32,
}

/// Final result returned to API callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub ats_score: u32,
    pub scores_breakdown: ScoresBreakdown,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
}
