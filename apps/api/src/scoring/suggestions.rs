//! Rule-based suggestions derived from the four component analyses.
//!
//! Rules are evaluated in a fixed order and every applicable rule fires.
//! When nothing fires a single "looks strong" message is returned.

use crate::models::analysis::{
    FormatAnalysis, KeywordAnalysis, ReadabilityAnalysis, SectionAnalysis,
};

const KEYWORD_ALIGNMENT_THRESHOLD: u32 = 80;
const FORMAT_THRESHOLD: u32 = 70;
const READABILITY_THRESHOLD: u32 = 70;
const SHORT_RESUME_CHARS: usize = 500;
const LONG_RESUME_CHARS: usize = 6000;
const MIN_BULLETS: usize = 5;
const LONG_SENTENCE_WORDS: f64 = 30.0;
const MIN_ACTION_VERBS_PER_SENTENCE: f64 = 0.3;

pub const ALIGN_KEYWORDS: &str = "Align your resume language more closely to the job \
     description keywords. Mirror important terms naturally in your experience bullets.";
pub const TOO_SHORT: &str = "Your resume seems very short. Add more detail to your experience \
     and projects, including concrete outcomes.";
pub const TOO_LONG: &str = "Your resume appears quite long. Try to keep it to 1\u{2013}2 pages by \
     removing outdated or less relevant details.";
pub const USE_BULLETS: &str = "Use bullet points for responsibilities and achievements instead \
     of paragraphs to improve scannability for recruiters and ATS.";
pub const AVOID_TABLES: &str = "Avoid complex tables or multi-column layouts as some ATS \
     systems may parse these incorrectly.";
pub const SHORTEN_SENTENCES: &str = "Many of your sentences are quite long. Break them into \
     shorter, clearer statements that highlight your impact.";
pub const USE_ACTION_VERBS: &str = "Start more bullet points with strong action verbs (e.g., \
     'Led', 'Built', 'Implemented', 'Improved') to emphasize your contributions.";
pub const LOOKS_STRONG: &str = "Your resume looks fairly strong for this job description. You \
     can still fine-tune it by tailoring a short summary at the top to match the role more \
     closely.";

pub fn generate_suggestions(
    keyword: &KeywordAnalysis,
    section: &SectionAnalysis,
    format: &FormatAnalysis,
    readability: &ReadabilityAnalysis,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !keyword.missing_skills.is_empty() {
        suggestions.push(format!(
            "Your resume is missing some skills mentioned in the job description: {}. \
             If you truly have experience with them, add them to a dedicated Skills section \
             and relevant bullet points.",
            keyword.missing_skills.join(", ")
        ));
    } else if keyword.score < KEYWORD_ALIGNMENT_THRESHOLD {
        suggestions.push(ALIGN_KEYWORDS.to_string());
    }

    if !section.missing_sections.is_empty() {
        suggestions.push(format!(
            "Consider adding these sections for a more complete resume: {}.",
            section.missing_sections.join(", ")
        ));
    }

    if format.score < FORMAT_THRESHOLD {
        if format.char_count < SHORT_RESUME_CHARS {
            suggestions.push(TOO_SHORT.to_string());
        } else if format.char_count > LONG_RESUME_CHARS {
            suggestions.push(TOO_LONG.to_string());
        }
        if format.bullet_count < MIN_BULLETS {
            suggestions.push(USE_BULLETS.to_string());
        }
        if format.has_potential_tables {
            suggestions.push(AVOID_TABLES.to_string());
        }
    }

    if readability.score < READABILITY_THRESHOLD {
        if readability.avg_sentence_length > LONG_SENTENCE_WORDS {
            suggestions.push(SHORTEN_SENTENCES.to_string());
        }
        if (readability.action_verb_count as f64)
            < readability.sentence_count as f64 * MIN_ACTION_VERBS_PER_SENTENCE
        {
            suggestions.push(USE_ACTION_VERBS.to_string());
        }
    }

    if suggestions.is_empty() {
        suggestions.push(LOOKS_STRONG.to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword(score: u32, missing: &[&str]) -> KeywordAnalysis {
        KeywordAnalysis {
            score,
            jd_skills: vec![],
            resume_skills: vec![],
            matched_skills: vec![],
            missing_skills: missing.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn section(missing: &[&str]) -> SectionAnalysis {
        SectionAnalysis {
            score: 100,
            present_sections: vec![],
            missing_sections: missing.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn format(score: u32, char_count: usize, bullet_count: usize, tables: bool) -> FormatAnalysis {
        FormatAnalysis {
            score,
            char_count,
            word_count: 0,
            bullet_count,
            has_potential_tables: tables,
        }
    }

    fn readability(score: u32, avg: f64, sentences: usize, verbs: usize) -> ReadabilityAnalysis {
        ReadabilityAnalysis {
            score,
            word_count: 0,
            sentence_count: sentences,
            avg_sentence_length: avg,
            action_verb_count: verbs,
        }
    }

    fn healthy() -> (KeywordAnalysis, SectionAnalysis, FormatAnalysis, ReadabilityAnalysis) {
        (
            keyword(100, &[]),
            section(&[]),
            format(100, 2000, 20, false),
            readability(100, 15.0, 10, 10),
        )
    }

    #[test]
    fn test_healthy_resume_gets_single_fallback() {
        let (k, s, f, r) = healthy();
        assert_eq!(generate_suggestions(&k, &s, &f, &r), vec![LOOKS_STRONG]);
    }

    #[test]
    fn test_missing_skills_listed_in_order() {
        let (_, s, f, r) = healthy();
        let k = keyword(33, &["docker", "aws"]);
        let out = generate_suggestions(&k, &s, &f, &r);
        assert_eq!(out.len(), 1);
        assert!(out[0].contains("docker, aws"));
        assert!(!out.contains(&ALIGN_KEYWORDS.to_string()));
    }

    #[test]
    fn test_low_keyword_score_without_missing_skills_suggests_alignment() {
        // JD names no known skill → score 0, nothing missing
        let (_, s, f, r) = healthy();
        let out = generate_suggestions(&keyword(0, &[]), &s, &f, &r);
        assert_eq!(out, vec![ALIGN_KEYWORDS]);
    }

    #[test]
    fn test_missing_skills_message_wording() {
        let (_, s, f, r) = healthy();
        let out = generate_suggestions(&keyword(50, &["docker"]), &s, &f, &r);
        assert_eq!(
            out[0],
            "Your resume is missing some skills mentioned in the job description: docker. \
             If you truly have experience with them, add them to a dedicated Skills section \
             and relevant bullet points."
        );
    }

    #[test]
    fn test_missing_sections_message_wording() {
        let (k, _, f, r) = healthy();
        let out = generate_suggestions(&k, &section(&["Projects"]), &f, &r);
        assert_eq!(
            out,
            vec!["Consider adding these sections for a more complete resume: Projects."]
        );
    }

    #[test]
    fn test_long_resume_message_keeps_page_range() {
        assert!(TOO_LONG.contains("keep it to 1\u{2013}2 pages"));
    }

    #[test]
    fn test_missing_sections_listed() {
        let (k, _, f, r) = healthy();
        let out = generate_suggestions(&k, &section(&["Projects", "Education"]), &f, &r);
        assert_eq!(out.len(), 1);
        assert!(out[0].contains("Projects, Education"));
    }

    #[test]
    fn test_format_rules_fire_independently() {
        let (k, s, _, r) = healthy();
        let out = generate_suggestions(&k, &s, &format(30, 200, 0, true), &r);
        assert_eq!(out, vec![TOO_SHORT, USE_BULLETS, AVOID_TABLES]);
    }

    #[test]
    fn test_long_resume_rule() {
        let (k, s, _, r) = healthy();
        let out = generate_suggestions(&k, &s, &format(60, 9000, 10, false), &r);
        assert_eq!(out, vec![TOO_LONG]);
    }

    #[test]
    fn test_format_rules_skipped_when_score_ok() {
        let (k, s, _, r) = healthy();
        let out = generate_suggestions(&k, &s, &format(70, 200, 0, true), &r);
        assert_eq!(out, vec![LOOKS_STRONG]);
    }

    #[test]
    fn test_readability_rules_both_fire() {
        let (k, s, f, _) = healthy();
        let out = generate_suggestions(&k, &s, &f, &readability(50, 45.0, 10, 2));
        assert_eq!(out, vec![SHORTEN_SENTENCES, USE_ACTION_VERBS]);
    }

    #[test]
    fn test_enough_action_verbs_skip_verb_suggestion() {
        let (k, s, f, _) = healthy();
        let out = generate_suggestions(&k, &s, &f, &readability(60, 10.0, 10, 4));
        assert_eq!(out, vec![LOOKS_STRONG]);
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let out = generate_suggestions(
            &keyword(0, &["react"]),
            &section(&["Skills"]),
            &format(40, 100, 0, false),
            &readability(54, 0.0, 1, 0),
        );
        assert_eq!(out.len(), 5);
        assert!(out[0].contains("react"));
        assert!(out[1].contains("Skills"));
        assert_eq!(out[2], TOO_SHORT);
        assert_eq!(out[3], USE_BULLETS);
        assert_eq!(out[4], USE_ACTION_VERBS);
    }
}
