use tracing::debug;

use crate::models::analysis::ReadabilityAnalysis;
use crate::scoring::dictionaries::{Term, DICTIONARIES};
use crate::scoring::{count_words, to_score};

const IDEAL_MIN_WORDS: f64 = 8.0;
const IDEAL_MAX_WORDS: f64 = 30.0;

/// Scores sentence length and how often action verbs appear.
pub fn analyze_readability(resume_text: &str) -> ReadabilityAnalysis {
    let sentence_count = count_sentences(resume_text).max(1);
    let word_count = count_words(resume_text);
    let avg_sentence_length = word_count as f64 / sentence_count as f64;

    let action_verb_count = count_action_verbs(resume_text, &DICTIONARIES.action_verbs);
    let action_verb_ratio = action_verb_count as f64 / sentence_count as f64;

    let length = sentence_length_score(avg_sentence_length);
    let action = action_score(action_verb_ratio);
    let score = to_score(0.6 * length + 0.4 * action);

    debug!(
        sentence_count,
        word_count, action_verb_count, score, "readability analysis"
    );

    ReadabilityAnalysis {
        score,
        word_count,
        sentence_count,
        avg_sentence_length,
        action_verb_count,
    }
}

/// Non-empty fragments between runs of `.`, `!` and `?`.
fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Total occurrences, so a verb used twice counts twice.
fn count_action_verbs(text: &str, verbs: &[Term]) -> usize {
    let lower = text.to_lowercase();
    verbs
        .iter()
        .map(|v| v.pattern.find_iter(&lower).count())
        .sum()
}

fn sentence_length_score(avg: f64) -> f64 {
    if avg < IDEAL_MIN_WORDS {
        (avg / IDEAL_MIN_WORDS * 100.0).max(50.0)
    } else if avg > IDEAL_MAX_WORDS {
        (100.0 - (avg - IDEAL_MAX_WORDS) * 3.0).max(40.0)
    } else {
        100.0
    }
}

fn action_score(ratio: f64) -> f64 {
    if ratio >= 0.7 {
        100.0
    } else if ratio >= 0.4 {
        85.0
    } else if ratio >= 0.2 {
        70.0
    } else {
        60.0
    }
}
