//! Document shape heuristics: length, bullet usage and table-like layouts.
//!
//! # Scoring
//! - length: 100 inside 500..=6000 chars, scaled down below, decaying above (floor 40)
//! - bullets: 100 for 5..=60, 70 for 1..=4 or > 60, 40 for none
//! - combined = 0.6 × length + 0.4 × bullets − 20 if tables are suspected

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::analysis::FormatAnalysis;
use crate::scoring::{count_words, to_score};

const IDEAL_MIN_CHARS: usize = 500;
const IDEAL_MAX_CHARS: usize = 6000;
const LENGTH_FLOOR: f64 = 40.0;
const TABLE_PENALTY: f64 = 20.0;

static LINE_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*[-*•]").expect("bullet regex"));
static PIPE_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\|.+\|").expect("pipe row regex"));
static TABLE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)table").expect("table regex"));
static COLUMN_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bcolumns?\b").expect("column regex"));

pub fn analyze_format(resume_text: &str) -> FormatAnalysis {
    let char_count = resume_text.chars().count();
    let word_count = count_words(resume_text);
    let bullet_count = count_bullets(resume_text);
    let has_potential_tables = PIPE_ROW.is_match(resume_text)
        || TABLE_WORD.is_match(resume_text)
        || COLUMN_WORD.is_match(resume_text);

    let length = length_score(char_count);
    let bullets = bullet_score(bullet_count);
    let penalty = if has_potential_tables { TABLE_PENALTY } else { 0.0 };
    let score = to_score(0.6 * length + 0.4 * bullets - penalty);

    debug!(
        char_count,
        bullet_count, has_potential_tables, score, "format analysis"
    );

    FormatAnalysis {
        score,
        char_count,
        word_count,
        bullet_count,
        has_potential_tables,
    }
}

/// Line-initial markers plus every `•` anywhere. A line starting with `•` is
/// counted twice; thresholds below are tuned against this count.
fn count_bullets(text: &str) -> usize {
    LINE_BULLET.find_iter(text).count() + text.matches('•').count()
}

fn length_score(char_count: usize) -> f64 {
    if char_count < IDEAL_MIN_CHARS {
        (char_count as f64 / IDEAL_MIN_CHARS as f64 * 100.0).max(LENGTH_FLOOR)
    } else if char_count > IDEAL_MAX_CHARS {
        (100.0 - (char_count - IDEAL_MAX_CHARS) as f64 / 100.0).max(LENGTH_FLOOR)
    } else {
        100.0
    }
}

fn bullet_score(bullet_count: usize) -> f64 {
    match bullet_count {
        0 => 40.0,
        5..=60 => 100.0,
        _ => 70.0,
    }
}
