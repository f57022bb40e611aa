// ATS scoring pipeline.
// Four independent analyzers (keywords, sections, format, readability) feed a
// fixed-weight aggregator and a rule-based suggestion generator.
// Everything here is pure and CPU-bound; callers on the async runtime use
// `pipeline::analyze_concurrent`.

pub mod aggregate;
pub mod dictionaries;
pub mod format;
pub mod handlers;
pub mod keywords;
pub mod pipeline;
pub mod readability;
pub mod sections;
pub mod suggestions;

pub use pipeline::analyze_concurrent;

/// Rounds half-up and clamps into 0 – 100.
pub(crate) fn to_score(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}

/// Whitespace-separated tokens, ignoring runs and leading/trailing whitespace.
pub(crate) fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_score_rounds_half_up() {
        assert_eq!(to_score(52.5), 53);
        assert_eq!(to_score(52.49), 52);
    }

    #[test]
    fn test_to_score_clamps() {
        assert_eq!(to_score(-3.0), 0);
        assert_eq!(to_score(105.0), 100);
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("one  two\nthree"), 3);
    }
}
