use crate::models::analysis::ScoresBreakdown;
use crate::scoring::to_score;

/// Fixed aggregation weights. Sum to 1.0.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub keyword: f64,
    pub section: f64,
    pub format: f64,
    pub readability: f64,
}

pub const WEIGHTS: ScoreWeights = ScoreWeights {
    keyword: 0.5,
    section: 0.2,
    format: 0.15,
    readability: 0.15,
};

/// Raw 0 – 100 component scores, before weighting.
#[derive(Debug, Clone, Copy)]
pub struct ComponentScores {
    pub keyword: u32,
    pub section: u32,
    pub format: u32,
    pub readability: u32,
}

/// Returns `(ats_score, breakdown)`.
///
/// `ats_score` rounds the sum of the unrounded contributions while the breakdown
/// rounds each contribution on its own, so the breakdown may not add up to
/// `ats_score` exactly.
pub fn aggregate(scores: ComponentScores) -> (u32, ScoresBreakdown) {
    let keyword = scores.keyword as f64 * WEIGHTS.keyword;
    let section = scores.section as f64 * WEIGHTS.section;
    let format = scores.format as f64 * WEIGHTS.format;
    let readability = scores.readability as f64 * WEIGHTS.readability;

    let ats_score = to_score(keyword + section + format + readability);

    let breakdown = ScoresBreakdown {
        keyword: to_score(keyword),
        section: to_score(section),
        format: to_score(format),
        readability: to_score(readability),
    };

    (ats_score, breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let sum = WEIGHTS.keyword + WEIGHTS.section + WEIGHTS.format + WEIGHTS.readability;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_perfect_components() {
        let (ats, b) = aggregate(ComponentScores {
            keyword: 100,
            section: 100,
            format: 100,
            readability: 100,
        });
        assert_eq!(ats, 100);
        assert_eq!(
            b,
            ScoresBreakdown {
                keyword: 50,
                section: 20,
                format: 15,
                readability: 15
            }
        );
    }

    #[test]
    fn test_zero_components() {
        let (ats, b) = aggregate(ComponentScores {
            keyword: 0,
            section: 0,
            format: 0,
            readability: 0,
        });
        assert_eq!(ats, 0);
        assert_eq!(b.keyword + b.section + b.format + b.readability, 0);
    }

    #[test]
    fn test_breakdown_rounds_independently() {
        // 16.5 + 12.0 + 7.8 + 8.1 = 44.4 → 44, breakdown 17 + 12 + 8 + 8 = 45
        let (ats, b) = aggregate(ComponentScores {
            keyword: 33,
            section: 60,
            format: 52,
            readability: 54,
        });
        assert_eq!(b.keyword, 17);
        assert_eq!(b.section, 12);
        assert_eq!(b.format, 8);
        assert_eq!(b.readability, 8);
        assert_eq!(ats, 44);
    }

    #[test]
    fn test_breakdown_sum_can_differ_from_ats_score() {
        // 0.5 + 0.6 + 0 + 0 = 1.1 → 1; breakdown rounds to 1 + 1 = 2
        let (ats, b) = aggregate(ComponentScores {
            keyword: 1,
            section: 3,
            format: 0,
            readability: 0,
        });
        assert_eq!(ats, 1);
        assert_eq!(b.keyword + b.section + b.format + b.readability, 2);
    }
}
