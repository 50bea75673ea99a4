//! Final score adjustment
//!
//! Runs once after the scan, on the accumulated totals. The default leaves
//! them untouched; derived algorithms hook in here.

use lexsent_core::ScorePair;

/// Scan facts available to an adjuster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Whitespace tokens in the tagged document
    pub token_count: usize,
    /// Tokens that matched an enabled category
    pub tokens_found: usize,
    /// Matched tokens inside a negation scope
    pub tokens_negated: usize,
}

/// Transforms the accumulated totals into the final scores
pub trait ScoreAdjuster: Send + Sync {
    /// Adjust `totals`
    fn adjust(&self, totals: ScorePair, summary: &ScanSummary) -> ScorePair;
}

/// Identity adjustment
#[derive(Debug, Clone, Copy, Default)]
pub struct Unadjusted;

impl ScoreAdjuster for Unadjusted {
    fn adjust(&self, totals: ScorePair, _summary: &ScanSummary) -> ScorePair {
        totals
    }
}

/// Divides both totals by the number of matched tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthNormalized;

impl ScoreAdjuster for LengthNormalized {
    fn adjust(&self, totals: ScorePair, summary: &ScanSummary) -> ScorePair {
        if summary.tokens_found == 0 {
            return totals;
        }
        let found = summary.tokens_found as f64;
        totals.map(|score| score / found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(tokens_found: usize) -> ScanSummary {
        ScanSummary {
            token_count: 10,
            tokens_found,
            tokens_negated: 0,
        }
    }

    #[test]
    fn test_unadjusted() {
        let totals = ScorePair::new(2.0, 1.0);
        assert_eq!(Unadjusted.adjust(totals, &summary(4)), totals);
    }

    #[test]
    fn test_length_normalized() {
        let totals = ScorePair::new(2.0, 1.0);
        assert_eq!(
            LengthNormalized.adjust(totals, &summary(4)),
            ScorePair::new(0.5, 0.25)
        );
        assert_eq!(LengthNormalized.adjust(totals, &summary(0)), totals);
    }
}
