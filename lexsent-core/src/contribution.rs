//! Per-token contribution rules
//!
//! A matched token's lexicon pair is turned into its contribution to the
//! document totals in four steps:
//!
//! 1. route the pair through the negation flag at the token's position
//! 2. gate on eligibility (scan mode and stopword filter); ineligible tokens
//!    contribute `(0, 0)`
//! 3. apply the positional weight function to each side
//! 4. optionally multiply by the frequency discount

use crate::score::{frequency_discount, ScanMode, ScorePair};
use crate::weight::{identity, WeightFn};

/// Rule set shared by every token of one classification
#[derive(Debug, Clone, Copy)]
pub struct ContributionRules {
    /// Duplicate-occurrence policy
    pub scan_mode: ScanMode,
    /// Discard stopwords
    pub stopword_gate: bool,
    /// Discount frequent words
    pub frequency_discount: bool,
    /// Positional weight function
    pub weight: WeightFn,
}

impl Default for ContributionRules {
    fn default() -> Self {
        Self {
            scan_mode: ScanMode::All,
            stopword_gate: false,
            frequency_discount: false,
            weight: identity,
        }
    }
}

/// Where a token sits and what the scan already knows about it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPosition {
    /// 1-based position in the document
    pub index: usize,
    /// Total token count
    pub doc_len: usize,
    /// Negation flag at this position, `None` when negation handling is off
    pub negated: Option<bool>,
    /// This `word+tag` already contributed earlier in the document
    pub seen: bool,
}

impl ContributionRules {
    /// Whether a token passes the eligibility gate.
    ///
    /// `is_stopword` is only consulted when the stopword gate is on.
    pub fn is_eligible(&self, seen: bool, is_stopword: impl FnOnce() -> bool) -> bool {
        let counted = match self.scan_mode {
            ScanMode::All => true,
            ScanMode::Once => !seen,
        };
        counted && !(self.stopword_gate && is_stopword())
    }
}

/// Compute one token's contribution.
///
/// `is_stopword` and `frequency` are lazy so lookups only happen when the
/// corresponding rule is active and the token is eligible.
pub fn contribution(
    rules: &ContributionRules,
    position: TokenPosition,
    scores: ScorePair,
    is_stopword: impl FnOnce() -> bool,
    frequency: impl FnOnce() -> f64,
) -> ScorePair {
    if !rules.is_eligible(position.seen, is_stopword) {
        return ScorePair::ZERO;
    }

    let weight = rules.weight;
    let weighted = scores
        .routed(position.negated)
        .map(|score| weight(score, position.index, position.doc_len));

    if rules.frequency_discount {
        let discount = frequency_discount(frequency());
        weighted.map(|score| score * discount)
    } else {
        weighted
    }
}
