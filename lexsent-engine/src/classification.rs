//! Classification results

use lexsent_core::{ScorePair, TagSeparator};
use std::collections::BTreeMap;
use std::fmt;

/// Diagnostic entry for one token of the tagged document
#[derive(Debug, Clone, PartialEq)]
pub enum TokenAnnotation {
    /// Token matched an enabled category and was scored
    Scored {
        /// Raw `word<SEP>TAG` token
        token: String,
        /// Negation flag, `None` when negation handling is off
        negated: Option<bool>,
        /// Contribution to the totals
        contribution: ScorePair,
    },
    /// Token left unscored (no enabled category, or malformed)
    Passthrough(String),
}

impl TokenAnnotation {
    /// The raw token
    pub fn token(&self) -> &str {
        match self {
            TokenAnnotation::Scored { token, .. } | TokenAnnotation::Passthrough(token) => token,
        }
    }
}

impl fmt::Display for TokenAnnotation {
    /// `good/JJ##NEGAT:0##POS:1.0##NEG:0.0` for scored tokens, the raw token
    /// otherwise
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenAnnotation::Scored {
                token,
                negated,
                contribution,
            } => {
                let flag = match negated {
                    Some(true) => "1",
                    Some(false) => "0",
                    None => "NONEG",
                };
                write!(
                    f,
                    "{token}##NEGAT:{flag}##POS:{}##NEG:{}",
                    short_float(contribution.positive),
                    short_float(contribution.negative)
                )
            }
            TokenAnnotation::Passthrough(token) => f.write_str(token),
        }
    }
}

/// Twelve significant digits, trailing zeros dropped, `.0` kept on whole
/// numbers: `0.30000000000000004` -> `0.3`, `0.00001` -> `1e-05`.
fn short_float(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0.0".to_string();
    }

    let scientific = format!("{value:.11e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if !(-4..12).contains(&exponent) {
        let mantissa = trim_fraction(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.abs());
    }

    let decimals = (11 - exponent).max(0) as usize;
    let fixed = format!("{value:.decimals$}");
    let fixed = trim_fraction(&fixed);
    if fixed.contains('.') {
        fixed.to_string()
    } else {
        format!("{fixed}.0")
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// Everything one classification produced
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// The document as supplied
    pub document: String,
    /// Separator detected in the tagged document
    pub separator: TagSeparator,
    /// Per-token diagnostics, in document order
    pub annotations: Vec<TokenAnnotation>,
    /// Final scores, after adjustment
    pub scores: ScorePair,
    /// Totals accumulated by the scan, before adjustment
    pub raw_totals: ScorePair,
    /// Tokens that matched an enabled category
    pub tokens_found: usize,
    /// Matched tokens inside a negation scope
    pub tokens_negated: usize,
    /// Positions marked by the negation detector across the whole document
    pub negation_span: usize,
    /// Occurrences of each matched raw token
    pub found: BTreeMap<String, usize>,
    /// Matched tokens whose contribution was exactly `(0, 0)`
    pub unscored: Vec<String>,
}

impl Classification {
    /// Final positive score
    pub fn positive(&self) -> f64 {
        self.scores.positive
    }

    /// Final negative score
    pub fn negative(&self) -> f64 {
        self.scores.negative
    }

    /// `(positive, negative)`
    pub fn pair(&self) -> (f64, f64) {
        self.scores.into()
    }

    /// Space-joined annotations
    pub fn annotated_document(&self) -> String {
        self.annotations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scored_annotation_format() {
        let annotation = TokenAnnotation::Scored {
            token: "good/JJ".to_string(),
            negated: Some(false),
            contribution: ScorePair::new(1.0, 0.0),
        };
        assert_eq!(annotation.to_string(), "good/JJ##NEGAT:0##POS:1.0##NEG:0.0");

        let annotation = TokenAnnotation::Scored {
            token: "bad/JJ".to_string(),
            negated: None,
            contribution: ScorePair::new(0.0, 0.5625),
        };
        assert_eq!(
            annotation.to_string(),
            "bad/JJ##NEGAT:NONEG##POS:0.0##NEG:0.5625"
        );
    }

    #[test]
    fn test_contributions_keep_twelve_digits() {
        assert_eq!(short_float(0.1 + 0.2), "0.3");
        assert_eq!(short_float(0.00001), "1e-05");
        assert_eq!(short_float(0.0001), "0.0001");
        assert_eq!(short_float(2.0), "2.0");
        assert_eq!(short_float(0.0), "0.0");
        assert_eq!(short_float(1.0 / 3.0), "0.333333333333");
        assert_eq!(short_float(1e13), "1e+13");

        let annotation = TokenAnnotation::Scored {
            token: "fine/JJ".to_string(),
            negated: Some(false),
            contribution: ScorePair::new(0.1 + 0.2, 0.00001),
        };
        assert_eq!(annotation.to_string(), "fine/JJ##NEGAT:0##POS:0.3##NEG:1e-05");
    }

    #[test]
    fn test_annotated_document() {
        let result = Classification {
            document: "not good".to_string(),
            separator: TagSeparator::Slash,
            annotations: vec![
                TokenAnnotation::Passthrough("not/RB".to_string()),
                TokenAnnotation::Scored {
                    token: "good/JJ".to_string(),
                    negated: Some(true),
                    contribution: ScorePair::new(0.0, 1.0),
                },
            ],
            scores: ScorePair::new(0.0, 1.0),
            raw_totals: ScorePair::new(0.0, 1.0),
            tokens_found: 1,
            tokens_negated: 1,
            negation_span: 1,
            found: BTreeMap::from([("good/JJ".to_string(), 1)]),
            unscored: Vec::new(),
        };

        assert_eq!(
            result.annotated_document(),
            "not/RB good/JJ##NEGAT:1##POS:0.0##NEG:1.0"
        );
        assert_eq!(result.pair(), (0.0, 1.0));
        assert_eq!(result.annotations[0].token(), "not/RB");
    }
}
