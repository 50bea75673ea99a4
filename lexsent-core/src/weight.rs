//! Positional weight functions
//!
//! A weight function adjusts a raw lexicon score according to where the token
//! sits in the document: `(raw_score, position, doc_len) -> adjusted_score`,
//! with `position` 1-based and `doc_len` the total token count.

use core::f64::consts::PI;

/// Signature shared by all weight functions
pub type WeightFn = fn(score: f64, position: usize, doc_len: usize) -> f64;

/// Built-in weight functions by registry name
pub const BUILTIN_WEIGHTS: [(&str, WeightFn); 4] = [
    ("noop", identity),
    ("identity", identity),
    ("linear", linear),
    ("cosine", cosine),
];

/// Returns the score unchanged
pub fn identity(score: f64, _position: usize, _doc_len: usize) -> f64 {
    score
}

/// Scales from 0.5x at the start of the document to 1.0x at its end
pub fn linear(score: f64, position: usize, doc_len: usize) -> f64 {
    const BAND: f64 = 0.5;
    const FLOOR: f64 = 0.5;

    if doc_len == 0 {
        return score;
    }
    score * ((position as f64 / doc_len as f64) * BAND + FLOOR)
}

/// Cosine-shaped multiplier in the 0.5x..1.0x band.
///
/// The frequency term `20 * (i / N) / PI` makes the multiplier swing several
/// times across a document instead of peaking only at the start and end.
/// Existing score tables depend on this exact curve, so it is kept as is.
pub fn cosine(score: f64, position: usize, doc_len: usize) -> f64 {
    const BAND: f64 = 0.5;

    if doc_len == 0 {
        return score;
    }
    let norm = position as f64 / doc_len as f64;
    score * (BAND + ((20.0 * norm / PI).cos() + 1.0) / 4.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_identity() {
        assert_eq!(identity(0.7, 3, 10), 0.7);
        assert_eq!(identity(0.7, 0, 0), 0.7);
    }

    #[test]
    fn test_linear_band() {
        assert!(close(linear(1.0, 10, 10), 1.0));
        assert!(close(linear(1.0, 5, 10), 0.75));
        assert!(close(linear(1.0, 1, 10), 0.55));
        assert!(close(linear(0.0, 4, 10), 0.0));
    }

    #[test]
    fn test_empty_document_guard() {
        assert_eq!(linear(0.8, 0, 0), 0.8);
        assert_eq!(cosine(0.8, 0, 0), 0.8);
    }

    #[test]
    fn test_cosine_literal_formula() {
        let expected = 0.5 + ((20.0 * 0.5 / PI).cos() + 1.0) / 4.0;
        assert!(close(cosine(1.0, 5, 10), expected));
    }

    #[test]
    fn test_cosine_stays_in_band() {
        for position in 0..=200 {
            let value = cosine(1.0, position, 200);
            assert!((0.5 - 1e-12..=1.0 + 1e-12).contains(&value), "{value}");
        }
    }

    #[test]
    fn test_builtin_names() {
        let names: Vec<&str> = BUILTIN_WEIGHTS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["noop", "identity", "linear", "cosine"]);
    }
}
