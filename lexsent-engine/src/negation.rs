//! Negation scope detection

use std::collections::HashSet;

/// Marks which tokens fall inside a negation scope.
///
/// Implementations must return exactly one flag per input token.
pub trait NegationDetector: Send + Sync {
    /// Flags for `tokens`, computed with a scope of `window` tokens
    fn negation_array(&self, tokens: &[&str], window: usize) -> Vec<bool>;
}

const CUES: &[&str] = &[
    "not", "no", "never", "n't", "cannot", "nothing", "nobody", "none", "neither", "nor",
    "without", "hardly", "barely", "don't", "doesn't", "didn't", "isn't", "wasn't", "aren't",
    "weren't", "won't", "wouldn't", "can't", "couldn't", "shouldn't",
];

const TERMINATORS: &[&str] = &[".", ",", ";", ":", "!", "?", "but", "however", "although"];

/// Cue-driven detector: a negation cue negates up to `window` following
/// tokens, and clause punctuation or a contrastive conjunction closes the
/// scope early.
///
/// Tokens may carry `/TAG` or `_TAG` suffixes; only the word part is
/// inspected. Cues themselves are not marked.
#[derive(Debug, Clone)]
pub struct WindowNegationDetector {
    cues: HashSet<String>,
    terminators: HashSet<String>,
}

impl Default for WindowNegationDetector {
    fn default() -> Self {
        Self {
            cues: CUES.iter().map(|s| s.to_string()).collect(),
            terminators: TERMINATORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl WindowNegationDetector {
    /// Detector with the built-in English cue list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add extra cue words
    pub fn with_cues<I, S>(mut self, cues: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.cues
            .extend(cues.into_iter().map(|c| c.as_ref().to_lowercase()));
        self
    }

    fn word_of(token: &str) -> String {
        let word = match token.rfind(|c: char| c == '/' || c == '_') {
            Some(idx) if idx > 0 => &token[..idx],
            _ => token,
        };
        word.to_lowercase()
    }
}

impl NegationDetector for WindowNegationDetector {
    fn negation_array(&self, tokens: &[&str], window: usize) -> Vec<bool> {
        let mut flags = Vec::with_capacity(tokens.len());
        let mut remaining = 0usize;

        for token in tokens {
            let word = Self::word_of(token);
            if self.cues.contains(&word) {
                flags.push(false);
                remaining = window;
            } else if self.terminators.contains(&word) {
                flags.push(false);
                remaining = 0;
            } else if remaining > 0 {
                flags.push(true);
                remaining -= 1;
            } else {
                flags.push(false);
            }
        }

        flags
    }
}

/// Never marks anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNegation;

impl NegationDetector for NoNegation {
    fn negation_array(&self, tokens: &[&str], _window: usize) -> Vec<bool> {
        vec![false; tokens.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(doc: &str, window: usize) -> Vec<bool> {
        let tokens: Vec<&str> = doc.split_whitespace().collect();
        WindowNegationDetector::new().negation_array(&tokens, window)
    }

    #[test]
    fn test_scope_follows_cue() {
        assert_eq!(
            flags("not/DT bad/JJ movie/NN ./. blah/NN", 5),
            [false, true, true, false, false]
        );
    }

    #[test]
    fn test_window_limits_scope() {
        assert_eq!(
            flags("never a good day at all", 2),
            [false, true, true, false, false, false]
        );
    }

    #[test]
    fn test_zero_window_marks_nothing() {
        assert!(flags("not_DT bad_JJ", 0).iter().all(|f| !f));
    }

    #[test]
    fn test_contrastive_conjunction_closes_scope() {
        assert_eq!(
            flags("not cheap but good", 5),
            [false, true, false, false]
        );
    }

    #[test]
    fn test_length_contract() {
        assert_eq!(flags("", 5).len(), 0);
        assert_eq!(flags("a b c d", 5).len(), 4);
        let tokens = ["not/RB", "good/JJ"];
        assert_eq!(NoNegation.negation_array(&tokens, 5), [false, false]);
    }

    #[test]
    fn test_extra_cues() {
        let detector = WindowNegationDetector::new().with_cues(["lacks"]);
        let tokens = ["lacks/VBZ", "charm/NN"];
        assert_eq!(detector.negation_array(&tokens, 3), [false, true]);
    }

    #[test]
    fn test_separator_only_token() {
        assert_eq!(WindowNegationDetector::word_of("/"), "/");
        assert_eq!(WindowNegationDetector::word_of("./."), ".");
    }
}
