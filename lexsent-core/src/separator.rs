//! Tag separator detection
//!
//! Tagged documents join each word to its part-of-speech tag with either a
//! slash (`word/TAG`, Penn Treebank style) or an underscore (`word_TAG`,
//! Brown style). The separator is inferred from a small sample of leading
//! tokens.

use crate::error::{CoreError, Result};
use crate::token::TaggedToken;
use core::fmt;

/// Number of leading tokens sampled during detection
pub const SAMPLE_SIZE: usize = 3;

/// Character joining a word and its tag inside a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagSeparator {
    /// `word/TAG`
    Slash,
    /// `word_TAG`
    Underscore,
}

impl TagSeparator {
    /// Candidates in detection order
    pub const CANDIDATES: [TagSeparator; 2] = [TagSeparator::Slash, TagSeparator::Underscore];

    /// The separator character
    pub fn as_char(self) -> char {
        match self {
            TagSeparator::Slash => '/',
            TagSeparator::Underscore => '_',
        }
    }

    /// Whether every sampled token splits into a non-empty word and tag
    fn splits_all<'a>(self, sample: impl IntoIterator<Item = &'a str>) -> bool {
        sample
            .into_iter()
            .all(|token| TaggedToken::parse(token, self).is_ok())
    }
}

impl fmt::Display for TagSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Detect the tag separator from the first [`SAMPLE_SIZE`] whitespace tokens.
///
/// The first candidate that splits every sampled token wins. An empty
/// document has an empty sample, which the first candidate accepts.
pub fn detect_separator(text: &str) -> Result<TagSeparator> {
    TagSeparator::CANDIDATES
        .into_iter()
        .find(|sep| sep.splits_all(text.split_whitespace().take(SAMPLE_SIZE)))
        .ok_or(CoreError::UndetectableSeparator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_slash() {
        assert_eq!(detect_separator("good/JJ good/JJ"), Ok(TagSeparator::Slash));
    }

    #[test]
    fn test_detect_underscore() {
        assert_eq!(
            detect_separator("good_JJ good_JJ"),
            Ok(TagSeparator::Underscore)
        );
    }

    #[test]
    fn test_untagged_text_fails() {
        assert_eq!(
            detect_separator("this cookie is good"),
            Err(CoreError::UndetectableSeparator)
        );
    }

    #[test]
    fn test_only_leading_tokens_are_sampled() {
        // The fourth token is untagged but falls outside the sample.
        assert_eq!(
            detect_separator("a/DT good/JJ movie/NN indeed"),
            Ok(TagSeparator::Slash)
        );
        // A bad token inside the sample rejects the candidate.
        assert_eq!(
            detect_separator("a/DT good movie/NN"),
            Err(CoreError::UndetectableSeparator)
        );
    }

    #[test]
    fn test_slash_preferred_when_both_split() {
        assert_eq!(
            detect_separator("well_known/JJ fact/NN"),
            Ok(TagSeparator::Slash)
        );
    }

    #[test]
    fn test_underscore_chosen_when_slash_fails() {
        assert_eq!(
            detect_separator("this_DT doc_NN is_VB not_DT"),
            Ok(TagSeparator::Underscore)
        );
    }

    #[test]
    fn test_empty_document_accepts_first_candidate() {
        assert_eq!(detect_separator(""), Ok(TagSeparator::Slash));
        assert_eq!(detect_separator("   "), Ok(TagSeparator::Slash));
    }

    #[test]
    fn test_display() {
        assert_eq!(TagSeparator::Slash.to_string(), "/");
        assert_eq!(TagSeparator::Underscore.to_string(), "_");
    }
}
