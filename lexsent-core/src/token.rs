//! Tagged token parsing

use crate::error::{CoreError, Result};
use crate::separator::TagSeparator;

/// A `(word, tag)` pair parsed from a raw `word<SEP>TAG` token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken<'a> {
    /// Word part, as written in the document
    pub word: &'a str,
    /// Tag part, upper-cased
    pub tag: String,
}

impl<'a> TaggedToken<'a> {
    /// Split a raw token at the last occurrence of `sep`.
    ///
    /// Fails with [`CoreError::MalformedToken`] when the separator is absent or
    /// either side of it is empty.
    pub fn parse(raw: &'a str, sep: TagSeparator) -> Result<Self> {
        let malformed = || CoreError::MalformedToken {
            token: raw.to_string(),
        };

        let (word, tag) = raw.rsplit_once(sep.as_char()).ok_or_else(malformed)?;
        if word.is_empty() || tag.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            word,
            tag: tag.to_uppercase(),
        })
    }

    /// Case-folded word used for lexicon lookups
    pub fn folded_word(&self) -> String {
        self.word.to_lowercase()
    }
}
