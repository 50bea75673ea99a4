//! Part-of-speech tagging for untagged input

use crate::lexicon::MemoryLexicon;
use lexsent_core::{PosCategory, TagSeparator};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Converts raw text into space-joined `word<SEP>TAG` tokens
pub trait Tagger: Send + Sync {
    /// Tag a raw document
    fn tag(&self, text: &str) -> String;
}

/// Words or runs of non-space punctuation
fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\w+(?:['’]\w+)*|[^\w\s]").expect("token pattern is a valid regex")
    })
}

/// Closed-class words tagged regardless of the dictionary
const CLOSED_CLASS: &[(&str, &str)] = &[
    ("a", "DT"),
    ("an", "DT"),
    ("the", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DT"),
    ("those", "DT"),
    ("no", "DT"),
    ("not", "RB"),
    ("n't", "RB"),
    ("never", "RB"),
    ("and", "CC"),
    ("or", "CC"),
    ("but", "CC"),
    ("i", "PRP"),
    ("you", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("in", "IN"),
    ("on", "IN"),
    ("of", "IN"),
    ("at", "IN"),
    ("with", "IN"),
    ("for", "IN"),
    ("is", "VBZ"),
    ("are", "VBP"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("be", "VB"),
    ("very", "RB"),
];

/// Dictionary tagger: each word gets its listed tag, or a default tag.
///
/// Punctuation is tagged with Penn-style punctuation tags.
#[derive(Debug, Clone)]
pub struct UnigramTagger {
    tags: HashMap<String, String>,
    default_tag: String,
    separator: TagSeparator,
}

impl Default for UnigramTagger {
    fn default() -> Self {
        Self::new(HashMap::new(), "NN")
    }
}

impl UnigramTagger {
    /// Create a tagger from a word-to-tag dictionary.
    ///
    /// Closed-class words not present in `tags` are filled in.
    pub fn new(tags: HashMap<String, String>, default_tag: impl Into<String>) -> Self {
        let mut merged: HashMap<String, String> = CLOSED_CLASS
            .iter()
            .map(|(word, tag)| (word.to_string(), tag.to_string()))
            .collect();
        merged.extend(
            tags.into_iter()
                .map(|(word, tag)| (word.to_lowercase(), tag.to_uppercase())),
        );

        Self {
            tags: merged,
            default_tag: default_tag.into(),
            separator: TagSeparator::Slash,
        }
    }

    /// Derive a dictionary from a lexicon's tables.
    ///
    /// A word listed under several categories takes the first one in
    /// dispatch order (adjective, verb, adverb, noun).
    pub fn from_lexicon(lexicon: &MemoryLexicon) -> Self {
        let mut tags = HashMap::new();
        for category in PosCategory::DISPATCH_ORDER.into_iter().rev() {
            let tag = match category {
                PosCategory::Adjective => "JJ",
                PosCategory::Verb => "VB",
                PosCategory::Adverb => "RB",
                PosCategory::Noun => "NN",
            };
            for word in lexicon.words(category) {
                tags.insert(word.to_string(), tag.to_string());
            }
        }
        Self::new(tags, "NN")
    }

    /// Use `separator` between words and tags
    pub fn with_separator(mut self, separator: TagSeparator) -> Self {
        self.separator = separator;
        self
    }

    fn tag_for(&self, token: &str) -> &str {
        if token.chars().all(|c| !c.is_alphanumeric()) {
            return match token {
                "." | "!" | "?" => ".",
                "," => ",",
                ":" | ";" => ":",
                _ => "SYM",
            };
        }
        self.tags
            .get(&token.to_lowercase())
            .map_or(self.default_tag.as_str(), String::as_str)
    }
}

impl Tagger for UnigramTagger {
    fn tag(&self, text: &str) -> String {
        let sep = self.separator.as_char();
        token_pattern()
            .find_iter(text)
            .map(|m| format!("{}{}{}", m.as_str(), sep, self.tag_for(m.as_str())))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
