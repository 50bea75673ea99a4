//! Part-of-speech categories and tag dispatch

use core::fmt;

/// Lexicon sub-table selected by a token's tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PosCategory {
    /// `JJ`, `JJR`, `JJS`, ...
    Adjective,
    /// `VB`, `VBD`, `VBG`, ...
    Verb,
    /// `RB`
    Adverb,
    /// `NN`
    Noun,
}

impl PosCategory {
    /// Dispatch order. When a tag matches several categories the last one wins.
    pub const DISPATCH_ORDER: [PosCategory; 4] = [
        PosCategory::Adjective,
        PosCategory::Verb,
        PosCategory::Adverb,
        PosCategory::Noun,
    ];

    /// Whether `tag` (already upper-cased) belongs to this category
    pub fn matches(self, tag: &str) -> bool {
        match self {
            PosCategory::Adjective => {
                // JJ, optionally followed by one modifier character
                tag.ends_with("JJ")
                    || tag
                        .char_indices()
                        .last()
                        .is_some_and(|(idx, _)| tag[..idx].ends_with("JJ"))
            }
            PosCategory::Verb => tag.starts_with("VB"),
            PosCategory::Adverb => tag == "RB",
            PosCategory::Noun => tag == "NN",
        }
    }

    /// Single-letter option code (`a`, `v`, `r`, `n`)
    pub fn code(self) -> char {
        match self {
            PosCategory::Adjective => 'a',
            PosCategory::Verb => 'v',
            PosCategory::Adverb => 'r',
            PosCategory::Noun => 'n',
        }
    }

    /// Parse a single-letter option code
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'a' => Some(PosCategory::Adjective),
            'v' => Some(PosCategory::Verb),
            'r' => Some(PosCategory::Adverb),
            'n' => Some(PosCategory::Noun),
            _ => None,
        }
    }
}

impl fmt::Display for PosCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PosCategory::Adjective => "adjective",
            PosCategory::Verb => "verb",
            PosCategory::Adverb => "adverb",
            PosCategory::Noun => "noun",
        };
        f.write_str(name)
    }
}

/// Which categories take part in scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosFlags {
    /// Score adjectives
    pub adjective: bool,
    /// Score verbs
    pub verb: bool,
    /// Score adverbs
    pub adverb: bool,
    /// Score nouns
    pub noun: bool,
}

impl Default for PosFlags {
    fn default() -> Self {
        Self {
            adjective: true,
            verb: true,
            adverb: false,
            noun: false,
        }
    }
}

impl PosFlags {
    /// Adjectives only
    pub const ADJECTIVES: PosFlags = PosFlags {
        adjective: true,
        verb: false,
        adverb: false,
        noun: false,
    };

    /// Adjectives and verbs
    pub const ADJECTIVES_VERBS: PosFlags = PosFlags {
        adjective: true,
        verb: true,
        adverb: false,
        noun: false,
    };

    /// Whether `category` is enabled
    pub fn is_enabled(&self, category: PosCategory) -> bool {
        match category {
            PosCategory::Adjective => self.adjective,
            PosCategory::Verb => self.verb,
            PosCategory::Adverb => self.adverb,
            PosCategory::Noun => self.noun,
        }
    }

    /// Enable or disable `category`
    pub fn set(&mut self, category: PosCategory, enabled: bool) {
        match category {
            PosCategory::Adjective => self.adjective = enabled,
            PosCategory::Verb => self.verb = enabled,
            PosCategory::Adverb => self.adverb = enabled,
            PosCategory::Noun => self.noun = enabled,
        }
    }

    /// Enabled categories matching `tag`, in dispatch order
    pub fn dispatch(self, tag: &str) -> impl Iterator<Item = PosCategory> + '_ {
        PosCategory::DISPATCH_ORDER
            .into_iter()
            .filter(move |&category| self.is_enabled(category) && category.matches(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjective_tags() {
        for tag in ["JJ", "JJR", "JJS"] {
            assert!(PosCategory::Adjective.matches(tag), "{tag}");
        }
        assert!(!PosCategory::Adjective.matches("JJRS"));
        assert!(!PosCategory::Adjective.matches("J"));
        assert!(!PosCategory::Adjective.matches(""));
    }

    #[test]
    fn test_verb_tags() {
        for tag in ["VB", "VBD", "VBG", "VBN", "VBP", "VBZ"] {
            assert!(PosCategory::Verb.matches(tag), "{tag}");
        }
        assert!(!PosCategory::Verb.matches("V"));
        assert!(!PosCategory::Verb.matches("MD"));
    }

    #[test]
    fn test_adverb_and_noun_are_exact() {
        assert!(PosCategory::Adverb.matches("RB"));
        assert!(!PosCategory::Adverb.matches("RBR"));
        assert!(!PosCategory::Adverb.matches("WRB"));
        assert!(PosCategory::Noun.matches("NN"));
        assert!(!PosCategory::Noun.matches("NNS"));
        assert!(!PosCategory::Noun.matches("NNP"));
    }

    #[test]
    fn test_dispatch_respects_flags() {
        let flags = PosFlags::ADJECTIVES;
        assert_eq!(flags.dispatch("JJ").collect::<Vec<_>>(), [PosCategory::Adjective]);
        assert_eq!(flags.dispatch("VBD").count(), 0);
        assert_eq!(PosFlags::default().dispatch("VBD").last(), Some(PosCategory::Verb));
    }

    #[test]
    fn test_codes_round_trip() {
        for category in PosCategory::DISPATCH_ORDER {
            assert_eq!(PosCategory::from_code(category.code()), Some(category));
        }
        assert_eq!(PosCategory::from_code('x'), None);
    }

    #[test]
    fn test_set_flags() {
        let mut flags = PosFlags::default();
        flags.set(PosCategory::Noun, true);
        flags.set(PosCategory::Verb, false);
        assert!(flags.is_enabled(PosCategory::Noun));
        assert!(!flags.is_enabled(PosCategory::Verb));
    }
}
