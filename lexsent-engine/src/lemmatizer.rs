//! Verb lemmatization
//!
//! Verbs are looked up in the lexicon by base form, so `loved/VBD` scores as
//! `love`. Without an explicit [`Lemmatizer`] the classifier checks the
//! candidates of [`lemmatize_against`] against the lexicon's verb table.

use crate::lexicon::MemoryLexicon;
use lexsent_core::PosCategory;
use std::collections::HashSet;

/// Reduces an inflected verb to its base form
pub trait Lemmatizer: Send + Sync {
    /// Base form of `word` (lower-cased input)
    fn lemmatize_verb(&self, word: &str) -> String;
}

/// Leaves words unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize_verb(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Suffix detachment rules, tried in order
const DETACHMENTS: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const IRREGULAR: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("went", "go"),
    ("gone", "go"),
    ("made", "make"),
    ("got", "get"),
    ("gave", "give"),
    ("given", "give"),
    ("took", "take"),
    ("taken", "take"),
    ("saw", "see"),
    ("seen", "see"),
    ("felt", "feel"),
    ("thought", "think"),
    ("bought", "buy"),
    ("brought", "bring"),
    ("left", "leave"),
    ("lost", "lose"),
    ("won", "win"),
    ("hurt", "hurt"),
    ("broke", "break"),
    ("broken", "break"),
    ("fell", "fall"),
    ("fallen", "fall"),
];

/// Base form of `word`, checked against a set of known verbs.
///
/// Candidate base forms come from irregular forms and suffix detachment
/// (with undoubling of a final consonant, `stopped` -> `stop`); the first
/// known candidate wins. Words with no known candidate are returned
/// unchanged.
pub fn lemmatize_against(word: &str, is_known: impl Fn(&str) -> bool) -> String {
    if is_known(word) {
        return word.to_string();
    }
    candidates(word)
        .find(|candidate| is_known(candidate.as_str()))
        .unwrap_or_else(|| word.to_string())
}

fn candidates(word: &str) -> impl Iterator<Item = String> + '_ {
    let irregular = IRREGULAR
        .iter()
        .find(|(form, _)| *form == word)
        .map(|(_, base)| base.to_string());
    let detached = DETACHMENTS.iter().flat_map(move |(suffix, ending)| {
        let stem = word.strip_suffix(suffix).filter(|stem| !stem.is_empty());
        stem.into_iter().flat_map(move |stem| {
            let mut forms = vec![format!("{stem}{ending}")];
            if ending.is_empty() {
                if let Some(undoubled) = undouble(stem) {
                    forms.push(undoubled.to_string());
                }
            }
            forms
        })
    });
    irregular.into_iter().chain(detached)
}

/// `stopp` -> `stop`
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let prev = chars.next()?;
    if last == prev && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u') && last.is_alphabetic() {
        Some(&stem[..stem.len() - last.len_utf8()])
    } else {
        None
    }
}

/// Suffix stripping against its own set of known base forms
#[derive(Debug, Clone, Default)]
pub struct SuffixLemmatizer {
    known: HashSet<String>,
}

impl SuffixLemmatizer {
    /// Build from a set of known base forms
    pub fn new<I, S>(verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            known: verbs
                .into_iter()
                .map(|v| v.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Use a lexicon's verb table as the known set
    pub fn from_lexicon(lexicon: &MemoryLexicon) -> Self {
        Self::new(lexicon.words(PosCategory::Verb))
    }
}

impl Lemmatizer for SuffixLemmatizer {
    fn lemmatize_verb(&self, word: &str) -> String {
        lemmatize_against(word, |candidate| self.known.contains(candidate))
    }
}
