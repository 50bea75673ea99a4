//! Sentiment lexicon interface and an in-memory implementation
//!
//! The classifier only needs read access: per-category polarity lookups and
//! an optional corpus frequency per word. [`MemoryLexicon`] keeps its tables
//! in hash maps and can be filled programmatically or from a tab-separated
//! source:
//!
//! ```text
//! # word    pos  positive  negative  [frequency]
//! good      a    1.0       0.0       0.12
//! bad       a    0.0       1.0
//! love      v    0.875     0.0
//! ```

use crate::error::{EngineError, Result};
use lexsent_core::{PosCategory, ScorePair};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Read-only polarity lookup consumed by the classifier.
///
/// Scores are in `[0, 1]`; unknown words yield `(0, 0)` and a frequency of 0.
pub trait Lexicon: Send + Sync {
    /// Display name
    fn name(&self) -> &str;

    /// Whether the lexicon finished loading and may be queried
    fn is_loaded(&self) -> bool;

    /// Adjective polarity
    fn adjective(&self, word: &str) -> ScorePair;

    /// Verb polarity (looked up by base form)
    fn verb(&self, word: &str) -> ScorePair;

    /// Adverb polarity
    fn adverb(&self, word: &str) -> ScorePair;

    /// Noun polarity
    fn noun(&self, word: &str) -> ScorePair;

    /// Relative corpus frequency in `[0, 1]`
    fn frequency(&self, _word: &str) -> f64 {
        0.0
    }

    /// Whether `word` has an entry under `category`. The default treats a
    /// `(0, 0)` lookup as absent.
    fn has_entry(&self, category: PosCategory, word: &str) -> bool {
        self.lookup(category, word) != ScorePair::ZERO
    }

    /// Dispatch a lookup by category
    fn lookup(&self, category: PosCategory, word: &str) -> ScorePair {
        match category {
            PosCategory::Adjective => self.adjective(word),
            PosCategory::Verb => self.verb(word),
            PosCategory::Adverb => self.adverb(word),
            PosCategory::Noun => self.noun(word),
        }
    }
}

/// Hash-map backed lexicon
#[derive(Debug, Clone, Default)]
pub struct MemoryLexicon {
    name: String,
    tables: HashMap<PosCategory, HashMap<String, ScorePair>>,
    frequencies: HashMap<String, f64>,
    loaded: bool,
}

impl MemoryLexicon {
    /// Create an empty, not yet loaded lexicon
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Start a builder that produces a loaded lexicon
    pub fn builder(name: impl Into<String>) -> MemoryLexiconBuilder {
        MemoryLexiconBuilder {
            lexicon: Self::new(name),
            error: None,
        }
    }

    /// Add or replace a polarity entry. Words are stored lower-cased.
    pub fn insert(&mut self, category: PosCategory, word: &str, scores: ScorePair) -> Result<()> {
        check_unit("positive score", scores.positive)?;
        check_unit("negative score", scores.negative)?;
        self.tables
            .entry(category)
            .or_default()
            .insert(word.to_lowercase(), scores);
        Ok(())
    }

    /// Set the corpus frequency of a word
    pub fn set_frequency(&mut self, word: &str, frequency: f64) -> Result<()> {
        check_unit("frequency", frequency)?;
        self.frequencies.insert(word.to_lowercase(), frequency);
        Ok(())
    }

    /// Mark the lexicon ready for classification
    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    /// Parse tab-separated entries and mark the lexicon loaded.
    ///
    /// Returns the number of entries read. Blank lines and lines starting
    /// with `#` are skipped.
    pub fn load_str(&mut self, source: &str) -> Result<usize> {
        let mut count = 0;

        for (idx, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.load_line(line)
                .map_err(|reason| EngineError::InvalidLexiconEntry {
                    line: idx + 1,
                    reason,
                })?;
            count += 1;
        }

        self.mark_loaded();
        log::debug!("lexicon '{}' loaded {} entries", self.name, count);
        Ok(count)
    }

    /// Read and parse a lexicon file, see [`MemoryLexicon::load_str`]
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let source = fs::read_to_string(path.as_ref())?;
        self.load_str(&source)
    }

    fn load_line(&mut self, line: &str) -> std::result::Result<(), String> {
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        if !(4..=5).contains(&fields.len()) {
            return Err(format!("expected 4 or 5 fields, found {}", fields.len()));
        }

        let word = fields[0];
        if word.is_empty() {
            return Err("empty word".to_string());
        }
        let category = fields[1]
            .chars()
            .next()
            .filter(|_| fields[1].len() == 1)
            .and_then(PosCategory::from_code)
            .ok_or_else(|| format!("unknown part of speech '{}'", fields[1]))?;
        let positive = parse_score(fields[2])?;
        let negative = parse_score(fields[3])?;

        self.insert(category, word, ScorePair::new(positive, negative))
            .map_err(|e| e.to_string())?;
        if let Some(raw) = fields.get(4) {
            self.set_frequency(word, parse_score(raw)?)
                .map_err(|e| e.to_string())?;
        }
        Ok(())
    }

    /// Words listed under `category`
    pub fn words(&self, category: PosCategory) -> impl Iterator<Item = &str> {
        self.tables
            .get(&category)
            .into_iter()
            .flat_map(|table| table.keys().map(String::as_str))
    }

    /// Whether `word` has an entry under `category`
    pub fn contains(&self, category: PosCategory, word: &str) -> bool {
        self.tables
            .get(&category)
            .is_some_and(|table| table.contains_key(&word.to_lowercase()))
    }

    /// Number of entries under `category`
    pub fn len(&self, category: PosCategory) -> usize {
        self.tables.get(&category).map_or(0, HashMap::len)
    }

    /// Whether the lexicon has no entries at all
    pub fn is_empty(&self) -> bool {
        self.tables.values().all(HashMap::is_empty)
    }

    fn get(&self, category: PosCategory, word: &str) -> ScorePair {
        self.tables
            .get(&category)
            .and_then(|table| table.get(word))
            .copied()
            .unwrap_or(ScorePair::ZERO)
    }
}

fn parse_score(raw: &str) -> std::result::Result<f64, String> {
    raw.parse::<f64>()
        .map_err(|e| format!("invalid number '{raw}': {e}"))
}

fn check_unit(what: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EngineError::ConfigError(format!(
            "{what} {value} outside [0, 1]"
        )))
    }
}

impl Lexicon for MemoryLexicon {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn adjective(&self, word: &str) -> ScorePair {
        self.get(PosCategory::Adjective, word)
    }

    fn verb(&self, word: &str) -> ScorePair {
        self.get(PosCategory::Verb, word)
    }

    fn has_entry(&self, category: PosCategory, word: &str) -> bool {
        self.contains(category, word)
    }

    fn adverb(&self, word: &str) -> ScorePair {
        self.get(PosCategory::Adverb, word)
    }

    fn noun(&self, word: &str) -> ScorePair {
        self.get(PosCategory::Noun, word)
    }

    fn frequency(&self, word: &str) -> f64 {
        self.frequencies.get(word).copied().unwrap_or(0.0)
    }
}

/// Builder for a loaded [`MemoryLexicon`]
#[derive(Debug)]
pub struct MemoryLexiconBuilder {
    lexicon: MemoryLexicon,
    error: Option<EngineError>,
}

impl MemoryLexiconBuilder {
    /// Add an entry under `category`
    pub fn entry(mut self, category: PosCategory, word: &str, positive: f64, negative: f64) -> Self {
        if self.error.is_none() {
            if let Err(e) = self
                .lexicon
                .insert(category, word, ScorePair::new(positive, negative))
            {
                self.error = Some(e);
            }
        }
        self
    }

    /// Add an adjective entry
    pub fn adjective(self, word: &str, positive: f64, negative: f64) -> Self {
        self.entry(PosCategory::Adjective, word, positive, negative)
    }

    /// Add a verb entry
    pub fn verb(self, word: &str, positive: f64, negative: f64) -> Self {
        self.entry(PosCategory::Verb, word, positive, negative)
    }

    /// Add an adverb entry
    pub fn adverb(self, word: &str, positive: f64, negative: f64) -> Self {
        self.entry(PosCategory::Adverb, word, positive, negative)
    }

    /// Add a noun entry
    pub fn noun(self, word: &str, positive: f64, negative: f64) -> Self {
        self.entry(PosCategory::Noun, word, positive, negative)
    }

    /// Set a word's frequency
    pub fn frequency(mut self, word: &str, frequency: f64) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.lexicon.set_frequency(word, frequency) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Build the lexicon, marked loaded
    pub fn build(self) -> Result<MemoryLexicon> {
        if let Some(e) = self.error {
            return Err(e);
        }
        let mut lexicon = self.lexicon;
        lexicon.mark_loaded();
        Ok(lexicon)
    }
}
