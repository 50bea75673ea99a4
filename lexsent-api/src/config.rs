//! Per-call classifier options
//!
//! [`Options`] is a sparse override set: only the fields that are present
//! change the classifier's configuration. It deserializes from TOML:
//!
//! ```toml
//! a = true
//! v = false
//! negation = true
//! negation_window = 8
//! score_mode = "once"
//! score_freq = true
//! score_function = "linear"
//! ```

use crate::error::{ApiError, Result};
use lexsent_engine::{DocumentClassifier, Lexicon, NegationConfig, PosCategory, ScanMode};
use std::sync::Arc;

/// Sparse configuration overrides
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Options {
    /// Lexicon to classify with; must already be loaded
    #[cfg_attr(feature = "serde", serde(skip))]
    pub lexicon: Option<Arc<dyn Lexicon>>,
    /// Score adjectives
    pub a: Option<bool>,
    /// Score verbs
    pub v: Option<bool>,
    /// Score nouns
    pub n: Option<bool>,
    /// Score adverbs
    pub r: Option<bool>,
    /// Negation handling. Supplying this also replaces the window and the
    /// adjustment, which reset to 0 when absent.
    pub negation: Option<bool>,
    /// Negation window, only read together with `negation`
    pub negation_window: Option<usize>,
    /// Negation adjustment, only read together with `negation`
    pub negation_adjustment: Option<f64>,
    /// `"all"` or `"once"`
    pub score_mode: Option<String>,
    /// Frequency discounting
    pub score_freq: Option<bool>,
    /// Stopword gate
    pub score_stop: Option<bool>,
    /// Weight function name; unknown names select identity
    pub score_function: Option<String>,
}

impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("lexicon", &self.lexicon.as_ref().map(|l| l.name().to_string()))
            .field("a", &self.a)
            .field("v", &self.v)
            .field("n", &self.n)
            .field("r", &self.r)
            .field("negation", &self.negation)
            .field("negation_window", &self.negation_window)
            .field("negation_adjustment", &self.negation_adjustment)
            .field("score_mode", &self.score_mode)
            .field("score_freq", &self.score_freq)
            .field("score_stop", &self.score_stop)
            .field("score_function", &self.score_function)
            .finish()
    }
}

impl Options {
    /// Empty override set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from TOML
    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read options from a TOML file
    #[cfg(feature = "serde")]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    /// Set the lexicon
    pub fn lexicon(mut self, lexicon: Arc<dyn Lexicon>) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Enable or disable one part-of-speech category
    pub fn pos(mut self, category: PosCategory, enabled: bool) -> Self {
        *self.pos_slot(category) = Some(enabled);
        self
    }

    /// Set negation handling with its window and adjustment
    pub fn negation(mut self, enabled: bool, window: usize, adjustment: f64) -> Self {
        self.negation = Some(enabled);
        self.negation_window = Some(window);
        self.negation_adjustment = Some(adjustment);
        self
    }

    /// Set the scan mode
    pub fn score_mode(mut self, mode: ScanMode) -> Self {
        self.score_mode = Some(mode.as_str().to_string());
        self
    }

    /// Enable frequency discounting
    pub fn score_freq(mut self, enabled: bool) -> Self {
        self.score_freq = Some(enabled);
        self
    }

    /// Enable the stopword gate
    pub fn score_stop(mut self, enabled: bool) -> Self {
        self.score_stop = Some(enabled);
        self
    }

    /// Select a weight function by name
    pub fn score_function(mut self, name: impl Into<String>) -> Self {
        self.score_function = Some(name.into());
        self
    }

    /// Layer `other` on top of `self`; fields present in `other` win
    pub fn merged(mut self, other: &Options) -> Self {
        if other.lexicon.is_some() {
            self.lexicon = other.lexicon.clone();
        }
        for category in PosCategory::DISPATCH_ORDER {
            if let Some(enabled) = other.pos_flag(category) {
                *self.pos_slot(category) = Some(enabled);
            }
        }
        if other.negation.is_some() {
            self.negation = other.negation;
            self.negation_window = other.negation_window;
            self.negation_adjustment = other.negation_adjustment;
        }
        self.score_mode = other.score_mode.clone().or(self.score_mode);
        self.score_freq = other.score_freq.or(self.score_freq);
        self.score_stop = other.score_stop.or(self.score_stop);
        self.score_function = other.score_function.clone().or(self.score_function);
        self
    }

    fn pos_flag(&self, category: PosCategory) -> Option<bool> {
        match category {
            PosCategory::Adjective => self.a,
            PosCategory::Verb => self.v,
            PosCategory::Adverb => self.r,
            PosCategory::Noun => self.n,
        }
    }

    fn pos_slot(&mut self, category: PosCategory) -> &mut Option<bool> {
        match category {
            PosCategory::Adjective => &mut self.a,
            PosCategory::Verb => &mut self.v,
            PosCategory::Adverb => &mut self.r,
            PosCategory::Noun => &mut self.n,
        }
    }

    /// Apply the overrides to a classifier.
    ///
    /// The classifier is left untouched when any option is rejected.
    pub fn apply(&self, classifier: &mut DocumentClassifier) -> Result<()> {
        let mut config = classifier.config().clone();

        for category in PosCategory::DISPATCH_ORDER {
            if let Some(enabled) = self.pos_flag(category) {
                config.pos.set(category, enabled);
            }
        }

        if let Some(enabled) = self.negation {
            config.negation = NegationConfig {
                enabled,
                window: self.negation_window.unwrap_or(0),
                adjustment: self.negation_adjustment.unwrap_or(0.0),
            };
        }

        if let Some(name) = &self.score_mode {
            config.scan_mode = ScanMode::from_name(name)
                .ok_or_else(|| ApiError::Config(format!("unknown score mode '{name}'")))?;
        }
        if let Some(enabled) = self.score_freq {
            config.frequency_discount = enabled;
        }
        if let Some(enabled) = self.score_stop {
            config.stopword_gate = enabled;
        }
        if let Some(name) = &self.score_function {
            config.weight = classifier.weights().resolve(name);
        }

        config.validate()?;
        if let Some(lexicon) = &self.lexicon {
            classifier.set_lexicon(Arc::clone(lexicon))?;
        }
        classifier.set_config(config)?;
        log::debug!("applied options: {self:?}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexsent_engine::{ClassifierConfig, MemoryLexicon, PosFlags};

    #[test]
    fn test_empty_options_change_nothing() {
        let mut classifier = DocumentClassifier::new();
        Options::new().apply(&mut classifier).unwrap();
        assert_eq!(classifier.config(), &ClassifierConfig::default());
    }

    #[test]
    fn test_negation_resets_window_and_adjustment() {
        let mut classifier = DocumentClassifier::new();
        let options = Options {
            negation: Some(true),
            ..Options::default()
        };
        options.apply(&mut classifier).unwrap();
        assert!(classifier.config().negation.enabled);
        assert_eq!(classifier.config().negation.window, 0);
        assert_eq!(classifier.config().negation.adjustment, 0.0);
    }

    #[test]
    fn test_window_without_negation_is_ignored() {
        let mut classifier = DocumentClassifier::new();
        let options = Options {
            negation_window: Some(12),
            negation_adjustment: Some(0.5),
            ..Options::default()
        };
        options.apply(&mut classifier).unwrap();
        assert_eq!(classifier.config().negation.window, 5);
        assert_eq!(classifier.config().negation.adjustment, 0.0);
    }

    #[test]
    fn test_pos_and_scoring_overrides() {
        let mut classifier = DocumentClassifier::new();
        Options::new()
            .pos(PosCategory::Verb, false)
            .pos(PosCategory::Noun, true)
            .score_mode(ScanMode::Once)
            .score_freq(true)
            .score_stop(true)
            .score_function("cosine")
            .apply(&mut classifier)
            .unwrap();

        let config = classifier.config();
        assert_eq!(
            config.pos,
            PosFlags {
                adjective: true,
                verb: false,
                adverb: false,
                noun: true,
            }
        );
        assert_eq!(config.scan_mode, ScanMode::Once);
        assert!(config.frequency_discount);
        assert!(config.stopword_gate);
        assert_eq!(config.weight.name(), "cosine");
    }

    #[test]
    fn test_unknown_score_mode_is_rejected() {
        let mut classifier = DocumentClassifier::new();
        let options = Options {
            score_mode: Some("sometimes".to_string()),
            score_freq: Some(true),
            ..Options::default()
        };
        assert!(matches!(
            options.apply(&mut classifier),
            Err(ApiError::Config(_))
        ));
        assert!(!classifier.config().frequency_discount);
    }

    #[test]
    fn test_unloaded_lexicon_is_rejected() {
        let mut classifier = DocumentClassifier::new();
        let options = Options::new().lexicon(Arc::new(MemoryLexicon::new("pending")));
        let err = options.apply(&mut classifier).unwrap_err();
        assert!(err.is_missing_lexicon());
    }

    #[test]
    fn test_merged() {
        let base = Options::new()
            .negation(true, 7, 0.0)
            .score_function("linear")
            .pos(PosCategory::Adverb, true);
        let top = Options {
            negation: Some(false),
            score_stop: Some(true),
            ..Options::default()
        };
        let merged = base.merged(&top);
        assert_eq!(merged.negation, Some(false));
        assert_eq!(merged.negation_window, None);
        assert_eq!(merged.score_function.as_deref(), Some("linear"));
        assert_eq!(merged.score_stop, Some(true));
        assert_eq!(merged.r, Some(true));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml() {
        let options = Options::from_toml_str(
            r#"
            a = true
            v = false
            negation = true
            negation_window = 8
            score_mode = "once"
            score_function = "linear"
            "#,
        )
        .unwrap();
        assert_eq!(options.a, Some(true));
        assert_eq!(options.v, Some(false));
        assert_eq!(options.negation_window, Some(8));
        assert_eq!(options.score_mode.as_deref(), Some("once"));
        assert!(options.lexicon.is_none());

        assert!(Options::from_toml_str("colour = true").is_err());
    }
}
