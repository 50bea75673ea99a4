//! Document classifier
//!
//! Scans a POS-tagged document token by token, looks matched tokens up in
//! the lexicon and accumulates their contributions. All scratch state (the
//! negation array, the occurrence counter, running totals and diagnostics)
//! lives in a per-call [`ScanContext`], so one classifier can serve
//! concurrent callers.

use crate::adjust::{ScanSummary, ScoreAdjuster, Unadjusted};
use crate::classification::{Classification, TokenAnnotation};
use crate::config::ClassifierConfig;
use crate::error::{EngineError, Result};
use crate::lemmatizer::{lemmatize_against, Lemmatizer};
use crate::lexicon::{Lexicon, MemoryLexicon};
use crate::negation::{NegationDetector, WindowNegationDetector};
use crate::stopwords::{StopwordFilter, StopwordList};
use crate::tagger::{Tagger, UnigramTagger};
use crate::weights::{WeightFunction, WeightRegistry};
use lexsent_core::{
    contribution, detect_separator, ContributionRules, PosCategory, ScorePair, TagSeparator,
    TaggedToken, TokenPosition,
};
use log::Level;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Lexicon-based document sentiment classifier
#[derive(Clone)]
pub struct DocumentClassifier {
    config: ClassifierConfig,
    lexicon: Option<Arc<dyn Lexicon>>,
    tagger: Option<Arc<dyn Tagger>>,
    stopwords: Arc<dyn StopwordFilter>,
    negation: Arc<dyn NegationDetector>,
    lemmatizer: Option<Arc<dyn Lemmatizer>>,
    adjuster: Arc<dyn ScoreAdjuster>,
    weights: WeightRegistry,
}

impl Default for DocumentClassifier {
    fn default() -> Self {
        Self {
            config: ClassifierConfig::default(),
            lexicon: None,
            tagger: None,
            stopwords: Arc::new(StopwordList::english()),
            negation: Arc::new(WindowNegationDetector::new()),
            lemmatizer: None,
            adjuster: Arc::new(Unadjusted),
            weights: WeightRegistry::new(),
        }
    }
}

impl std::fmt::Debug for DocumentClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentClassifier")
            .field("config", &self.config)
            .field("lexicon", &self.lexicon.as_ref().map(|l| l.name().to_string()))
            .field("tagger", &self.tagger.is_some())
            .field("weights", &self.weights)
            .finish_non_exhaustive()
    }
}

impl DocumentClassifier {
    /// Classifier with default configuration and no lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a builder
    pub fn builder() -> DocumentClassifierBuilder {
        DocumentClassifierBuilder::default()
    }

    /// Classifier wired to an in-memory lexicon.
    ///
    /// The lexicon's word lists drive the tagger for untagged input.
    pub fn for_lexicon(lexicon: MemoryLexicon) -> Result<Self> {
        Self::builder()
            .tagger(UnigramTagger::from_lexicon(&lexicon))
            .lexicon(lexicon)
            .build()
    }

    /// Current configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Mutable configuration
    pub fn config_mut(&mut self) -> &mut ClassifierConfig {
        &mut self.config
    }

    /// Replace the configuration
    pub fn set_config(&mut self, config: ClassifierConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Assigned lexicon, if any
    pub fn lexicon(&self) -> Option<&Arc<dyn Lexicon>> {
        self.lexicon.as_ref()
    }

    /// Assign a lexicon. It must already be loaded.
    pub fn set_lexicon(&mut self, lexicon: Arc<dyn Lexicon>) -> Result<()> {
        ensure_loaded(lexicon.as_ref())?;
        self.lexicon = Some(lexicon);
        Ok(())
    }

    /// Weight function registry
    pub fn weights(&self) -> &WeightRegistry {
        &self.weights
    }

    /// Mutable weight function registry, for registering custom functions
    pub fn weights_mut(&mut self) -> &mut WeightRegistry {
        &mut self.weights
    }

    /// Select a weight function by name; unknown names select identity
    pub fn set_weight_function(&mut self, name: &str) -> WeightFunction {
        let weight = self.weights.resolve(name);
        self.config.weight = weight;
        weight
    }

    /// Classify a POS-tagged document
    pub fn classify(&self, document: &str) -> Result<Classification> {
        self.classify_document(document, true, false)
    }

    /// Classify a document.
    ///
    /// Untagged input goes through the configured tagger first. With
    /// `verbose`, per-token decisions are logged at debug level instead of
    /// trace.
    pub fn classify_document(
        &self,
        document: &str,
        tagged: bool,
        verbose: bool,
    ) -> Result<Classification> {
        let lexicon = self
            .lexicon
            .as_deref()
            .filter(|lexicon| lexicon.is_loaded())
            .ok_or(EngineError::MissingLexicon)?;

        let tagged_doc: Cow<'_, str> = if tagged {
            Cow::Borrowed(document)
        } else {
            let tagger = self.tagger.as_ref().ok_or(EngineError::TaggerUnavailable)?;
            Cow::Owned(tagger.tag(document))
        };

        let separator = detect_separator(&tagged_doc)?;
        log::debug!("tag separator is '{separator}'");

        let tokens: Vec<&str> = tagged_doc.split_whitespace().collect();
        let negation = self.negation_array(&tokens)?;
        let mut scan = ScanContext::new(lexicon, self.config.contribution_rules(), negation, verbose);

        for (idx, raw) in tokens.iter().enumerate() {
            self.scan_token(&mut scan, raw, separator, idx + 1, tokens.len());
        }

        let summary = ScanSummary {
            token_count: tokens.len(),
            tokens_found: scan.tokens_found,
            tokens_negated: scan.tokens_negated,
        };
        let scores = self.adjuster.adjust(scan.totals, &summary);
        log::debug!(
            "classified {} tokens ({} matched): pos={:.4} neg={:.4}",
            summary.token_count,
            summary.tokens_found,
            scores.positive,
            scores.negative
        );

        Ok(scan.finish(document, separator, scores))
    }

    fn negation_array(&self, tokens: &[&str]) -> Result<Vec<bool>> {
        if !self.config.negation.enabled {
            return Ok(vec![false; tokens.len()]);
        }
        let flags = self
            .negation
            .negation_array(tokens, self.config.negation.window);
        if flags.len() != tokens.len() {
            return Err(EngineError::NegationLengthMismatch {
                expected: tokens.len(),
                actual: flags.len(),
            });
        }
        Ok(flags)
    }

    /// Score one token. `position` is 1-based.
    fn scan_token(
        &self,
        scan: &mut ScanContext<'_>,
        raw: &str,
        separator: TagSeparator,
        position: usize,
        doc_len: usize,
    ) {
        let token = match TaggedToken::parse(raw, separator) {
            Ok(token) => token,
            Err(err) => {
                log::trace!("skipping token {position}: {err}");
                scan.annotations
                    .push(TokenAnnotation::Passthrough(raw.to_string()));
                return;
            }
        };
        let word = token.folded_word();

        let Some(category) = self.config.pos.dispatch(&token.tag).last() else {
            scan.annotations
                .push(TokenAnnotation::Passthrough(raw.to_string()));
            return;
        };
        let scores = self.lookup(scan.lexicon, category, &word);

        let in_scope = scan.negation[position - 1];
        let negated = self.config.negation.enabled.then_some(in_scope);
        let token_position = TokenPosition {
            index: position,
            doc_len,
            negated,
            seen: scan.found.contains_key(raw),
        };
        let value = contribution(
            &scan.rules,
            token_position,
            scores,
            || self.stopwords.is_stop(&word),
            || scan.lexicon.frequency(&word),
        );

        log::log!(
            scan.detail_level,
            "{word} ({category}, {scores:?}) at {position}/{doc_len} contributes ({:.4}, {:.4})",
            value.positive,
            value.negative
        );

        scan.record(raw, negated, in_scope, value);
    }

    fn lookup(&self, lexicon: &dyn Lexicon, category: PosCategory, word: &str) -> ScorePair {
        match category {
            PosCategory::Verb => {
                let base = match &self.lemmatizer {
                    Some(lemmatizer) => lemmatizer.lemmatize_verb(word),
                    None => lemmatize_against(word, |candidate| {
                        lexicon.has_entry(PosCategory::Verb, candidate)
                    }),
                };
                lexicon.verb(&base)
            }
            _ => lexicon.lookup(category, word),
        }
    }
}

fn ensure_loaded(lexicon: &dyn Lexicon) -> Result<()> {
    if lexicon.is_loaded() {
        Ok(())
    } else {
        Err(EngineError::LexiconNotLoaded {
            name: lexicon.name().to_string(),
        })
    }
}

/// Scratch state for one classification
struct ScanContext<'a> {
    lexicon: &'a dyn Lexicon,
    rules: ContributionRules,
    negation: Vec<bool>,
    detail_level: Level,
    totals: ScorePair,
    found: BTreeMap<String, usize>,
    annotations: Vec<TokenAnnotation>,
    unscored: Vec<String>,
    tokens_found: usize,
    tokens_negated: usize,
}

impl<'a> ScanContext<'a> {
    fn new(
        lexicon: &'a dyn Lexicon,
        rules: ContributionRules,
        negation: Vec<bool>,
        verbose: bool,
    ) -> Self {
        Self {
            lexicon,
            rules,
            negation,
            detail_level: if verbose { Level::Debug } else { Level::Trace },
            totals: ScorePair::ZERO,
            found: BTreeMap::new(),
            annotations: Vec::new(),
            unscored: Vec::new(),
            tokens_found: 0,
            tokens_negated: 0,
        }
    }

    fn record(&mut self, raw: &str, negated: Option<bool>, in_scope: bool, value: ScorePair) {
        self.totals += value;
        *self.found.entry(raw.to_string()).or_insert(0) += 1;
        if value.is_zero() {
            self.unscored.push(raw.to_string());
        }
        self.tokens_found += 1;
        if in_scope {
            self.tokens_negated += 1;
        }
        self.annotations.push(TokenAnnotation::Scored {
            token: raw.to_string(),
            negated,
            contribution: value,
        });
    }

    fn finish(self, document: &str, separator: TagSeparator, scores: ScorePair) -> Classification {
        Classification {
            document: document.to_string(),
            separator,
            annotations: self.annotations,
            scores,
            raw_totals: self.totals,
            tokens_found: self.tokens_found,
            tokens_negated: self.tokens_negated,
            negation_span: self.negation.iter().filter(|&&flag| flag).count(),
            found: self.found,
            unscored: self.unscored,
        }
    }
}

/// Builder for DocumentClassifier
#[derive(Default)]
pub struct DocumentClassifierBuilder {
    classifier: DocumentClassifier,
    pending_lexicon: Option<Arc<dyn Lexicon>>,
    weight_name: Option<String>,
}

impl DocumentClassifierBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration
    pub fn config(mut self, config: ClassifierConfig) -> Self {
        self.classifier.config = config;
        self
    }

    /// Set the lexicon (checked for loading at build time)
    pub fn lexicon(mut self, lexicon: impl Lexicon + 'static) -> Self {
        self.pending_lexicon = Some(Arc::new(lexicon));
        self
    }

    /// Set a shared lexicon (checked for loading at build time)
    pub fn shared_lexicon(mut self, lexicon: Arc<dyn Lexicon>) -> Self {
        self.pending_lexicon = Some(lexicon);
        self
    }

    /// Set the tagger used for untagged input
    pub fn tagger(mut self, tagger: impl Tagger + 'static) -> Self {
        self.classifier.tagger = Some(Arc::new(tagger));
        self
    }

    /// Set the stopword filter
    pub fn stopwords(mut self, stopwords: impl StopwordFilter + 'static) -> Self {
        self.classifier.stopwords = Arc::new(stopwords);
        self
    }

    /// Set the negation detector
    pub fn negation_detector(mut self, detector: impl NegationDetector + 'static) -> Self {
        self.classifier.negation = Arc::new(detector);
        self
    }

    /// Set the verb lemmatizer, replacing the lexicon-checked default.
    /// [`IdentityLemmatizer`](crate::IdentityLemmatizer) turns lemmatization off.
    pub fn lemmatizer(mut self, lemmatizer: impl Lemmatizer + 'static) -> Self {
        self.classifier.lemmatizer = Some(Arc::new(lemmatizer));
        self
    }

    /// Set the final score adjuster
    pub fn adjuster(mut self, adjuster: impl ScoreAdjuster + 'static) -> Self {
        self.classifier.adjuster = Arc::new(adjuster);
        self
    }

    /// Register a custom weight function
    pub fn register_weight(mut self, name: &'static str, func: lexsent_core::WeightFn) -> Self {
        self.classifier.weights.register(name, func);
        self
    }

    /// Select the weight function by name, resolved at build time
    pub fn weight_function(mut self, name: impl Into<String>) -> Self {
        self.weight_name = Some(name.into());
        self
    }

    /// Build the classifier
    pub fn build(mut self) -> Result<DocumentClassifier> {
        if let Some(lexicon) = self.pending_lexicon {
            self.classifier.set_lexicon(lexicon)?;
        }
        if let Some(name) = self.weight_name {
            self.classifier.set_weight_function(&name);
        }
        self.classifier.config.validate()?;
        Ok(self.classifier)
    }
}
