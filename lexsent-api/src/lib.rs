//! Public API for lexsent document sentiment classification
//!
//! This crate provides a stable interface over the classification engine:
//! a stateful [`DocSentiScore`] that keeps the last result, sparse
//! [`Options`] overrides and serializable result DTOs.
//!
//! ```
//! use lexsent_api::{DocSentiScore, MemoryLexicon, Options};
//!
//! let lexicon = MemoryLexicon::builder("demo")
//!     .adjective("good", 1.0, 0.0)
//!     .build()
//!     .unwrap();
//!
//! let mut scorer = DocSentiScore::with_lexicon(lexicon).unwrap();
//! let scores = scorer
//!     .classify_document("good/JJ good/JJ", true, false, &Options::default())
//!     .unwrap();
//! assert_eq!(scores, (2.0, 0.0));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use error::Result;
use lexsent_engine::{Classification, DocumentClassifier};
use std::sync::Arc;

// Re-export key types
pub use config::Options;
pub use dto::{Input, ResultData, TokenDTO};
pub use error::ApiError;
pub use lexsent_engine::{
    ClassifierConfig, Lexicon, MemoryLexicon, PosCategory, Preset, ScanMode, StopwordList,
};

/// Document sentiment scorer
///
/// Wraps a [`DocumentClassifier`] and keeps the result of the most recent
/// classification. Each call replaces the stored result wholesale; a failed
/// call clears it.
#[derive(Debug, Default)]
pub struct DocSentiScore {
    classifier: DocumentClassifier,
    last: Option<Classification>,
}

impl DocSentiScore {
    /// Scorer with default configuration and no lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer for an in-memory lexicon, with a matching tagger for
    /// untagged input
    pub fn with_lexicon(lexicon: MemoryLexicon) -> Result<Self> {
        Ok(Self::with_classifier(DocumentClassifier::for_lexicon(
            lexicon,
        )?))
    }

    /// Scorer for a preset configuration and a shared lexicon
    pub fn with_preset(preset: Preset, lexicon: Arc<dyn Lexicon>) -> Result<Self> {
        let classifier = DocumentClassifier::builder()
            .config(preset.config())
            .shared_lexicon(lexicon)
            .build()?;
        Ok(Self::with_classifier(classifier))
    }

    /// Wrap a configured classifier
    pub fn with_classifier(classifier: DocumentClassifier) -> Self {
        Self {
            classifier,
            last: None,
        }
    }

    /// The underlying classifier
    pub fn classifier(&self) -> &DocumentClassifier {
        &self.classifier
    }

    /// Mutable access to the underlying classifier
    pub fn classifier_mut(&mut self) -> &mut DocumentClassifier {
        &mut self.classifier
    }

    /// Apply option overrides; fails if a referenced lexicon is not loaded
    pub fn set_parameters(&mut self, options: &Options) -> Result<()> {
        options.apply(&mut self.classifier)
    }

    /// Assign a loaded lexicon
    pub fn set_lexicon(&mut self, lexicon: Arc<dyn Lexicon>) -> Result<()> {
        self.classifier.set_lexicon(lexicon)?;
        Ok(())
    }

    /// Classify a document and return `(positive, negative)`.
    ///
    /// `options` are applied first and persist for later calls. Untagged
    /// documents go through the classifier's tagger.
    pub fn classify_document(
        &mut self,
        document: &str,
        tagged: bool,
        verbose: bool,
        options: &Options,
    ) -> Result<(f64, f64)> {
        self.last = None;
        self.set_parameters(options)?;

        let result = self
            .classifier
            .classify_document(document, tagged, verbose)?;
        let scores = result.pair();
        self.last = Some(result);
        Ok(scores)
    }

    /// Read a document from `input` and classify it
    pub fn classify_input(
        &mut self,
        input: Input,
        tagged: bool,
        verbose: bool,
        options: &Options,
    ) -> Result<(f64, f64)> {
        let text = input.read_text()?;
        self.classify_document(&text, tagged, verbose, options)
    }

    /// Full result of the last successful classification
    pub fn result(&self) -> Option<&Classification> {
        self.last.as_ref()
    }

    /// Serializable view of the last successful classification
    pub fn result_data(&self) -> Option<ResultData> {
        self.last.as_ref().map(ResultData::from)
    }
}

// Convenience functions

/// Classify a tagged document with a preset
pub fn classify_with_preset(
    document: &str,
    lexicon: Arc<dyn Lexicon>,
    preset: Preset,
) -> Result<ResultData> {
    let classifier = DocumentClassifier::builder()
        .config(preset.config())
        .shared_lexicon(lexicon)
        .build()?;
    let result = classifier.classify(document)?;
    Ok(ResultData::from(&result))
}
