//! Document classification engine for lexicon-based sentiment scoring
//!
//! This crate wires the scoring rules of `lexsent-core` to the collaborators
//! a classification needs: a sentiment lexicon, a negation detector, a
//! stopword filter, a verb lemmatizer and, for untagged input, a tagger.

#![warn(missing_docs)]

pub mod adjust;
pub mod classification;
pub mod classifier;
pub mod config;
pub mod error;
pub mod lemmatizer;
pub mod lexicon;
pub mod negation;
pub mod presets;
pub mod stopwords;
pub mod tagger;
pub mod weights;

// Re-export key types
pub use adjust::{LengthNormalized, ScanSummary, ScoreAdjuster, Unadjusted};
pub use classification::{Classification, TokenAnnotation};
pub use classifier::{DocumentClassifier, DocumentClassifierBuilder};
pub use config::{ClassifierConfig, ClassifierConfigBuilder, NegationConfig};
pub use error::{EngineError, Result};
pub use lemmatizer::{lemmatize_against, IdentityLemmatizer, Lemmatizer, SuffixLemmatizer};
pub use lexicon::{Lexicon, MemoryLexicon, MemoryLexiconBuilder};
pub use negation::{NegationDetector, NoNegation, WindowNegationDetector};
pub use presets::Preset;
pub use stopwords::{StopwordFilter, StopwordList};
pub use tagger::{Tagger, UnigramTagger};
pub use weights::{WeightFunction, WeightRegistry};

// Re-export from core for convenience
pub use lexsent_core::{PosCategory, PosFlags, ScanMode, ScorePair, TagSeparator};
