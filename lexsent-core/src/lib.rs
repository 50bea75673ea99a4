//! Scoring algorithms for lexicon-based document sentiment classification
//!
//! This crate holds the deterministic pieces of the classifier: detecting how
//! a document's tokens are tagged, parsing `word/TAG` tokens, dispatching tags
//! to part-of-speech categories, positional weight functions, and the
//! per-token contribution rules (negation routing, eligibility, frequency
//! discount).
//!
//! Nothing here performs I/O or owns collaborators such as lexicons or
//! taggers; those live in `lexsent-engine`.
//!
//! # Example
//!
//! ```rust
//! use lexsent_core::{detect_separator, TagSeparator, TaggedToken};
//!
//! let doc = "good/JJ movie/NN";
//! let sep = detect_separator(doc).unwrap();
//! assert_eq!(sep, TagSeparator::Slash);
//!
//! let token = TaggedToken::parse("Good/JJ", sep).unwrap();
//! assert_eq!(token.word, "Good");
//! assert_eq!(token.tag, "JJ");
//! ```

#![warn(missing_docs)]

pub mod contribution;
pub mod error;
pub mod pos;
pub mod score;
pub mod separator;
pub mod token;
pub mod weight;

pub use contribution::{contribution, ContributionRules, TokenPosition};
pub use error::{CoreError, Result};
pub use pos::{PosCategory, PosFlags};
pub use score::{frequency_discount, ScanMode, ScorePair};
pub use separator::{detect_separator, TagSeparator};
pub use token::TaggedToken;
pub use weight::{cosine, identity, linear, WeightFn, BUILTIN_WEIGHTS};
