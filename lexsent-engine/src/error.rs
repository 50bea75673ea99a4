//! Engine error types

use lexsent_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core algorithm error
    #[error("core algorithm error: {0}")]
    Core(#[from] CoreError),

    /// Classification attempted without a loaded lexicon
    #[error("lexicon has not been assigned, or not loaded")]
    MissingLexicon,

    /// A lexicon was supplied before it finished loading
    #[error("lexicon '{name}' must be loaded before use")]
    LexiconNotLoaded {
        /// Name reported by the lexicon
        name: String,
    },

    /// Untagged input with no tagger configured
    #[error("input is not POS-tagged and no tagger is configured")]
    TaggerUnavailable,

    /// The negation detector broke its length contract
    #[error("negation array has {actual} entries for {expected} tokens")]
    NegationLengthMismatch {
        /// Token count
        expected: usize,
        /// Entries returned by the detector
        actual: usize,
    },

    /// Invalid lexicon source line
    #[error("invalid lexicon entry at line {line}: {reason}")]
    InvalidLexiconEntry {
        /// 1-based line number
        line: usize,
        /// The reason the line was rejected
        reason: String,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_conversion() {
        let err: EngineError = CoreError::UndetectableSeparator.into();
        assert!(matches!(err, EngineError::Core(CoreError::UndetectableSeparator)));
        assert_eq!(
            err.to_string(),
            "core algorithm error: unable to detect tag separator"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.tsv");
        let err: EngineError = io.into();
        assert!(matches!(err, EngineError::IoError(ref msg) if msg.contains("missing.tsv")));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            EngineError::LexiconNotLoaded {
                name: "moby".to_string()
            }
            .to_string(),
            "lexicon 'moby' must be loaded before use"
        );
        assert_eq!(
            EngineError::NegationLengthMismatch {
                expected: 3,
                actual: 2
            }
            .to_string(),
            "negation array has 2 entries for 3 tokens"
        );
    }
}
