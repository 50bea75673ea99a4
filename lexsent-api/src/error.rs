//! API error types

use lexsent_engine::EngineError;
use std::string::FromUtf8Error;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Engine error
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Options file could not be parsed
    #[cfg(feature = "serde")]
    #[error("invalid options: {0}")]
    Toml(#[from] toml::de::Error),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether the error was raised before any token was scanned because the
    /// classifier had no usable lexicon
    pub fn is_missing_lexicon(&self) -> bool {
        matches!(
            self,
            ApiError::Engine(EngineError::MissingLexicon | EngineError::LexiconNotLoaded { .. })
        )
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
