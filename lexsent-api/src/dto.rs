//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use lexsent_engine::{Classification, TokenAnnotation};
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Document source
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the document text
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// Per-token diagnostic for serialization
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenDTO {
    /// Raw `word<SEP>TAG` token
    pub token: String,
    /// Whether the token matched an enabled category
    pub scored: bool,
    /// Negation flag, absent when negation handling is off or the token was
    /// not scored
    pub negated: Option<bool>,
    /// Positive contribution
    pub positive: f64,
    /// Negative contribution
    pub negative: f64,
}

impl From<&TokenAnnotation> for TokenDTO {
    fn from(annotation: &TokenAnnotation) -> Self {
        match annotation {
            TokenAnnotation::Scored {
                token,
                negated,
                contribution,
            } => Self {
                token: token.clone(),
                scored: true,
                negated: *negated,
                positive: contribution.positive,
                negative: contribution.negative,
            },
            TokenAnnotation::Passthrough(token) => Self {
                token: token.clone(),
                scored: false,
                negated: None,
                positive: 0.0,
                negative: 0.0,
            },
        }
    }
}

/// Read-only view of the last classification
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultData {
    /// Original document
    pub document: String,
    /// Annotated document
    pub annotated: String,
    /// Tag separator used
    pub separator: char,
    /// Positive total
    pub positive: f64,
    /// Negative total
    pub negative: f64,
    /// Tokens that matched an enabled category
    pub tokens_found: usize,
    /// Matched tokens inside a negation scope
    pub tokens_negated: usize,
    /// Positions marked by the negation detector
    pub negation_span: usize,
    /// Occurrences per matched token
    pub found: BTreeMap<String, usize>,
    /// Matched tokens that contributed nothing
    pub unscored: Vec<String>,
    /// Per-token diagnostics
    pub tokens: Vec<TokenDTO>,
}

impl From<&Classification> for ResultData {
    fn from(result: &Classification) -> Self {
        Self {
            document: result.document.clone(),
            annotated: result.annotated_document(),
            separator: result.separator.as_char(),
            positive: result.positive(),
            negative: result.negative(),
            tokens_found: result.tokens_found,
            tokens_negated: result.tokens_negated,
            negation_span: result.negation_span,
            found: result.found.clone(),
            unscored: result.unscored.clone(),
            tokens: result.annotations.iter().map(TokenDTO::from).collect(),
        }
    }
}

impl ResultData {
    /// `(positive, negative)`
    pub fn scores(&self) -> (f64, f64) {
        (self.positive, self.negative)
    }

    /// Serialize to JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
