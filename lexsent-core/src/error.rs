//! Core error types (deterministic only)

use core::fmt;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// No candidate separator splits every sampled token
    UndetectableSeparator,
    /// A token could not be split into a non-empty word and tag
    MalformedToken {
        /// The raw token text
        token: String,
    },
    /// A weight function name is not registered
    UnknownWeightFunction {
        /// The requested name
        name: String,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::UndetectableSeparator => write!(f, "unable to detect tag separator"),
            CoreError::MalformedToken { token } => {
                write!(f, "token '{token}' has no word or no tag")
            }
            CoreError::UnknownWeightFunction { name } => {
                write!(f, "unknown weight function '{name}'")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CoreError::UndetectableSeparator.to_string(),
            "unable to detect tag separator"
        );
        assert_eq!(
            CoreError::MalformedToken {
                token: "good/".to_string()
            }
            .to_string(),
            "token 'good/' has no word or no tag"
        );
        assert_eq!(
            CoreError::UnknownWeightFunction {
                name: "sine".to_string()
            }
            .to_string(),
            "unknown weight function 'sine'"
        );
    }
}
