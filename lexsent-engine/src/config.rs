//! Classifier configuration

use crate::error::{EngineError, Result};
use crate::weights::WeightFunction;
use lexsent_core::{ContributionRules, PosFlags, ScanMode};

/// Default negation scope, in tokens
pub const DEFAULT_NEGATION_WINDOW: usize = 5;

/// Largest accepted negation window
pub const MAX_NEGATION_WINDOW: usize = 1000;

/// Negation handling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegationConfig {
    /// Route negated tokens' polarity to the opposite total
    pub enabled: bool,
    /// Scope passed to the negation detector
    pub window: usize,
    /// Adjustment for negated terms. Carried for derived algorithms; the
    /// base scan does not read it.
    pub adjustment: f64,
}

impl Default for NegationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            window: DEFAULT_NEGATION_WINDOW,
            adjustment: 0.0,
        }
    }
}

/// Run-time options of the document classifier
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    /// Categories taking part in scoring
    pub pos: PosFlags,
    /// Negation handling
    pub negation: NegationConfig,
    /// Duplicate-occurrence policy
    pub scan_mode: ScanMode,
    /// Discount frequent words
    pub frequency_discount: bool,
    /// Discard stopwords
    pub stopword_gate: bool,
    /// Positional weighting
    pub weight: WeightFunction,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            pos: PosFlags::default(),
            negation: NegationConfig::default(),
            scan_mode: ScanMode::All,
            frequency_discount: false,
            stopword_gate: false,
            weight: WeightFunction::IDENTITY,
        }
    }
}

impl ClassifierConfig {
    /// Create a builder starting from the defaults
    pub fn builder() -> ClassifierConfigBuilder {
        ClassifierConfigBuilder::default()
    }

    /// Contribution rules for one scan
    pub fn contribution_rules(&self) -> ContributionRules {
        ContributionRules {
            scan_mode: self.scan_mode,
            stopword_gate: self.stopword_gate,
            frequency_discount: self.frequency_discount,
            weight: self.weight.func(),
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.negation.window > MAX_NEGATION_WINDOW {
            return Err(EngineError::ConfigError(format!(
                "negation window {} exceeds {}",
                self.negation.window, MAX_NEGATION_WINDOW
            )));
        }
        if !self.negation.adjustment.is_finite() {
            return Err(EngineError::ConfigError(
                "negation adjustment must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for ClassifierConfig
#[derive(Debug, Default)]
pub struct ClassifierConfigBuilder {
    config: ClassifierConfig,
}

impl ClassifierConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the part-of-speech flags
    pub fn pos(mut self, pos: PosFlags) -> Self {
        self.config.pos = pos;
        self
    }

    /// Enable or disable negation with the given window and adjustment
    pub fn negation(mut self, enabled: bool, window: usize, adjustment: f64) -> Self {
        self.config.negation = NegationConfig {
            enabled,
            window,
            adjustment,
        };
        self
    }

    /// Set the scan mode
    pub fn scan_mode(mut self, mode: ScanMode) -> Self {
        self.config.scan_mode = mode;
        self
    }

    /// Enable frequency discounting
    pub fn frequency_discount(mut self, enabled: bool) -> Self {
        self.config.frequency_discount = enabled;
        self
    }

    /// Enable the stopword gate
    pub fn stopword_gate(mut self, enabled: bool) -> Self {
        self.config.stopword_gate = enabled;
        self
    }

    /// Set the weight function
    pub fn weight(mut self, weight: WeightFunction) -> Self {
        self.config.weight = weight;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ClassifierConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClassifierConfig::default();
        assert_eq!(config.pos, PosFlags::ADJECTIVES_VERBS);
        assert!(config.negation.enabled);
        assert_eq!(config.negation.window, 5);
        assert_eq!(config.negation.adjustment, 0.0);
        assert_eq!(config.scan_mode, ScanMode::All);
        assert!(!config.frequency_discount);
        assert!(!config.stopword_gate);
        assert_eq!(config.weight.name(), "identity");
    }

    #[test]
    fn test_builder() {
        let config = ClassifierConfig::builder()
            .pos(PosFlags::ADJECTIVES)
            .negation(true, 15, 0.5)
            .scan_mode(ScanMode::Once)
            .frequency_discount(true)
            .stopword_gate(true)
            .build()
            .unwrap();

        assert_eq!(config.pos, PosFlags::ADJECTIVES);
        assert_eq!(config.negation.window, 15);
        assert_eq!(config.negation.adjustment, 0.5);

        let rules = config.contribution_rules();
        assert_eq!(rules.scan_mode, ScanMode::Once);
        assert!(rules.frequency_discount);
        assert!(rules.stopword_gate);
    }

    #[test]
    fn test_validation() {
        let result = ClassifierConfig::builder()
            .negation(true, MAX_NEGATION_WINDOW + 1, 0.0)
            .build();
        assert!(matches!(result, Err(EngineError::ConfigError(_))));

        let result = ClassifierConfig::builder()
            .negation(true, 5, f64::NAN)
            .build();
        assert!(result.is_err());
    }
}
