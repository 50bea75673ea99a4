//! Named classifier presets
//!
//! Every preset enables negation (window 5), the stopword gate and frequency
//! discounting. They differ in the categories scored, the scan mode and the
//! weight function.

use crate::config::{ClassifierConfig, NegationConfig, DEFAULT_NEGATION_WINDOW};
use crate::weights::WeightRegistry;
use lexsent_core::{PosFlags, ScanMode};
use std::fmt;

/// Preconfigured classifier variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Adjectives and verbs, every occurrence
    AdjVerbAll,
    /// Adjectives, every occurrence
    AdjAll,
    /// Adjectives, first occurrence only
    AdjOnce,
    /// Adjectives and verbs, first occurrence only
    AdjVerbOnce,
    /// Adjectives and verbs, every occurrence, linear weighting
    AdjVerbLinearAll,
    /// Adjectives, every occurrence, linear weighting
    AdjLinearAll,
    /// Adjectives, every occurrence, cosine weighting
    AdjCosineAll,
    /// Adjectives and verbs, every occurrence, cosine weighting
    AdjVerbCosineAll,
}

impl Preset {
    /// All presets
    pub const ALL: [Preset; 8] = [
        Preset::AdjVerbAll,
        Preset::AdjAll,
        Preset::AdjOnce,
        Preset::AdjVerbOnce,
        Preset::AdjVerbLinearAll,
        Preset::AdjLinearAll,
        Preset::AdjCosineAll,
        Preset::AdjVerbCosineAll,
    ];

    /// Preset name
    pub fn name(&self) -> &'static str {
        match self {
            Preset::AdjVerbAll => "av-all",
            Preset::AdjAll => "a-all",
            Preset::AdjOnce => "a-once",
            Preset::AdjVerbOnce => "av-once",
            Preset::AdjVerbLinearAll => "av-linear-all",
            Preset::AdjLinearAll => "a-linear-all",
            Preset::AdjCosineAll => "a-cosine-all",
            Preset::AdjVerbCosineAll => "av-cosine-all",
        }
    }

    /// Look up a preset by name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }

    fn pos(&self) -> PosFlags {
        match self {
            Preset::AdjAll | Preset::AdjOnce | Preset::AdjLinearAll | Preset::AdjCosineAll => {
                PosFlags::ADJECTIVES
            }
            _ => PosFlags::ADJECTIVES_VERBS,
        }
    }

    fn scan_mode(&self) -> ScanMode {
        match self {
            Preset::AdjOnce | Preset::AdjVerbOnce => ScanMode::Once,
            _ => ScanMode::All,
        }
    }

    fn weight_name(&self) -> &'static str {
        match self {
            Preset::AdjVerbLinearAll | Preset::AdjLinearAll => "linear",
            Preset::AdjCosineAll | Preset::AdjVerbCosineAll => "cosine",
            _ => "noop",
        }
    }

    /// Configuration for this preset
    pub fn config(&self) -> ClassifierConfig {
        ClassifierConfig {
            pos: self.pos(),
            negation: NegationConfig {
                enabled: true,
                window: DEFAULT_NEGATION_WINDOW,
                adjustment: 0.0,
            },
            scan_mode: self.scan_mode(),
            frequency_discount: true,
            stopword_gate: true,
            weight: WeightRegistry::new().resolve(self.weight_name()),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
