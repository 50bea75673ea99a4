//! Score pairs, scan modes and frequency discounting

use core::ops::{Add, AddAssign};

/// A `(positive, negative)` pair, used both for lexicon lookups and for
/// per-token contributions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScorePair {
    /// Positive polarity
    pub positive: f64,
    /// Negative polarity
    pub negative: f64,
}

impl ScorePair {
    /// The `(0, 0)` pair
    pub const ZERO: ScorePair = ScorePair {
        positive: 0.0,
        negative: 0.0,
    };

    /// Create a new pair
    pub const fn new(positive: f64, negative: f64) -> Self {
        Self { positive, negative }
    }

    /// Whether both sides are exactly zero
    pub fn is_zero(&self) -> bool {
        self.positive == 0.0 && self.negative == 0.0
    }

    /// Read the pair through the negation flag at this position.
    ///
    /// `None` means negation handling is off and the pair is used as is.
    /// `Some(true)` swaps the slots so a negated token contributes its
    /// negative polarity to the positive total and vice versa.
    pub fn routed(self, negated: Option<bool>) -> Self {
        match negated {
            Some(true) => Self::new(self.negative, self.positive),
            Some(false) | None => self,
        }
    }

    /// Apply `f` to both sides
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.positive), f(self.negative))
    }
}

impl From<(f64, f64)> for ScorePair {
    fn from((positive, negative): (f64, f64)) -> Self {
        Self::new(positive, negative)
    }
}

impl From<ScorePair> for (f64, f64) {
    fn from(pair: ScorePair) -> Self {
        (pair.positive, pair.negative)
    }
}

impl Add for ScorePair {
    type Output = ScorePair;

    fn add(self, rhs: ScorePair) -> ScorePair {
        ScorePair::new(self.positive + rhs.positive, self.negative + rhs.negative)
    }
}

impl AddAssign for ScorePair {
    fn add_assign(&mut self, rhs: ScorePair) {
        self.positive += rhs.positive;
        self.negative += rhs.negative;
    }
}

/// How repeated occurrences of the same `word+tag` token are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Every occurrence contributes
    #[default]
    All,
    /// Only the first occurrence of each `word+tag` contributes
    Once,
}

impl ScanMode {
    /// Option name (`all` / `once`)
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanMode::All => "all",
            ScanMode::Once => "once",
        }
    }

    /// Parse an option name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "all" => Some(ScanMode::All),
            "once" => Some(ScanMode::Once),
            _ => None,
        }
    }
}

/// Multiplier applied to a weighted score when frequency discounting is on.
///
/// `1 - max(sqrt(frequency), 0.25)`: at most 0.75 for rare or unknown words,
/// falling to 0 as frequency approaches 1.
pub fn frequency_discount(frequency: f64) -> f64 {
    const FLOOR: f64 = 0.25;
    1.0 - frequency.sqrt().max(FLOOR)
}
