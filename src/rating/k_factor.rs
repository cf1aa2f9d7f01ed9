//! K-factor policies: how far a single result moves a rating

/// Maps a player's current rating to the sensitivity of the next update
#[cfg_attr(test, mockall::automock)]
pub trait KFactorPolicy: Send + Sync {
    fn value_for_rating(&self, rating: f64) -> f64;
}

/// Same K for every rating
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantKFactor(f64);

impl ConstantKFactor {
    /// K used by the Gaussian Elo calculator
    pub const STABLE: f64 = 24.0;

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn stable() -> Self {
        Self(Self::STABLE)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for ConstantKFactor {
    fn default() -> Self {
        Self::stable()
    }
}

impl KFactorPolicy for ConstantKFactor {
    fn value_for_rating(&self, _rating: f64) -> f64 {
        self.0
    }
}

/// FIDE-style tiers: a higher K while provisional, lower K for strong players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FideKFactor {
    provisional: bool,
}

impl FideKFactor {
    pub const PROVISIONAL: f64 = 25.0;
    pub const BELOW_MASTER: f64 = 15.0;
    pub const MASTER: f64 = 10.0;
    pub const MASTER_THRESHOLD: f64 = 2400.0;

    pub fn new() -> Self {
        Self { provisional: false }
    }

    /// For players with too few rated games
    pub fn provisional() -> Self {
        Self { provisional: true }
    }

    pub fn is_provisional(&self) -> bool {
        self.provisional
    }
}

impl KFactorPolicy for FideKFactor {
    fn value_for_rating(&self, rating: f64) -> f64 {
        if self.provisional {
            Self::PROVISIONAL
        } else if rating < Self::MASTER_THRESHOLD {
            Self::BELOW_MASTER
        } else {
            Self::MASTER
        }
    }
}
