//! Common types shared by every skill calculator

use crate::error::{Result, SkillError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::BitOr;

/// Multiplier applied to the spread when computing a conservative rating
pub const CONSERVATIVE_STANDARD_DEVIATION_MULTIPLIER: f64 = 3.0;

/// Bound for anything usable as a player identifier.
///
/// Only equality and hashing are required; the identifier is otherwise opaque.
pub trait PlayerKey: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> PlayerKey for T {}

/// A team maps each of its players to their current rating
pub type Team<P> = HashMap<P, Rating>;

/// A competitor's current skill estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Estimated skill
    pub mean: f64,
    /// Uncertainty around the mean; zero for plain Elo ratings
    pub standard_deviation: f64,
}

impl Rating {
    pub fn new(mean: f64, standard_deviation: f64) -> Self {
        Self {
            mean,
            standard_deviation,
        }
    }

    /// Elo ratings carry no spread
    pub fn elo(mean: f64) -> Self {
        Self::new(mean, 0.0)
    }

    /// Mean minus three standard deviations
    pub fn conservative_rating(&self) -> f64 {
        self.mean - CONSERVATIVE_STANDARD_DEVIATION_MULTIPLIER * self.standard_deviation
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mean={:.4}, sigma={:.4}", self.mean, self.standard_deviation)
    }
}

/// Outcome of one player measured against one opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairwiseComparison {
    Win,
    Draw,
    Lose,
}

impl PairwiseComparison {
    /// Actual score used by the Elo update
    pub fn score(self) -> f64 {
        match self {
            PairwiseComparison::Win => 1.0,
            PairwiseComparison::Draw => 0.5,
            PairwiseComparison::Lose => 0.0,
        }
    }

    /// The same match seen from the opponent's side
    pub fn reversed(self) -> Self {
        match self {
            PairwiseComparison::Win => PairwiseComparison::Lose,
            PairwiseComparison::Draw => PairwiseComparison::Draw,
            PairwiseComparison::Lose => PairwiseComparison::Win,
        }
    }
}

/// Raw signed encoding: 1 = Win, 0 = Draw, -1 = Lose.
impl TryFrom<i8> for PairwiseComparison {
    type Error = SkillError;

    fn try_from(value: i8) -> Result<Self> {
        match value {
            1 => Ok(PairwiseComparison::Win),
            0 => Ok(PairwiseComparison::Draw),
            -1 => Ok(PairwiseComparison::Lose),
            other => Err(SkillError::Unsupported {
                reason: format!("no score defined for comparison value {}", other),
            }),
        }
    }
}

impl fmt::Display for PairwiseComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairwiseComparison::Win => write!(f, "Win"),
            PairwiseComparison::Draw => write!(f, "Draw"),
            PairwiseComparison::Lose => write!(f, "Lose"),
        }
    }
}

/// Optional capabilities a calculator may declare
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SupportedOptions(u8);

impl SupportedOptions {
    pub const NONE: SupportedOptions = SupportedOptions(0x00);
    /// Players may have taken part in only a fraction of the match
    pub const PARTIAL_PLAY: SupportedOptions = SupportedOptions(0x01);
    /// Only a subset of the players gets updated
    pub const PARTIAL_UPDATE: SupportedOptions = SupportedOptions(0x02);

    /// True if every flag in `other` is also set here
    pub fn contains(self, other: SupportedOptions) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for SupportedOptions {
    type Output = SupportedOptions;

    fn bitor(self, rhs: SupportedOptions) -> SupportedOptions {
        SupportedOptions(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_constructors() {
        let rating = Rating::new(25.0, 25.0 / 3.0);
        assert_eq!(rating.mean, 25.0);
        assert!((rating.conservative_rating() - 0.0).abs() < 1e-12);

        let elo = Rating::elo(1500.0);
        assert_eq!(elo.standard_deviation, 0.0);
        assert_eq!(elo.conservative_rating(), 1500.0);
    }

    #[test]
    fn test_rating_serde() {
        let rating = Rating::new(1200.0, 0.0);
        let json = serde_json::to_string(&rating).unwrap();
        let back: Rating = serde_json::from_str(&json).unwrap();
        assert_eq!(rating, back);
    }

    #[test]
    fn test_comparison_scores() {
        assert_eq!(PairwiseComparison::Win.score(), 1.0);
        assert_eq!(PairwiseComparison::Draw.score(), 0.5);
        assert_eq!(PairwiseComparison::Lose.score(), 0.0);
        assert_eq!(PairwiseComparison::Win.reversed(), PairwiseComparison::Lose);
        assert_eq!(PairwiseComparison::Draw.reversed(), PairwiseComparison::Draw);
    }

    #[test]
    fn test_comparison_from_raw_value() {
        assert_eq!(
            PairwiseComparison::try_from(1i8).unwrap(),
            PairwiseComparison::Win
        );
        assert_eq!(
            PairwiseComparison::try_from(0i8).unwrap(),
            PairwiseComparison::Draw
        );
        assert_eq!(
            PairwiseComparison::try_from(-1i8).unwrap(),
            PairwiseComparison::Lose
        );

        for raw in [2i8, -2, i8::MAX, i8::MIN] {
            assert!(matches!(
                PairwiseComparison::try_from(raw),
                Err(SkillError::Unsupported { .. })
            ));
        }
    }

    #[test]
    fn test_supported_options() {
        let none = SupportedOptions::NONE;
        assert!(none.contains(SupportedOptions::NONE));
        assert!(!none.contains(SupportedOptions::PARTIAL_PLAY));

        let both = SupportedOptions::PARTIAL_PLAY | SupportedOptions::PARTIAL_UPDATE;
        assert!(both.contains(SupportedOptions::PARTIAL_PLAY));
        assert!(both.contains(SupportedOptions::PARTIAL_UPDATE));
        assert_eq!(both.bits(), 0x03);
    }
}
