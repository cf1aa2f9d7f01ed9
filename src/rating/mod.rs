//! Rating calculators
//!
//! This module provides the calculator trait with its shared shape
//! validation, the two-player Elo engine, and the pluggable win-probability
//! and K-factor strategies it is composed from.

pub mod calculator;
pub mod elo;
pub mod k_factor;
pub mod probability;
pub mod rank_sorter;

// Re-export commonly used types
pub use calculator::{validate_team_count_and_players_count_per_team, SkillCalculator};
pub use elo::{GaussianEloCalculator, TwoPlayerEloCalculator};
pub use k_factor::{ConstantKFactor, FideKFactor, KFactorPolicy};
pub use probability::{GaussianWinProbability, ProbabilityModel};
