//! Matchmaker Skills - Elo-style rating updates and match quality
//!
//! This crate provides a two-player Elo calculator built from a pluggable
//! win-probability model and K-factor policy, the Gaussian model that ships
//! with it, and a round-robin simulator that exercises the engine.

pub mod config;
pub mod error;
pub mod numerics;
pub mod rating;
pub mod simulation;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Result, SkillError};
pub use types::*;

// Re-export key components
pub use config::GameInfo;
pub use numerics::Range;
pub use rating::{
    ConstantKFactor, FideKFactor, GaussianEloCalculator, GaussianWinProbability, KFactorPolicy,
    ProbabilityModel, SkillCalculator, TwoPlayerEloCalculator,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
