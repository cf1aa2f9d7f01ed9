//! Game parameters consumed by the probability models

use crate::error::{Result, SkillError};
use crate::types::Rating;
use serde::{Deserialize, Serialize};

const DEFAULT_INITIAL_MEAN: f64 = 25.0;
const DEFAULT_BETA: f64 = DEFAULT_INITIAL_MEAN / 6.0;
const DEFAULT_DRAW_PROBABILITY: f64 = 0.10;
const DEFAULT_INITIAL_STANDARD_DEVIATION: f64 = DEFAULT_INITIAL_MEAN / 3.0;

/// Raw, unvalidated game parameters as they appear in configuration files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameInfoConfig {
    pub initial_mean: f64,
    pub initial_standard_deviation: f64,
    /// Skill difference that gives roughly a 76% chance of winning
    pub beta: f64,
    /// Chance that a match ends level
    pub draw_probability: f64,
}

impl Default for GameInfoConfig {
    fn default() -> Self {
        Self {
            initial_mean: DEFAULT_INITIAL_MEAN,
            initial_standard_deviation: DEFAULT_INITIAL_STANDARD_DEVIATION,
            beta: DEFAULT_BETA,
            draw_probability: DEFAULT_DRAW_PROBABILITY,
        }
    }
}

impl GameInfoConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.beta.is_finite() || self.beta <= 0.0 {
            return Err(SkillError::configuration(format!(
                "Beta must be positive and finite, got {}",
                self.beta
            )));
        }

        if !self.initial_mean.is_finite() {
            return Err(SkillError::configuration("Initial mean must be finite"));
        }

        if !self.initial_standard_deviation.is_finite() || self.initial_standard_deviation < 0.0 {
            return Err(SkillError::configuration(
                "Initial standard deviation must be non-negative",
            ));
        }

        if !(0.0..1.0).contains(&self.draw_probability) {
            return Err(SkillError::configuration(format!(
                "Draw probability must be in [0, 1), got {}",
                self.draw_probability
            )));
        }

        Ok(())
    }
}

/// Validated parameters describing the shape of the skill curve.
///
/// Only obtainable through validating constructors, so a `GameInfo` in hand
/// always has a positive, finite beta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GameInfoConfig", into = "GameInfoConfig")]
pub struct GameInfo {
    initial_mean: f64,
    initial_standard_deviation: f64,
    beta: f64,
    draw_probability: f64,
}

impl GameInfo {
    pub fn new(
        initial_mean: f64,
        initial_standard_deviation: f64,
        beta: f64,
        draw_probability: f64,
    ) -> Result<Self> {
        GameInfoConfig {
            initial_mean,
            initial_standard_deviation,
            beta,
            draw_probability,
        }
        .try_into()
    }

    /// Default parameters with a custom beta
    pub fn with_beta(beta: f64) -> Result<Self> {
        GameInfoConfig {
            beta,
            ..GameInfoConfig::default()
        }
        .try_into()
    }

    pub fn initial_mean(&self) -> f64 {
        self.initial_mean
    }

    pub fn initial_standard_deviation(&self) -> f64 {
        self.initial_standard_deviation
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn draw_probability(&self) -> f64 {
        self.draw_probability
    }

    /// Rating handed to players who have not played yet
    pub fn default_rating(&self) -> Rating {
        Rating::new(self.initial_mean, self.initial_standard_deviation)
    }
}

impl Default for GameInfo {
    fn default() -> Self {
        let config = GameInfoConfig::default();
        Self {
            initial_mean: config.initial_mean,
            initial_standard_deviation: config.initial_standard_deviation,
            beta: config.beta,
            draw_probability: config.draw_probability,
        }
    }
}

impl TryFrom<GameInfoConfig> for GameInfo {
    type Error = SkillError;

    fn try_from(config: GameInfoConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            initial_mean: config.initial_mean,
            initial_standard_deviation: config.initial_standard_deviation,
            beta: config.beta,
            draw_probability: config.draw_probability,
        })
    }
}

impl From<GameInfo> for GameInfoConfig {
    fn from(info: GameInfo) -> Self {
        Self {
            initial_mean: info.initial_mean,
            initial_standard_deviation: info.initial_standard_deviation,
            beta: info.beta,
            draw_probability: info.draw_probability,
        }
    }
}
