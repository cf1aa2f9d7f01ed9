//! Main application configuration
//!
//! This module defines the configuration of the simulator binary: service
//! settings, the game parameters handed to the calculator, and the shape of
//! the simulated league. Values come from a TOML file or from environment
//! variables layered over the defaults.

use crate::config::rating::{GameInfo, GameInfoConfig};
use crate::error::SkillError;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub game: GameInfoConfig,
    pub simulation: SimulationSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Shape of the simulated league
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Number of generated players
    pub player_count: usize,
    /// Matches each player plays per run
    pub matches_per_player: usize,
    /// Lower bound of the hidden true skill
    pub true_skill_min: f64,
    /// Upper bound of the hidden true skill
    pub true_skill_max: f64,
    /// Fixed RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "elo-simulator".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for AppConfig {
    /// Elo-scale game parameters, unlike the TrueSkill-scale `GameInfoConfig::default`
    fn default() -> Self {
        Self {
            service: ServiceSettings::default(),
            game: default_game_config(),
            simulation: SimulationSettings::default(),
        }
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            player_count: 10,
            matches_per_player: 100,
            true_skill_min: 800.0,
            true_skill_max: 1200.0,
            seed: None,
        }
    }
}

/// Elo-scale defaults: everyone starts at 1000, beta of 200.
pub fn default_game_config() -> GameInfoConfig {
    GameInfoConfig {
        initial_mean: 1000.0,
        initial_standard_deviation: 0.0,
        beta: 200.0,
        draw_probability: 0.0,
    }
}

impl SimulationSettings {
    /// A league needs two distinct players and a non-empty skill interval
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.player_count < 2 {
            return Err(SkillError::configuration(format!(
                "Simulation needs at least 2 players, got {}",
                self.player_count
            )));
        }

        if !self.true_skill_min.is_finite() || !self.true_skill_max.is_finite() {
            return Err(SkillError::configuration("True skill bounds must be finite"));
        }

        if self.true_skill_min > self.true_skill_max {
            return Err(SkillError::configuration(format!(
                "True skill min {} exceeds max {}",
                self.true_skill_min, self.true_skill_max
            )));
        }

        Ok(())
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        // Game settings
        if let Ok(beta) = env::var("GAME_BETA") {
            config.game.beta = beta
                .parse()
                .map_err(|_| anyhow!("Invalid GAME_BETA value: {}", beta))?;
        }
        if let Ok(mean) = env::var("GAME_INITIAL_MEAN") {
            config.game.initial_mean = mean
                .parse()
                .map_err(|_| anyhow!("Invalid GAME_INITIAL_MEAN value: {}", mean))?;
        }

        // Simulation settings
        if let Ok(count) = env::var("SIM_PLAYER_COUNT") {
            config.simulation.player_count = count
                .parse()
                .map_err(|_| anyhow!("Invalid SIM_PLAYER_COUNT value: {}", count))?;
        }
        if let Ok(matches) = env::var("SIM_MATCHES_PER_PLAYER") {
            config.simulation.matches_per_player = matches
                .parse()
                .map_err(|_| anyhow!("Invalid SIM_MATCHES_PER_PLAYER value: {}", matches))?;
        }
        if let Ok(seed) = env::var("SIM_SEED") {
            config.simulation.seed = Some(
                seed.parse()
                    .map_err(|_| anyhow!("Invalid SIM_SEED value: {}", seed))?,
            );
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; missing keys keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut raw: toml::Table = toml::from_str(contents)?;

        // Keys missing from [game] fall back to the Elo-scale defaults, not TrueSkill ones
        let mut game = match toml::Value::try_from(default_game_config())? {
            toml::Value::Table(table) => table,
            _ => return Err(anyhow!("Game defaults did not serialize to a table")),
        };
        if let Some(overrides) = raw.remove("game") {
            let toml::Value::Table(overrides) = overrides else {
                return Err(anyhow!("[game] must be a table"));
            };
            game.extend(overrides);
        }
        raw.insert("game".to_string(), toml::Value::Table(game));

        let config: AppConfig = toml::Value::Table(raw).try_into()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Validated game parameters for the calculator
    pub fn game_info(&self) -> Result<GameInfo> {
        GameInfo::try_from(self.game.clone()).context("Invalid game parameters")
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    config.game.validate()?;
    config.simulation.validate()?;

    Ok(())
}
