//! Configuration management for the rating engine and the simulator
//!
//! `rating` holds the per-calculation game parameters; `app` holds the
//! settings of the simulator binary, loaded from TOML or the environment.

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings, SimulationSettings};
pub use rating::{GameInfo, GameInfoConfig};
