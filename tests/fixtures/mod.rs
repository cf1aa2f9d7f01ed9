//! Test fixtures and mock implementations for integration testing

#![allow(dead_code)]

use matchmaker_skills::{GameInfo, ProbabilityModel, Rating, Team};
use mockall::mock;
use std::collections::HashMap;

// Probability model whose answers are scripted per test
mock! {
    pub Model {}

    impl ProbabilityModel for Model {
        fn win_probability(
            &self,
            game_info: &GameInfo,
            player_rating: f64,
            opponent_rating: f64,
        ) -> f64;
    }
}

/// Beta used by the worked example: 1200 vs 1000
pub const EXAMPLE_BETA: f64 = 200.0;

pub fn game_info() -> GameInfo {
    GameInfo::with_beta(EXAMPLE_BETA).unwrap()
}

/// A single-player team
pub fn solo(id: &str, mean: f64) -> Team<String> {
    HashMap::from([(id.to_string(), Rating::elo(mean))])
}

/// A team with several players, for shape validation tests
pub fn squad(players: &[(&str, f64)]) -> Team<String> {
    players
        .iter()
        .map(|(id, mean)| (id.to_string(), Rating::elo(*mean)))
        .collect()
}

/// Teams keyed by a non-string identifier
pub fn numbered(id: u64, mean: f64) -> Team<u64> {
    HashMap::from([(id, Rating::elo(mean))])
}
