//! Round-robin league simulator
//!
//! A host for the rating engine: it generates players with a hidden true
//! skill, plays them against each other with outcomes drawn from the true
//! skills, and feeds every result through the calculator so the estimates
//! can be compared against the truth afterwards.

use crate::config::{GameInfo, SimulationSettings};
use crate::error::Result;
use crate::rating::{KFactorPolicy, ProbabilityModel, SkillCalculator, TwoPlayerEloCalculator};
use crate::types::{Rating, Team};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

/// A generated competitor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatedPlayer {
    pub id: Uuid,
    /// Skill used to decide outcomes; never shown to the calculator
    pub true_skill: f64,
    /// Current estimate maintained by the calculator
    pub rating: Rating,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

/// Outcome of a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub seed: u64,
    pub matches_played: usize,
    /// Mean of the calculator's match quality over every played match
    pub average_match_quality: f64,
    /// Mean absolute gap between estimate and true skill
    pub mean_absolute_error: f64,
    /// Players ordered by final rating, best first
    pub players: Vec<SimulatedPlayer>,
}

/// Drives a league of simulated players through a calculator
pub struct Simulator<M, K> {
    calculator: TwoPlayerEloCalculator<M, K>,
    game_info: GameInfo,
    settings: SimulationSettings,
}

impl<M, K> Simulator<M, K>
where
    M: ProbabilityModel,
    K: KFactorPolicy,
{
    pub fn new(
        calculator: TwoPlayerEloCalculator<M, K>,
        game_info: GameInfo,
        settings: SimulationSettings,
    ) -> Self {
        Self {
            calculator,
            game_info,
            settings,
        }
    }

    /// Generate a fresh league and play it out
    ///
    /// Fails with a configuration error before drawing anything if the
    /// settings cannot describe a league.
    pub fn run(&self) -> Result<SimulationReport> {
        self.settings.validate()?;

        let seed = self
            .settings
            .seed
            .unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);

        let mut players = self.generate_players(&mut rng);
        info!(
            "Simulating {} players, {} matches each (seed {})",
            players.len(),
            self.settings.matches_per_player,
            seed
        );

        let mut matches_played = 0;
        let mut total_quality = 0.0;
        let count = players.len();

        for player_index in 0..count {
            for round in 0..self.settings.matches_per_player {
                let mut opponent_index = round % count;
                if opponent_index == player_index {
                    opponent_index = (opponent_index + 1) % count;
                }

                total_quality +=
                    self.play_match(&mut rng, &mut players, player_index, opponent_index)?;
                matches_played += 1;
            }
        }

        let mean_absolute_error = players
            .iter()
            .map(|player| (player.rating.mean - player.true_skill).abs())
            .sum::<f64>()
            / count as f64;

        players.sort_by(|a, b| b.rating.mean.total_cmp(&a.rating.mean));

        let average_match_quality = if matches_played == 0 {
            0.0
        } else {
            total_quality / matches_played as f64
        };

        info!(
            "Simulation finished: {} matches, average quality {:.3}, mean absolute error {:.1}",
            matches_played, average_match_quality, mean_absolute_error
        );

        Ok(SimulationReport {
            seed,
            matches_played,
            average_match_quality,
            mean_absolute_error,
            players,
        })
    }

    fn generate_players(&self, rng: &mut StdRng) -> Vec<SimulatedPlayer> {
        let initial_rating = self.game_info.default_rating();

        (0..self.settings.player_count)
            .map(|_| SimulatedPlayer {
                id: uuid::Builder::from_random_bytes(rng.random()).into_uuid(),
                true_skill: rng
                    .random_range(self.settings.true_skill_min..=self.settings.true_skill_max),
                rating: Rating::elo(initial_rating.mean),
                wins: 0,
                losses: 0,
                draws: 0,
            })
            .collect()
    }

    /// Play one match and apply the new ratings; returns the pre-match quality
    fn play_match(
        &self,
        rng: &mut StdRng,
        players: &mut [SimulatedPlayer],
        first: usize,
        second: usize,
    ) -> Result<f64> {
        let teams: Vec<Team<Uuid>> = [first, second]
            .iter()
            .map(|&index| HashMap::from([(players[index].id, players[index].rating)]))
            .collect();

        let quality = self.calculator.calculate_match_quality(&self.game_info, &teams)?;

        let first_win_probability = self.calculator.win_probability(
            &self.game_info,
            players[first].true_skill,
            players[second].true_skill,
        );
        let is_draw = rng.random::<f64>() < self.game_info.draw_probability();
        let first_wins = rng.random::<f64>() < first_win_probability;
        let ranks = if is_draw {
            [1, 1]
        } else if first_wins {
            [1, 2]
        } else {
            [2, 1]
        };

        let new_ratings = self
            .calculator
            .calculate_new_ratings(&self.game_info, &teams, &ranks)?;

        let outcome = if is_draw {
            players[first].draws += 1;
            players[second].draws += 1;
            "draw".to_string()
        } else {
            let (winner, loser) = if first_wins {
                (first, second)
            } else {
                (second, first)
            };
            players[winner].wins += 1;
            players[loser].losses += 1;
            format!("winner {}", players[winner].id)
        };

        for index in [first, second] {
            if let Some(rating) = new_ratings.get(&players[index].id) {
                players[index].rating = *rating;
            }
        }

        debug!(
            "Match {} vs {}: {}, quality {:.3}",
            players[first].id, players[second].id, outcome, quality
        );

        Ok(quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::app::default_game_config;
    use crate::config::GameInfoConfig;
    use crate::error::SkillError;
    use crate::rating::{ConstantKFactor, GaussianEloCalculator, GaussianWinProbability};

    fn simulator(settings: SimulationSettings) -> Simulator<GaussianWinProbability, ConstantKFactor> {
        let game_info = GameInfo::try_from(default_game_config()).unwrap();
        Simulator::new(GaussianEloCalculator::new(), game_info, settings)
    }

    fn simulator_with_draws(
        draw_probability: f64,
        settings: SimulationSettings,
    ) -> Simulator<GaussianWinProbability, ConstantKFactor> {
        let game_info = GameInfo::try_from(GameInfoConfig {
            draw_probability,
            ..default_game_config()
        })
        .unwrap();
        Simulator::new(GaussianEloCalculator::new(), game_info, settings)
    }

    fn seeded(seed: u64) -> SimulationSettings {
        SimulationSettings {
            seed: Some(seed),
            ..SimulationSettings::default()
        }
    }

    #[test]
    fn test_match_count_and_records() {
        let report = simulator(seeded(42)).run().unwrap();

        assert_eq!(report.seed, 42);
        assert_eq!(report.matches_played, 10 * 100);
        assert_eq!(report.players.len(), 10);

        let wins: u32 = report.players.iter().map(|p| p.wins).sum();
        let losses: u32 = report.players.iter().map(|p| p.losses).sum();
        assert_eq!(wins as usize, report.matches_played);
        assert_eq!(losses as usize, report.matches_played);
    }

    #[test]
    fn test_players_sorted_and_in_bounds() {
        let report = simulator(seeded(3)).run().unwrap();

        for pair in report.players.windows(2) {
            assert!(pair[0].rating.mean >= pair[1].rating.mean);
        }
        for player in &report.players {
            assert!((800.0..=1200.0).contains(&player.true_skill));
        }
        assert!(report.average_match_quality > 0.0);
        assert!(report.average_match_quality <= 1.0);
    }

    #[test]
    fn test_rating_points_are_conserved() {
        // Constant K and a symmetric curve make every update zero-sum
        let report = simulator(seeded(11)).run().unwrap();
        let total: f64 = report.players.iter().map(|p| p.rating.mean).sum();
        assert!((total - 10.0 * 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_same_seed_same_report() {
        let a = simulator(seeded(99)).run().unwrap();
        let b = simulator(seeded(99)).run().unwrap();

        assert_eq!(a.players.len(), b.players.len());
        for (x, y) in a.players.iter().zip(b.players.iter()) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.rating, y.rating);
            assert_eq!(x.wins, y.wins);
        }
    }

    #[test]
    fn test_two_player_league_skips_self() {
        let settings = SimulationSettings {
            player_count: 2,
            matches_per_player: 5,
            seed: Some(1),
            ..SimulationSettings::default()
        };
        let report = simulator(settings).run().unwrap();
        assert_eq!(report.matches_played, 10);
        assert_eq!(report.players.iter().map(|p| p.wins + p.losses).sum::<u32>(), 20);
    }

    #[test]
    fn test_too_few_players_rejected() {
        for player_count in [0, 1] {
            let settings = SimulationSettings {
                player_count,
                matches_per_player: 3,
                seed: Some(1),
                ..SimulationSettings::default()
            };
            let result = simulator(settings).run();
            assert!(matches!(result, Err(SkillError::ConfigurationError { .. })));
        }
    }

    #[test]
    fn test_bad_skill_bounds_rejected() {
        let reversed = SimulationSettings {
            true_skill_min: 1200.0,
            true_skill_max: 800.0,
            seed: Some(1),
            ..SimulationSettings::default()
        };
        assert!(matches!(
            simulator(reversed).run(),
            Err(SkillError::ConfigurationError { .. })
        ));

        let not_a_number = SimulationSettings {
            true_skill_max: f64::NAN,
            seed: Some(1),
            ..SimulationSettings::default()
        };
        assert!(matches!(
            simulator(not_a_number).run(),
            Err(SkillError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_no_draws_without_draw_probability() {
        let report = simulator(seeded(5)).run().unwrap();
        assert!(report.players.iter().all(|p| p.draws == 0));
    }

    #[test]
    fn test_draws_follow_draw_probability() {
        let report = simulator_with_draws(0.5, seeded(8)).run().unwrap();

        let wins: u32 = report.players.iter().map(|p| p.wins).sum();
        let losses: u32 = report.players.iter().map(|p| p.losses).sum();
        let draws: u32 = report.players.iter().map(|p| p.draws).sum();

        // Each drawn match is counted once per side
        assert_eq!(wins, losses);
        assert_eq!(draws % 2, 0);
        assert_eq!((wins + draws / 2) as usize, report.matches_played);

        let drawn_matches = draws as f64 / 2.0;
        let share = drawn_matches / report.matches_played as f64;
        assert!((0.4..0.6).contains(&share), "draw share {}", share);

        let total: f64 = report.players.iter().map(|p| p.rating.mean).sum();
        assert!((total - 10.0 * 1000.0).abs() < 1e-6);
    }
}
