//! Two-team, one-player-per-team Elo calculator
//!
//! The update rule is fixed; the win-probability curve and the K-factor
//! policy are injected. [`GaussianEloCalculator`] wires in the Gaussian curve
//! and the stable K of 24.

use crate::config::GameInfo;
use crate::error::{Result, SkillError};
use crate::numerics::Range;
use crate::rating::calculator::SkillCalculator;
use crate::rating::k_factor::{ConstantKFactor, KFactorPolicy};
use crate::rating::probability::{GaussianWinProbability, ProbabilityModel};
use crate::rating::rank_sorter;
use crate::types::{PairwiseComparison, PlayerKey, Rating, SupportedOptions, Team};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

const TEAMS_ALLOWED: Range = Range::exactly(2);
const PLAYERS_PER_TEAM_ALLOWED: Range = Range::exactly(1);

/// Elo calculator for exactly two single-player teams
#[derive(Debug, Clone, Default)]
pub struct TwoPlayerEloCalculator<M, K> {
    model: M,
    k_factor: K,
}

/// Elo with the Gaussian win-probability curve and a constant K of 24
pub type GaussianEloCalculator = TwoPlayerEloCalculator<GaussianWinProbability, ConstantKFactor>;

impl GaussianEloCalculator {
    pub fn new() -> Self {
        Self::with_model(GaussianWinProbability, ConstantKFactor::stable())
    }
}

impl<M, K> TwoPlayerEloCalculator<M, K>
where
    M: ProbabilityModel,
    K: KFactorPolicy,
{
    pub fn with_model(model: M, k_factor: K) -> Self {
        Self { model, k_factor }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn k_factor(&self) -> &K {
        &self.k_factor
    }

    /// Chance that a player rated `player_rating` beats `opponent_rating`
    pub fn win_probability(
        &self,
        game_info: &GameInfo,
        player_rating: f64,
        opponent_rating: f64,
    ) -> f64 {
        self.model
            .win_probability(game_info, player_rating, opponent_rating)
    }

    /// Single-player update: `self + k * (actual - expected)`
    pub fn calculate_new_rating(
        &self,
        game_info: &GameInfo,
        self_rating: f64,
        opponent_rating: f64,
        comparison: PairwiseComparison,
    ) -> Rating {
        let expected = self.win_probability(game_info, self_rating, opponent_rating);
        let actual = comparison.score();
        let k = self.k_factor.value_for_rating(self_rating);
        let new_rating = self_rating + k * (actual - expected);

        debug!(
            "Elo update {}: {:.4} -> {:.4} (expected {:.4}, k {})",
            comparison, self_rating, new_rating, expected, k
        );

        Rating::elo(new_rating)
    }

    fn validate<P: PlayerKey>(&self, teams: &[Team<P>]) -> Result<()> {
        SkillCalculator::<P>::validate_team_count_and_players_count_per_team(self, teams)?;

        let mut seen = HashSet::with_capacity(teams.len());
        for team in teams {
            for (player, rating) in team {
                if !seen.insert(player) {
                    return Err(SkillError::invalid_input(
                        "the same player appears on more than one team",
                    ));
                }
                if !rating.mean.is_finite() {
                    return Err(SkillError::invalid_input(format!(
                        "rating mean must be finite, got {}",
                        rating.mean
                    )));
                }
            }
        }

        Ok(())
    }
}

impl<P, M, K> SkillCalculator<P> for TwoPlayerEloCalculator<M, K>
where
    P: PlayerKey,
    M: ProbabilityModel,
    K: KFactorPolicy,
{
    fn calculate_new_ratings(
        &self,
        game_info: &GameInfo,
        teams: &[Team<P>],
        team_ranks: &[u32],
    ) -> Result<HashMap<P, Rating>> {
        self.validate(teams)?;
        if team_ranks.len() != teams.len() {
            return Err(SkillError::invalid_input(format!(
                "{} ranks supplied for {} teams",
                team_ranks.len(),
                teams.len()
            )));
        }

        let sorted = rank_sorter::sort(teams, team_ranks);
        trace!(
            "Ranks after sorting: {:?}",
            sorted.iter().map(|(_, rank)| *rank).collect::<Vec<_>>()
        );

        let (first_team, first_rank) = sorted[0];
        let (second_team, second_rank) = sorted[1];
        let is_draw = first_rank == second_rank;

        let (player1, player1_rating) = single_player(first_team)?;
        let (player2, player2_rating) = single_player(second_team)?;

        let player1_outcome = if is_draw {
            PairwiseComparison::Draw
        } else {
            PairwiseComparison::Win
        };

        let mut result = HashMap::with_capacity(2);
        result.insert(
            player1.clone(),
            self.calculate_new_rating(
                game_info,
                player1_rating.mean,
                player2_rating.mean,
                player1_outcome,
            ),
        );
        result.insert(
            player2.clone(),
            self.calculate_new_rating(
                game_info,
                player2_rating.mean,
                player1_rating.mean,
                player1_outcome.reversed(),
            ),
        );

        Ok(result)
    }

    fn calculate_match_quality(&self, game_info: &GameInfo, teams: &[Team<P>]) -> Result<f64> {
        self.validate(teams)?;

        let (_, player1_rating) = single_player(&teams[0])?;
        let (_, player2_rating) = single_player(&teams[1])?;

        // Distance of the win probability from 50%, rescaled so 50% maps to 1.0
        let probability = self.win_probability(game_info, player1_rating.mean, player2_rating.mean);
        let delta_from_even = (probability - 0.5).abs();
        let quality = (0.5 - delta_from_even) / 0.5;

        debug!(
            "Match quality {:.4} (win probability {:.4})",
            quality, probability
        );

        Ok(quality)
    }

    fn supported_options(&self) -> SupportedOptions {
        SupportedOptions::NONE
    }

    fn teams_allowed(&self) -> Range {
        TEAMS_ALLOWED
    }

    fn players_per_team_allowed(&self) -> Range {
        PLAYERS_PER_TEAM_ALLOWED
    }
}

fn single_player<P>(team: &Team<P>) -> Result<(&P, &Rating)> {
    team.iter()
        .next()
        .ok_or_else(|| SkillError::invalid_input("team has no players"))
}
