//! Skill calculator trait and the shape validation shared by implementations
//!
//! A calculator declares how many teams and how many players per team it
//! accepts; [`validate_team_count_and_players_count_per_team`] enforces those
//! declarations before any rating arithmetic happens.

use crate::config::GameInfo;
use crate::error::{Result, SkillError};
use crate::numerics::Range;
use crate::types::{PlayerKey, Rating, SupportedOptions, Team};
use std::collections::HashMap;
use tracing::warn;

/// Trait for calculating rating changes and match quality
pub trait SkillCalculator<P: PlayerKey>: Send + Sync {
    /// Calculate new ratings for every player after a match
    ///
    /// # Arguments
    /// * `game_info` - Parameters of the skill curve
    /// * `teams` - Each team's players and their current ratings
    /// * `team_ranks` - One rank per team, 1 = first place; repeat a rank for a tie
    ///
    /// # Returns
    /// The new rating of every player present in `teams`
    fn calculate_new_ratings(
        &self,
        game_info: &GameInfo,
        teams: &[Team<P>],
        team_ranks: &[u32],
    ) -> Result<HashMap<P, Rating>>;

    /// How evenly matched the teams are: 1.0 = even, towards 0.0 = lopsided
    fn calculate_match_quality(&self, game_info: &GameInfo, teams: &[Team<P>]) -> Result<f64>;

    /// Optional capabilities this calculator declares
    fn supported_options(&self) -> SupportedOptions;

    /// Allowed number of teams per match
    fn teams_allowed(&self) -> Range;

    /// Allowed number of players on each team
    fn players_per_team_allowed(&self) -> Range;

    fn is_supported(&self, option: SupportedOptions) -> bool {
        self.supported_options().contains(option)
    }

    /// Reject matches whose shape this calculator does not accept
    fn validate_team_count_and_players_count_per_team(&self, teams: &[Team<P>]) -> Result<()> {
        validate_team_count_and_players_count_per_team(
            teams,
            self.teams_allowed(),
            self.players_per_team_allowed(),
        )
    }
}

/// Every team size must lie in `players_per_team`, the team count in `total_teams`.
pub fn validate_team_count_and_players_count_per_team<P>(
    teams: &[Team<P>],
    total_teams: Range,
    players_per_team: Range,
) -> Result<()> {
    for (index, team) in teams.iter().enumerate() {
        if !players_per_team.contains(team.len()) {
            warn!(
                "Rejecting match: team {} has {} players, allowed {}",
                index,
                team.len(),
                players_per_team
            );
            return Err(SkillError::invalid_input(format!(
                "team {} has {} players, allowed {}",
                index,
                team.len(),
                players_per_team
            )));
        }
    }

    if !total_teams.contains(teams.len()) {
        warn!(
            "Rejecting match: {} teams, allowed {}",
            teams.len(),
            total_teams
        );
        return Err(SkillError::invalid_input(format!(
            "{} teams supplied, allowed {}",
            teams.len(),
            total_teams
        )));
    }

    Ok(())
}
