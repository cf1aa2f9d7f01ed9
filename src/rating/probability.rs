//! Win-probability models plugged into the Elo engine

use crate::config::GameInfo;
use crate::numerics::gaussian;
use std::f64::consts::SQRT_2;

/// Predicts the chance that a player beats an opponent
#[cfg_attr(test, mockall::automock)]
pub trait ProbabilityModel: Send + Sync {
    /// Probability in (0, 1) that `player_rating` beats `opponent_rating`
    fn win_probability(&self, game_info: &GameInfo, player_rating: f64, opponent_rating: f64)
        -> f64;
}

/// Gaussian performance curve, TrueSkill paper equation 1.1:
/// `Phi((player - opponent) / (sqrt(2) * beta))`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GaussianWinProbability;

impl ProbabilityModel for GaussianWinProbability {
    fn win_probability(
        &self,
        game_info: &GameInfo,
        player_rating: f64,
        opponent_rating: f64,
    ) -> f64 {
        let rating_difference = player_rating - opponent_rating;
        gaussian::cumulative_to(rating_difference / (SQRT_2 * game_info.beta()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_ratings_are_even() {
        let game_info = GameInfo::with_beta(200.0).unwrap();
        for rating in [0.0, 25.0, 1000.0, 2750.5] {
            assert_eq!(
                GaussianWinProbability.win_probability(&game_info, rating, rating),
                0.5
            );
        }
    }

    #[test]
    fn test_known_value() {
        let game_info = GameInfo::with_beta(200.0).unwrap();
        let p = GaussianWinProbability.win_probability(&game_info, 1200.0, 1000.0);
        assert!((p - 0.760_249_938_906_523).abs() < 1e-12);

        let q = GaussianWinProbability.win_probability(&game_info, 1000.0, 1200.0);
        assert!((p + q - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_beta_widens_curve() {
        let narrow = GameInfo::with_beta(100.0).unwrap();
        let wide = GameInfo::with_beta(400.0).unwrap();

        let p_narrow = GaussianWinProbability.win_probability(&narrow, 1200.0, 1000.0);
        let p_wide = GaussianWinProbability.win_probability(&wide, 1200.0, 1000.0);

        assert!(p_narrow > p_wide);
        assert!(p_wide > 0.5);
    }

    #[test]
    fn test_monotonic_in_difference() {
        let game_info = GameInfo::with_beta(200.0).unwrap();
        let mut previous = 0.0;
        for gap in (-1000..=1000).step_by(50) {
            let p = GaussianWinProbability.win_probability(&game_info, 1500.0 + gap as f64, 1500.0);
            assert!(p > previous, "not increasing at gap {}", gap);
            previous = p;
        }
    }
}
