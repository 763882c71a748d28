//! The model-specific update laws. Each is a pure function from the
//! participants' pre-game beliefs and placements to their post-game beliefs,
//! positionally aligned with the input. Formulations follow the Bayesian
//! approximation ranking family of Weng & Lin (JMLR 2011): a mean shift
//! `omega` accumulated against expected outcomes, and an uncertainty shrink
//! factor `delta` floored at [`KAPPA`](crate::model::constants::KAPPA).

pub mod bradley_terry;
pub mod plackett_luce;
pub mod thurstone_mosteller;

use crate::model::{
    constants::KAPPA,
    structures::{player_belief::PlayerBelief, rating_model::RatingModel}
};

pub type UpdateLaw = fn(&[PlayerBelief], &[usize]) -> Vec<PlayerBelief>;

/// Resolves the update law for a model. This is the only place model
/// dispatch happens; the engine stores the returned function pointer.
pub fn law_for(model: RatingModel) -> UpdateLaw {
    match model {
        RatingModel::PlackettLuce => plackett_luce::rate,
        RatingModel::BradleyTerry => bradley_terry::rate,
        RatingModel::ThurstoneMosteller => thurstone_mosteller::rate
    }
}

/// Pairwise outcome from the perspective of the first placement:
/// 1.0 for a win (numerically lower placement), 0.5 for a tie, 0.0 for a loss.
pub(crate) fn pairwise_score(own: usize, other: usize) -> f64 {
    match own.cmp(&other) {
        std::cmp::Ordering::Less => 1.0,
        std::cmp::Ordering::Equal => 0.5,
        std::cmp::Ordering::Greater => 0.0
    }
}

/// Applies the accumulated shrink factor to a squared uncertainty. The
/// factor is floored at KAPPA so uncertainty stays strictly positive.
pub(crate) fn shrink_uncertainty(uncertainty_sq: f64, delta: f64) -> f64 {
    (uncertainty_sq * (1.0 - delta).max(KAPPA)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pairwise_score() {
        assert_abs_diff_eq!(pairwise_score(1, 2), 1.0);
        assert_abs_diff_eq!(pairwise_score(2, 2), 0.5);
        assert_abs_diff_eq!(pairwise_score(3, 2), 0.0);
    }

    #[test]
    fn test_shrink_never_reaches_zero() {
        // Even a shrink factor past 1.0 bottoms out at the KAPPA floor.
        let shrunk = shrink_uncertainty(4.0, 2.0);
        assert!(shrunk > 0.0);
        assert_abs_diff_eq!(shrunk, (4.0 * KAPPA).sqrt());
    }

    #[test]
    fn test_shrink_reduces_uncertainty() {
        let shrunk = shrink_uncertainty(4.0, 0.19);
        assert!(shrunk < 2.0);
        assert_abs_diff_eq!(shrunk, (4.0_f64 * 0.81).sqrt(), epsilon = 1e-12);
    }
}
