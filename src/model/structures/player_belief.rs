use crate::model::{
    constants::{DEFAULT_MEAN, DEFAULT_UNCERTAINTY, ORDINAL_MULTIPLIER},
    structures::rating_model::RatingModel
};
use serde::{Deserialize, Serialize};

/// A player's current skill estimate: a Gaussian-like distribution collapsed
/// to its mean and uncertainty. Mutated only by update-law applications.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBelief {
    pub mean: f64,
    pub uncertainty: f64
}

impl PlayerBelief {
    /// The default prior seeded the first time a player is observed.
    ///
    /// All three models share the 25-point Weng-Lin scale, so the prior is
    /// currently model-independent; the model stays in the signature because
    /// the prior belongs to the model, not to the store.
    pub fn initial(model: RatingModel) -> PlayerBelief {
        match model {
            RatingModel::PlackettLuce | RatingModel::BradleyTerry | RatingModel::ThurstoneMosteller => PlayerBelief {
                mean: DEFAULT_MEAN,
                uncertainty: DEFAULT_UNCERTAINTY
            }
        }
    }

    /// Collapses the belief to a single comparable number: a conservative
    /// lower bound on skill, `mean - ORDINAL_MULTIPLIER * uncertainty`.
    pub fn ordinal(&self) -> f64 {
        self.mean - ORDINAL_MULTIPLIER * self.uncertainty
    }

    /// A belief is usable only if both components are finite and the
    /// uncertainty is strictly positive.
    pub fn is_valid(&self) -> bool {
        self.mean.is_finite() && self.uncertainty.is_finite() && self.uncertainty > 0.0
    }
}
