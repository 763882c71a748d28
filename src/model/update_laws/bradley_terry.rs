use crate::model::{
    constants::BETA,
    structures::player_belief::PlayerBelief,
    update_laws::{pairwise_score, shrink_uncertainty}
};

/// Bradley-Terry update: the four-way outcome is decomposed into every
/// ordered pair of participants and each comparison contributes a logistic
/// win/loss/tie update, aggregated into one shift per participant.
pub fn rate(beliefs: &[PlayerBelief], placements: &[usize]) -> Vec<PlayerBelief> {
    beliefs
        .iter()
        .enumerate()
        .map(|(i, belief)| {
            let uncertainty_sq = belief.uncertainty.powi(2);
            let mut omega = 0.0;
            let mut delta = 0.0;

            for (q, opponent) in beliefs.iter().enumerate() {
                if q == i {
                    continue;
                }

                let c = (uncertainty_sq + opponent.uncertainty.powi(2) + 2.0 * BETA.powi(2)).sqrt();
                // Logistic expectation of beating this opponent. The
                // difference form avoids overflowing exp for extreme means.
                let p = 1.0 / (1.0 + ((opponent.mean - belief.mean) / c).exp());
                let score = pairwise_score(placements[i], placements[q]);

                omega += uncertainty_sq / c * (score - p);

                let gamma = belief.uncertainty / c;
                delta += gamma * uncertainty_sq / c.powi(2) * p * (1.0 - p);
            }

            PlayerBelief {
                mean: belief.mean + omega,
                uncertainty: shrink_uncertainty(uncertainty_sq, delta)
            }
        })
        .collect()
}
