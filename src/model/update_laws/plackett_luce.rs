use crate::model::{
    constants::BETA,
    structures::player_belief::PlayerBelief,
    update_laws::shrink_uncertainty
};

/// Plackett-Luce update: the observed ordering is modelled as a sequence of
/// draws without replacement, and each participant's shift is weighted by
/// their marginal contribution to the probability of that full ordering.
///
/// For participant `i`, the sum runs over every draw stage `q` decided at or
/// before `i`'s own placement; `p` is `i`'s share of the softmax over the
/// players still undrawn at stage `q`, and tied stages split their weight
/// evenly across the tie group.
pub fn rate(beliefs: &[PlayerBelief], placements: &[usize]) -> Vec<PlayerBelief> {
    let c = beliefs
        .iter()
        .map(|b| b.uncertainty.powi(2) + BETA.powi(2))
        .sum::<f64>()
        .sqrt();

    let exp_means: Vec<f64> = beliefs.iter().map(|b| (b.mean / c).exp()).collect();

    // Softmax denominator per stage: everyone placed at q's level or worse
    // is still in the pool when stage q is decided.
    let stage_sums: Vec<f64> = placements
        .iter()
        .map(|&placement_q| {
            exp_means
                .iter()
                .zip(placements)
                .filter(|(_, &other)| other >= placement_q)
                .map(|(e, _)| e)
                .sum()
        })
        .collect();

    let tie_counts: Vec<f64> = placements
        .iter()
        .map(|&placement_q| placements.iter().filter(|&&other| other == placement_q).count() as f64)
        .collect();

    beliefs
        .iter()
        .enumerate()
        .map(|(i, belief)| {
            let uncertainty_sq = belief.uncertainty.powi(2);
            let mut omega = 0.0;
            let mut delta = 0.0;

            for q in 0..beliefs.len() {
                if placements[q] > placements[i] {
                    continue;
                }

                let p = exp_means[i] / stage_sums[q];
                delta += p * (1.0 - p) / tie_counts[q];
                omega += if q == i { (1.0 - p) / tie_counts[q] } else { -p / tie_counts[q] };
            }

            omega *= uncertainty_sq / c;
            delta *= uncertainty_sq / c.powi(2);
            delta *= belief.uncertainty / c; // gamma: slow the shrink for already-certain players

            PlayerBelief {
                mean: belief.mean + omega,
                uncertainty: shrink_uncertainty(uncertainty_sq, delta)
            }
        })
        .collect()
}
