use crate::model::{
    constants::{BETA, DRAW_MARGIN},
    structures::player_belief::PlayerBelief,
    update_laws::shrink_uncertainty
};
use statrs::distribution::{Continuous, ContinuousCDF, Normal};
use std::cmp::Ordering;

// Below this much probability mass the truncated-Gaussian moments are
// replaced by their asymptotic limits.
const TAIL_MASS_FLOOR: f64 = 1e-5;

/// Thurstone-Mosteller update: the same all-pairs decomposition as
/// Bradley-Terry, but each comparison uses a Gaussian-difference (probit)
/// model with a draw margin instead of a logistic one. Mean shifts use the
/// truncated-Gaussian moment functions `v`/`w` familiar from TrueSkill.
pub fn rate(beliefs: &[PlayerBelief], placements: &[usize]) -> Vec<PlayerBelief> {
    let normal = Normal::new(0.0, 1.0).unwrap();

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
                let x = (belief.mean - opponent.mean) / c;
                let margin = DRAW_MARGIN / c;
                let gamma = belief.uncertainty / c;

                match placements[i].cmp(&placements[q]) {
                    Ordering::Less => {
                        omega += uncertainty_sq / c * v_win(&normal, x, margin);
                        delta += gamma * uncertainty_sq / c.powi(2) * w_win(&normal, x, margin);
                    }
                    Ordering::Equal => {
                        omega += uncertainty_sq / c * v_draw(&normal, x, margin);
                        delta += gamma * uncertainty_sq / c.powi(2) * w_draw(&normal, x, margin);
                    }
                    Ordering::Greater => {
                        omega -= uncertainty_sq / c * v_win(&normal, -x, margin);
                        delta += gamma * uncertainty_sq / c.powi(2) * w_win(&normal, -x, margin);
                    }
                }
            }

            PlayerBelief {
                mean: belief.mean + omega,
                uncertainty: shrink_uncertainty(uncertainty_sq, delta)
            }
        })
        .collect()
}

/// Mean of a standard Gaussian truncated below at `margin - x`.
fn v_win(normal: &Normal, x: f64, margin: f64) -> f64 {
    let diff = x - margin;
    let denom = normal.cdf(diff);

    if denom < TAIL_MASS_FLOOR {
        -diff
    } else {
        normal.pdf(diff) / denom
    }
}

/// Variance reduction of the win-truncated Gaussian, in (0, 1).
fn w_win(normal: &Normal, x: f64, margin: f64) -> f64 {
    let diff = x - margin;
    let denom = normal.cdf(diff);

    if denom < TAIL_MASS_FLOOR {
        if x < 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        let v = v_win(normal, x, margin);
        v * (v + diff)
    }
}

/// Mean of a standard Gaussian truncated to the draw band `[-margin, margin]`.
fn v_draw(normal: &Normal, x: f64, margin: f64) -> f64 {
    let abs_x = x.abs();
    let denom = normal.cdf(margin - abs_x) - normal.cdf(-margin - abs_x);

    if denom < TAIL_MASS_FLOOR {
        return if x < 0.0 { -x - margin } else { -x + margin };
    }

    let numer = normal.pdf(-margin - abs_x) - normal.pdf(margin - abs_x);
    if x < 0.0 {
        -numer / denom
    } else {
        numer / denom
    }
}

/// Variance reduction of the draw-truncated Gaussian, in (0, 1].
fn w_draw(normal: &Normal, x: f64, margin: f64) -> f64 {
    let abs_x = x.abs();
    let denom = normal.cdf(margin - abs_x) - normal.cdf(-margin - abs_x);

    if denom < TAIL_MASS_FLOOR {
        return 1.0;
    }

    let v = v_draw(normal, x, margin);
    ((margin - abs_x) * normal.pdf(margin - abs_x) + (margin + abs_x) * normal.pdf(-margin - abs_x)) / denom + v * v
}
