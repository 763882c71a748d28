use crate::model::{
    belief_store::BeliefStore,
    error::RatingResult,
    rating_engine::RatingEngine,
    structures::{game_record::GameRecord, malformed_game_policy::MalformedGamePolicy, rating_model::RatingModel}
};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// One leaderboard row: the belief collapsed to its ordinal, plus the
/// 1-based rank after sorting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub player_id: i32,
    pub score: f64,
    pub rank: i32
}

/// Builds the leaderboard for one populated store: ordinal descending,
/// score ties broken by ascending player id so reruns are deterministic.
pub fn build(store: &BeliefStore) -> Vec<LeaderboardEntry> {
    let mut scored: Vec<(i32, f64)> = store.iter().map(|(id, belief)| (*id, belief.ordinal())).collect();

    // The engine guarantees finite beliefs, so ordinals totally order.
    scored.sort_by(|(id_a, score_a), (id_b, score_b)| {
        score_b.partial_cmp(score_a).unwrap().then_with(|| id_a.cmp(id_b))
    });

    scored
        .into_iter()
        .enumerate()
        .map(|(position, (player_id, score))| LeaderboardEntry {
            player_id,
            score,
            rank: position as i32 + 1
        })
        .collect()
}

/// Runs one independent rating pass per model and builds each leaderboard.
///
/// The passes share nothing but the immutable game history -- each owns a
/// disjoint store -- so they run in parallel. Any pass failing fails the
/// whole call; a rerun recomputes everything from scratch.
pub fn build_all(
    games: &[GameRecord],
    policy: MalformedGamePolicy
) -> RatingResult<HashMap<RatingModel, Vec<LeaderboardEntry>>> {
    RatingModel::iter()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|model| {
            let store = RatingEngine::new(model, policy).run(games)?;
            Ok((model, build(&store)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::structures::player_belief::PlayerBelief,
        utils::test_utils::{generate_game, generate_game_history}
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_build_sorts_by_ordinal_descending() {
        let mut store = BeliefStore::new();
        store.set(
            10,
            PlayerBelief {
                mean: 20.0,
                uncertainty: 1.0
            }
        );
        store.set(
            11,
            PlayerBelief {
                mean: 30.0,
                uncertainty: 1.0
            }
        );
        store.set(
            12,
            PlayerBelief {
                mean: 30.0,
                uncertainty: 4.0
            }
        );

        let board = build(&store);

        assert_eq!(board.len(), 3);
        assert_eq!(board[0].player_id, 11);
        assert_eq!(board[0].rank, 1);
        assert_abs_diff_eq!(board[0].score, 27.0);
        assert_eq!(board[1].player_id, 10);
        assert_eq!(board[1].rank, 2);
        assert_eq!(board[2].player_id, 12);
        assert_eq!(board[2].rank, 3);
    }

    #[test]
    fn test_build_breaks_score_ties_by_ascending_id() {
        let mut store = BeliefStore::new();
        let belief = PlayerBelief {
            mean: 25.0,
            uncertainty: 2.0
        };
        store.set(9, belief);
        store.set(4, belief);
        store.set(7, belief);

        let ids: Vec<i32> = build(&store).iter().map(|e| e.player_id).collect();
        assert_eq!(ids, vec![4, 7, 9]);
    }

    #[test]
    fn test_build_all_covers_every_model() {
        let games = vec![generate_game(1, &[1, 2, 3, 4], &[90, 70, 50, 30])];

        let boards = build_all(&games, MalformedGamePolicy::Reject).unwrap();

        assert_eq!(boards.len(), 3);
        for board in boards.values() {
            assert_eq!(board.len(), 4);
            assert_eq!(board[0].player_id, 1);
        }
    }

    #[test]
    fn test_build_all_matches_independent_runs() {
        let games = generate_game_history(50, &[1, 2, 3, 4, 5, 6]);

        let boards = build_all(&games, MalformedGamePolicy::Reject).unwrap();

        for model in RatingModel::iter() {
            let store = RatingEngine::new(model, MalformedGamePolicy::Reject).run(&games).unwrap();
            assert_eq!(boards[&model], build(&store));
        }
    }

    #[test]
    fn test_build_all_propagates_strict_failures() {
        let games = vec![GameRecord {
            id: 1,
            date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            participants: vec![1, 2, 3],
            scores: vec![90, 70, 50]
        }];

        assert!(build_all(&games, MalformedGamePolicy::Reject).is_err());
        assert!(build_all(&games, MalformedGamePolicy::Skip).is_ok());
    }
}
