use crate::model::structures::{game_record::GameRecord, player_belief::PlayerBelief};
use chrono::{Duration, NaiveDate};
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::model::constants::{DEFAULT_MEAN, DEFAULT_UNCERTAINTY};

pub fn generate_belief(mean: f64, uncertainty: f64) -> PlayerBelief {
    PlayerBelief { mean, uncertainty }
}

pub fn default_beliefs(n: usize) -> Vec<PlayerBelief> {
    vec![generate_belief(DEFAULT_MEAN, DEFAULT_UNCERTAINTY); n]
}

pub fn generate_game(id: i32, participants: &[i32], scores: &[i32]) -> GameRecord {
    GameRecord {
        id,
        date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap() + Duration::days(id as i64),
        participants: participants.to_vec(),
        scores: scores.to_vec()
    }
}

/// Generates `n` well-formed games over a pool of at least four players,
/// with seeded randomness so failures reproduce.
pub fn generate_game_history(n: i32, player_pool: &[i32]) -> Vec<GameRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut games = Vec::with_capacity(n as usize);

    for i in 0..n {
        let mut pool = player_pool.to_vec();
        pool.shuffle(&mut rng);
        pool.truncate(4);

        let scores: Vec<i32> = (0..4).map(|_| rng.random_range(-30000..=60000)).collect();

        games.push(generate_game(i + 1, &pool, &scores));
    }

    games
}

/// A history in which `champion` always takes first place against three
/// rotating opponents.
pub fn generate_winning_streak(n: i32, champion: i32, opponents: &[i32]) -> Vec<GameRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut games = Vec::with_capacity(n as usize);

    for i in 0..n {
        let mut pool = opponents.to_vec();
        pool.shuffle(&mut rng);
        pool.truncate(3);

        let mut participants = vec![champion];
        participants.extend(pool);

        let mut scores = vec![60000];
        scores.extend((0..3).map(|_| rng.random_range(-30000..30000)));

        games.push(generate_game(i + 1, &participants, &scores));
    }

    games
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_generated_history_is_well_formed() {
        let games = generate_game_history(20, &[1, 2, 3, 4, 5]);

        assert_eq!(games.len(), 20);
        for game in &games {
            assert_eq!(game.participants.len(), 4);
            assert_eq!(game.scores.len(), 4);
            assert_eq!(game.participants.iter().unique().count(), 4);
        }
    }

    #[test]
    fn test_generated_history_is_reproducible() {
        let a = generate_game_history(10, &[1, 2, 3, 4, 5, 6]);
        let b = generate_game_history(10, &[1, 2, 3, 4, 5, 6]);

        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.participants, y.participants);
            assert_eq!(x.scores, y.scores);
        }
    }

    #[test]
    fn test_winning_streak_keeps_champion_first() {
        let games = generate_winning_streak(15, 99, &[1, 2, 3, 4, 5]);

        for game in &games {
            assert_eq!(game.participants[0], 99);
            assert_eq!(game.placements()[0], 1);
        }
    }
}
