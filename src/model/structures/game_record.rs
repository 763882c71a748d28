use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One fully-ranked four-player game as supplied by the storage collaborator.
/// `scores` is positionally aligned with `participants`; both are immutable
/// once the engine reads them. Identity resolution happened upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: i32,
    pub date: NaiveDate,
    pub participants: Vec<i32>,
    pub scores: Vec<i32>
}

impl GameRecord {
    /// Derives competition-ranking placements from the scores: higher score
    /// means lower placement number, equal scores share a placement.
    /// `[90, 70, 70, 30]` becomes `[1, 2, 2, 4]`.
    pub fn placements(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.scores.len()).collect();
        order.sort_by(|&a, &b| self.scores[b].cmp(&self.scores[a]));

        let mut placements = vec![0; self.scores.len()];
        let mut prev_score: Option<i32> = None;
        let mut prev_placement = 0;

        for (position, &idx) in order.iter().enumerate() {
            let placement = match prev_score {
                Some(score) if score == self.scores[idx] => prev_placement,
                _ => position + 1
            };

            placements[idx] = placement;
            prev_score = Some(self.scores[idx]);
            prev_placement = placement;
        }

        placements
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::test_utils::generate_game;

    #[test]
    fn test_placements_strict_ranking() {
        let game = generate_game(1, &[1, 2, 3, 4], &[90, 70, 50, 30]);
        assert_eq!(game.placements(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_placements_unsorted_scores() {
        let game = generate_game(1, &[1, 2, 3, 4], &[50, 90, 30, 70]);
        assert_eq!(game.placements(), vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_placements_partial_tie() {
        let game = generate_game(1, &[1, 2, 3, 4], &[90, 70, 70, 30]);
        assert_eq!(game.placements(), vec![1, 2, 2, 4]);
    }

    #[test]
    fn test_placements_four_way_tie() {
        let game = generate_game(1, &[1, 2, 3, 4], &[50, 50, 50, 50]);
        assert_eq!(game.placements(), vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_placements_negative_scores() {
        // Mahjong final scores regularly go negative.
        let game = generate_game(1, &[1, 2, 3, 4], &[52000, -8000, 31000, 25000]);
        assert_eq!(game.placements(), vec![1, 4, 2, 3]);
    }
}
