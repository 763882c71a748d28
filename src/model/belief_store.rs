use crate::model::structures::{player_belief::PlayerBelief, rating_model::RatingModel};
use indexmap::IndexMap;

/// The working state of one rating pass: player id mapped to current belief,
/// in first-observation order. Each engine run owns exactly one store;
/// beliefs are created lazily and never removed during a pass.
#[derive(Debug, Clone, Default)]
pub struct BeliefStore {
    beliefs: IndexMap<i32, PlayerBelief>
}

impl BeliefStore {
    pub fn new() -> BeliefStore {
        BeliefStore {
            beliefs: IndexMap::new()
        }
    }

    /// Returns the player's current belief, seeding the model's default
    /// prior if this is the first time the player is observed.
    pub fn get_or_create(&mut self, player_id: i32, model: RatingModel) -> PlayerBelief {
        *self
            .beliefs
            .entry(player_id)
            .or_insert_with(|| PlayerBelief::initial(model))
    }

    pub fn get(&self, player_id: i32) -> Option<&PlayerBelief> {
        self.beliefs.get(&player_id)
    }

    pub fn set(&mut self, player_id: i32, belief: PlayerBelief) {
        self.beliefs.insert(player_id, belief);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&i32, &PlayerBelief)> {
        self.beliefs.iter()
    }

    pub fn len(&self) -> usize {
        self.beliefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beliefs.is_empty()
    }
}
