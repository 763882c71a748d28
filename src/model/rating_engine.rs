use crate::{
    model::{
        belief_store::BeliefStore,
        constants::PLAYERS_PER_GAME,
        error::{RatingError, RatingResult},
        structures::{
            game_record::GameRecord, malformed_game_policy::MalformedGamePolicy, player_belief::PlayerBelief,
            rating_model::RatingModel
        },
        update_laws::{law_for, UpdateLaw}
    },
    utils::progress_utils::progress_bar
};
use itertools::Itertools;
use tracing::warn;

/// Folds a game history into a [`BeliefStore`] under one rating model.
///
/// The engine processes games strictly in the order supplied by the caller
/// (chronological ordering is the storage layer's job) and writes each
/// game's four updated beliefs back all-or-nothing, so a cancelled or failed
/// pass always leaves the store at a consistent game boundary.
pub struct RatingEngine {
    model: RatingModel,
    policy: MalformedGamePolicy,
    law: UpdateLaw
}

impl RatingEngine {
    /// Model dispatch happens once, here; the pass loop carries no
    /// per-game branching on the model.
    pub fn new(model: RatingModel, policy: MalformedGamePolicy) -> RatingEngine {
        RatingEngine {
            model,
            policy,
            law: law_for(model)
        }
    }

    /// Runs a full pass over `games`, returning the populated store.
    ///
    /// Malformed games abort or get skipped per the configured policy; a
    /// non-finite belief always aborts. Memory stays O(distinct players).
    pub fn run(&self, games: &[GameRecord]) -> RatingResult<BeliefStore> {
        let mut store = BeliefStore::new();
        let bar = progress_bar(games.len() as u64, format!("Rating games ({})", self.model));

        for (game_index, game) in games.iter().enumerate() {
            match self.apply_game(game_index, game, &mut store) {
                Ok(()) => {}
                Err(RatingError::MalformedGame { reason, .. }) if self.policy == MalformedGamePolicy::Skip => {
                    warn!(game_index, game_id = game.id, %reason, "skipping malformed game");
                }
                Err(e) => return Err(e)
            }

            bar.inc(1);
        }

        bar.finish();
        Ok(store)
    }

    /// Applies a single game to `store`. Public so callers can fold game by
    /// game themselves, checkpointing or cancelling between games.
    ///
    /// Validation runs before any belief is resolved, so a rejected game
    /// never touches the store -- not even to seed priors.
    pub fn apply_game(&self, game_index: usize, game: &GameRecord, store: &mut BeliefStore) -> RatingResult<()> {
        self.validate(game_index, game)?;

        let placements = game.placements();
        let beliefs: Vec<PlayerBelief> = game
            .participants
            .iter()
            .map(|&player_id| store.get_or_create(player_id, self.model))
            .collect();

        let updated = (self.law)(&beliefs, &placements);

        // All-or-nothing: every resulting belief is checked before any is
        // written back.
        for (&player_id, belief) in game.participants.iter().zip(&updated) {
            if !belief.is_valid() {
                return Err(RatingError::NonFiniteBelief {
                    game_index,
                    game_id: game.id,
                    player_id,
                    mean: belief.mean,
                    uncertainty: belief.uncertainty
                });
            }
        }

        for (&player_id, belief) in game.participants.iter().zip(&updated) {
            store.set(player_id, *belief);
        }

        Ok(())
    }

    fn validate(&self, game_index: usize, game: &GameRecord) -> RatingResult<()> {
        if game.participants.len() != PLAYERS_PER_GAME || game.scores.len() != PLAYERS_PER_GAME {
            return Err(RatingError::MalformedGame {
                game_index,
                game_id: game.id,
                reason: format!(
                    "expected {} participants with scores, found {} participants and {} scores",
                    PLAYERS_PER_GAME,
                    game.participants.len(),
                    game.scores.len()
                )
            });
        }

        if game.participants.iter().unique().count() != PLAYERS_PER_GAME {
            return Err(RatingError::MalformedGame {
                game_index,
                game_id: game.id,
                reason: format!("duplicate participant in {:?}", game.participants)
            });
        }

        Ok(())
    }
}
