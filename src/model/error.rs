use thiserror::Error;

pub type RatingResult<T> = Result<T, RatingError>;

/// Everything that can go wrong during a rating pass. There are no transient
/// failure modes inside the engine, so none of these are retryable.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RatingError {
    /// A game with duplicate participants or a participant count other than
    /// four. Handled per the configured [`MalformedGamePolicy`].
    ///
    /// [`MalformedGamePolicy`]: crate::model::structures::malformed_game_policy::MalformedGamePolicy
    #[error("game #{game_index} (id {game_id}) is malformed: {reason}")]
    MalformedGame {
        game_index: usize,
        game_id: i32,
        reason: String
    },

    /// A model identifier outside the supported set. Always fatal: there is
    /// no sensible default model to fall back to.
    #[error("unknown rating model: {0}")]
    UnknownModel(String),

    /// An update law produced a non-finite or collapsed belief. Always fatal,
    /// regardless of policy: a corrupt belief would poison every later game
    /// that player appears in.
    #[error(
        "game #{game_index} (id {game_id}) produced an invalid belief for player {player_id}: \
         mean {mean}, uncertainty {uncertainty}"
    )]
    NonFiniteBelief {
        game_index: usize,
        game_id: i32,
        player_id: i32,
        mean: f64,
        uncertainty: f64
    }
}
