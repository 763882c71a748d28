// Rating scale constants, shared by all three update laws.
// Ratings live on the 25-point Weng-Lin scale.
pub const DEFAULT_MEAN: f64 = 25.0;
pub const DEFAULT_UNCERTAINTY: f64 = DEFAULT_MEAN / 3.0;
/// Skill-class width: the mean difference needed for a ~67% pairwise win
/// probability. Lower it when skill dominates, raise it when luck does.
pub const BETA: f64 = DEFAULT_UNCERTAINTY / 2.0;
/// Floor on the per-game uncertainty shrink factor. Keeps uncertainty
/// strictly positive no matter how much evidence accumulates.
pub const KAPPA: f64 = 0.0001;
/// Half-width of the mean-difference band treated as a draw by the
/// Thurstone-Mosteller comparison model, on the rating scale.
pub const DRAW_MARGIN: f64 = 0.1;
/// Number of uncertainty units subtracted from the mean when collapsing a
/// belief to a single leaderboard ordinal.
pub const ORDINAL_MULTIPLIER: f64 = 3.0;
/// Exactly four players sit at a mahjong table.
pub const PLAYERS_PER_GAME: usize = 4;
