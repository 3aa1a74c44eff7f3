//! Fixed rules of the game.
//!
//! These values are not player-configurable; they are named here so the
//! round and game loops read in terms of the rules rather than magic numbers.

/// Number of rounds in one game.
pub const ROUNDS_PER_GAME: u32 = 5;

/// A round score above this value busts the round.
pub const BUST_THRESHOLD: u32 = 25;

/// Smallest value a draw can produce.
pub const DRAW_MIN: u32 = 2;

/// Upper bound of a draw, exclusive. Draws fall in `DRAW_MIN..DRAW_MAX`.
pub const DRAW_MAX: u32 = 10;

/// Offset subtracted from a busted score for the "score before" line.
///
/// This is a fixed value, not the last draw, so the reported number is only
/// the true pre-draw score when the busting draw was a 7.
pub const SCORE_BEFORE_OFFSET: u32 = 7;

/// Returns true if `score` exceeds the bust threshold.
pub fn is_bust(score: u32) -> bool {
    score > BUST_THRESHOLD
}
