//! Error types for the game engine.

use std::io;

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while a session is being played.
///
/// Invalid answers to the continue/stop prompt never surface here: the
/// prompt reports them to the player and asks again. Everything in this enum
/// means the console itself is unusable.
#[derive(Debug, Error)]
pub enum GameError {
    /// The input stream ended while an answer was expected.
    #[error("unexpected end of input")]
    InputClosed,

    /// Reading from the input stream failed.
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl GameError {
    /// Returns true if the error came from the input side of the console.
    pub fn is_input_failure(&self) -> bool {
        matches!(self, Self::InputClosed | Self::Input(_))
    }
}
