//! Bust: a push-your-luck dice game for the terminal.
//!
//! Each round draws values between 2 and 9 and adds them to a running score.
//! After every draw the player either banks the score or draws again; a score
//! over 25 busts the round and forfeits it. A game is five rounds, and a
//! session keeps offering new games until the player declines.
//!
//! All console traffic goes through [`Console`], and all randomness through a
//! [`DrawSource`], so a whole session can be driven from memory.

pub mod config;
pub mod console;
pub mod draw;
pub mod error;
pub mod game;
pub mod round;
pub mod rules;
pub mod session;

pub use config::SessionConfig;
pub use console::{Answer, Console};
pub use draw::{DrawSource, RandomDraws, ScriptedDraws};
pub use error::{GameError, GameResult};
pub use game::Game;
pub use round::{Round, RoundState};
pub use session::{Session, SessionSummary};

