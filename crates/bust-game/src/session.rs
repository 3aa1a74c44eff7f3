//! The outer play-again loop.

use std::io::{BufRead, Write};

use log::info;

use crate::config::SessionConfig;
use crate::console::Console;
use crate::draw::{DrawSource, RandomDraws};
use crate::error::GameResult;
use crate::game::Game;

/// What happened over a whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Number of games played to completion.
    pub games_played: u32,
    /// Highest game total reached.
    pub best_total: u32,
}

impl SessionSummary {
    fn record(&mut self, game: &Game) {
        self.games_played += 1;
        self.best_total = self.best_total.max(game.total());
    }
}

/// Plays games back to back until the player declines another one.
pub struct Session<D, R, W> {
    source: D,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<RandomDraws, R, W> {
    /// Create a session drawing from the generator described by `config`.
    pub fn from_config(config: &SessionConfig, input: R, output: W) -> Self {
        Self::new(RandomDraws::new(config.rng()), Console::new(input, output))
    }
}

impl<D: DrawSource, R: BufRead, W: Write> Session<D, R, W> {
    /// Create a session from an explicit draw source and console.
    pub fn new(source: D, console: Console<R, W>) -> Self {
        Self { source, console }
    }

    /// Consume the session and return its console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run games until the player answers `stop` to "Play again?".
    pub fn run(&mut self) -> GameResult<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            let mut game = Game::new();
            game.play(&mut self.source, &mut self.console)?;
            summary.record(&game);

            writeln!(self.console, "\nPlay again?")?;
            if self.console.ask()?.is_stop() {
                break;
            }
            writeln!(self.console, "New Game!\n")?;
        }

        info!(
            "session over after {} game(s), best total {}",
            summary.games_played, summary.best_total
        );
        Ok(summary)
    }
}
