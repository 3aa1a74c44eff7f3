//! A single push-your-luck round.
//!
//! The round draws a value, shows it, and adds it to the running score. A
//! score over the threshold busts the round and forfeits everything;
//! otherwise the player chooses between drawing again and banking the score.

use std::fmt;
use std::io::{BufRead, Write};

use log::debug;

use crate::console::Console;
use crate::draw::DrawSource;
use crate::error::GameResult;
use crate::rules::{BUST_THRESHOLD, SCORE_BEFORE_OFFSET, is_bust};

/// Where a round is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    /// Still drawing.
    #[default]
    Drawing,
    /// The score went over the threshold and was forfeited.
    Bust,
    /// The player banked the score.
    Stopped,
}

impl RoundState {
    /// Returns true once the round can no longer change.
    pub fn is_finished(self) -> bool {
        !matches!(self, Self::Drawing)
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drawing => write!(f, "drawing"),
            Self::Bust => write!(f, "bust"),
            Self::Stopped => write!(f, "stopped"),
        }
    }
}

/// One round of a game.
#[derive(Debug, Clone)]
pub struct Round {
    index: u32,
    score: u32,
    draws: Vec<u32>,
    state: RoundState,
}

impl Round {
    /// Create a fresh round at the given 1-based position.
    pub fn new(index: u32) -> Self {
        Self {
            index,
            score: 0,
            draws: Vec::new(),
            state: RoundState::Drawing,
        }
    }

    /// Position of this round within its game, starting at 1.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Current score. Zero for a busted round.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Every value drawn this round, including a busting one.
    pub fn draws(&self) -> &[u32] {
        &self.draws
    }

    /// Lifecycle state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// The draw history as `a + b + c`.
    pub fn history(&self) -> String {
        self.draws
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" + ")
    }

    /// Draw one value and add it to the score, busting the round if the
    /// threshold is exceeded.
    ///
    /// Returns the drawn value, or `None` without drawing once the round has
    /// finished.
    pub fn draw_from<D: DrawSource + ?Sized>(&mut self, source: &mut D) -> Option<u32> {
        if self.state.is_finished() {
            return None;
        }
        let value = source.draw();
        self.draws.push(value);
        self.score += value;
        if is_bust(self.score) {
            self.state = RoundState::Bust;
        }
        Some(value)
    }

    /// Play the round to completion on the given console.
    pub fn play<D, R, W>(
        &mut self,
        source: &mut D,
        console: &mut Console<R, W>,
    ) -> GameResult<()>
    where
        D: DrawSource + ?Sized,
        R: BufRead,
        W: Write,
    {
        loop {
            let before = self.score;
            let Some(value) = self.draw_from(source) else {
                break;
            };
            debug!(
                "round {}: drew {value}, score {before} -> {}",
                self.index, self.score
            );

            writeln!(console, "Chosen number:  {value}")?;
            writeln!(console, "Current score:  {before}")?;

            if self.state == RoundState::Bust {
                writeln!(console, "\nUh oh! Your score exceeded {BUST_THRESHOLD}!")?;
                writeln!(console, "Current score:  {}", self.score)?;
                // Fixed offset rather than `value`; kept so the line reads the same.
                writeln!(
                    console,
                    "Score before {value}: {}\n",
                    self.score - SCORE_BEFORE_OFFSET
                )?;
                writeln!(console, "Round over. Lets see how you did...\n")?;
                self.score = 0;
                break;
            }

            if console.ask()?.is_stop() {
                writeln!(
                    console,
                    "You have chosen to end the round. Hopefully it was worth it..."
                )?;
                self.state = RoundState::Stopped;
                break;
            }
        }

        debug!(
            "round {} finished {} with {}",
            self.index, self.state, self.score
        );
        writeln!(console, "Round score:  {}", self.score)?;
        writeln!(console, "Round numbers: {}", self.history())?;
        Ok(())
    }
}
