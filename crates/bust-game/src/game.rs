//! A full game: a fixed number of rounds and their running total.

use std::io::{BufRead, Write};

use log::info;

use crate::console::Console;
use crate::draw::DrawSource;
use crate::error::GameResult;
use crate::round::Round;
use crate::rules::ROUNDS_PER_GAME;

/// One play-through of [`ROUNDS_PER_GAME`] rounds.
#[derive(Debug, Clone, Default)]
pub struct Game {
    rounds: Vec<Round>,
    total: u32,
}

impl Game {
    /// Create a game with no rounds played.
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed rounds, in play order.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Sum of the completed rounds' scores.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Returns true once every round has been played.
    pub fn is_finished(&self) -> bool {
        self.rounds.len() as u32 >= ROUNDS_PER_GAME
    }

    /// Play every round in order, reporting the running total after each.
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
        for index in 1..=ROUNDS_PER_GAME {
            let mut round = Round::new(index);
            round.play(source, console)?;
            self.record(round);

            writeln!(
                console,
                "Game total after round {}: {}\n",
                self.rounds.len(),
                self.total
            )?;
        }

        info!("game finished with {} points", self.total);
        writeln!(
            console,
            "After {} rounds, your score is: {}",
            self.rounds.len(),
            self.total
        )?;
        Ok(())
    }

    fn record(&mut self, round: Round) {
        self.total += round.score();
        self.rounds.push(round);
    }
}
