//! Line-based console and the continue/stop prompt.

use std::fmt;
use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::error::{GameError, GameResult};

/// The prompt shown before every answer is read.
pub const PROMPT: &str = "Continue or stop?: ";

/// Notice shown when an answer is neither `continue` nor `stop`.
pub const INVALID_ANSWER: &str = "Invalid input. You can either 'continue' or 'stop'. Try again";

/// The player's answer to the continue/stop prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Keep going.
    Continue,
    /// Stop here.
    Stop,
}

impl Answer {
    /// Parse a line of player input, ignoring case and surrounding whitespace.
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "continue" => Some(Self::Continue),
            "stop" => Some(Self::Stop),
            _ => None,
        }
    }

    /// Returns true for [`Answer::Stop`].
    pub fn is_stop(self) -> bool {
        self == Self::Stop
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continue => write!(f, "continue"),
            Self::Stop => write!(f, "stop"),
        }
    }
}

/// A blocking text console: answers come from `input`, everything the
/// player sees goes to `output`.
///
/// `write!`/`writeln!` work directly on a console and report failures as
/// [`GameError::Output`].
pub struct Console<R, W> {
    input: R,
    output: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: Vec::new(),
        }
    }

    /// Consume the console and return the underlying reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write formatted text. Used by the `write!` family of macros.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> GameResult<()> {
        self.output.write_fmt(args).map_err(GameError::Output)
    }

    /// Flush pending output.
    pub fn flush(&mut self) -> GameResult<()> {
        self.output.flush().map_err(GameError::Output)
    }

    /// Ask whether to continue or stop, until a valid answer arrives.
    ///
    /// Returns an error only if the console fails: the input ends, cannot be
    /// read, or output cannot be written.
    pub fn ask(&mut self) -> GameResult<Answer> {
        loop {
            write!(self, "{PROMPT}")?;
            self.flush()?;

            self.line.clear();
            match self.input.read_until(b'\n', &mut self.line) {
                Ok(0) => {
                    warn!("input closed while waiting for an answer");
                    return Err(GameError::InputClosed);
                }
                Ok(_) => {}
                Err(e) => return Err(GameError::Input(e)),
            }

            writeln!(self)?;

            // Bytes that are not UTF-8 are just another wrong answer.
            let answer = Answer::from_input(&String::from_utf8_lossy(&self.line));
            match answer {
                Some(answer) => {
                    debug!("player answered {answer}");
                    return Ok(answer);
                }
                None => {
                    debug!(
                        "rejected answer {:?}",
                        String::from_utf8_lossy(self.line.trim_ascii_end())
                    );
                    writeln!(self, "{INVALID_ANSWER}\n")?;
                }
            }
        }
    }
}
