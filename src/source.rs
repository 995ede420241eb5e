//! The move sources a game can be played with

use anyhow::{anyhow, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::time::Duration;

use crate::{board::Board, turn::MoveSource, WIDTH};

/// A person typing 1-indexed column numbers
///
/// Lines that aren't an integer between 1 and `WIDTH` are rejected with a
/// message and the prompt is repeated, so the controller only ever sees a
/// valid 0-indexed column.
pub struct HumanMoveSource<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanMoveSource<R, W> {
    pub fn new<S: Into<String>>(name: S, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Err(anyhow!("input closed while waiting for {}'s move", self.name));
        }
        Ok(buffer)
    }
}

impl<R: BufRead, W: Write> MoveSource for HumanMoveSource<R, W> {
    fn next_column(&mut self, _board: &Board) -> Result<usize> {
        writeln!(self.output, "\n\nWhat column do you want to drop your piece in?")?;
        loop {
            write!(self.output, "Enter a number from 1 to {}: ", WIDTH)?;
            self.output.flush()?;

            let input_str = self.read_line()?;
            match input_str.trim().parse::<i64>() {
                Err(_) => writeln!(self.output, "Uh oh! That doesn't seem to be an integer!")?,
                Ok(column) if column >= 1 && column <= WIDTH as i64 => {
                    return Ok(column as usize - 1);
                }
                Ok(_) => writeln!(
                    self.output,
                    "Uh oh! That isn't an integer between 1 and {}!",
                    WIDTH
                )?,
            }
        }
    }

    fn column_full(&mut self, column: usize) -> Result<()> {
        writeln!(
            self.output,
            "Uh oh! Column # {} is all full! Pick another column.",
            column + 1
        )?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A bot that picks any column uniformly at random
///
/// The column may already be full; the controller asks again when it is.
pub struct BotMoveSource<R = StdRng> {
    rng: R,
    delay: Duration,
}

impl BotMoveSource<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A bot whose choices are reproducible for a given `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> BotMoveSource<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            delay: Duration::from_secs(0),
        }
    }

    /// Waits `delay` before every choice so the game doesn't feel instant
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for BotMoveSource<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MoveSource for BotMoveSource<R> {
    fn next_column(&mut self, _board: &Board) -> Result<usize> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        let column = self.rng.random_range(0..WIDTH);
        debug!(column, "bot chose column");
        Ok(column)
    }

    fn name(&self) -> &str {
        "computer"
    }
}

/// Replays a fixed list of 0-indexed columns, failing once it runs out
#[derive(Clone, Debug)]
pub struct ScriptedMoveSource {
    name: String,
    moves: VecDeque<usize>,
    full_columns: Vec<usize>,
}

impl ScriptedMoveSource {
    pub fn new<I: IntoIterator<Item = usize>>(moves: I) -> Self {
        Self::named("script", moves)
    }

    pub fn named<S: Into<String>, I: IntoIterator<Item = usize>>(name: S, moves: I) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
            full_columns: Vec::new(),
        }
    }

    /// The number of scripted moves not yet used
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }

    /// Every column this source was told was full, in order
    pub fn full_columns(&self) -> &[usize] {
        &self.full_columns
    }
}

impl MoveSource for ScriptedMoveSource {
    fn next_column(&mut self, _board: &Board) -> Result<usize> {
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow!("{} has no scripted moves left", self.name))
    }

    fn column_full(&mut self, column: usize) -> Result<()> {
        self.full_columns.push(column);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
