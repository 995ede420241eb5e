use anyhow::{anyhow, Result};
use thiserror::Error;
use tracing::debug;

use crate::{CELL_COUNT, HEIGHT, WIDTH};

/// The contents of one square of the board
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The chip of the other player, `Empty` has no opponent
    pub fn opponent(&self) -> Cell {
        match self {
            Cell::PlayerA => Cell::PlayerB,
            Cell::PlayerB => Cell::PlayerA,
            Cell::Empty => Cell::Empty,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// Reasons a board operation can be rejected
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum DropError {
    /// Every row of the column already holds a chip
    #[error("column {} is full", .column + 1)]
    ColumnFull { column: usize },

    /// The position lies outside the 6x7 grid
    #[error("position (row {row}, column {column}) is outside the board")]
    OutOfBounds { row: usize, column: usize },

    /// Only a player's chip can be dropped
    #[error("an empty cell can't be dropped into the board")]
    EmptyChip,
}

/// A Connect 4 grid
///
/// Rows are indexed from the top (0) to the bottom (`HEIGHT - 1`) and columns
/// from the left (0) to the right (`WIDTH - 1`). The only way to change the
/// board is [`Board::drop`], so no chip can ever float above an empty cell.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
    chip_count: usize,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
            chip_count: 0,
        }
    }

    /// Builds a board by alternately dropping `PlayerA` and `PlayerB` chips
    /// into the 1-indexed columns given as digits, starting with `PlayerA`
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut chip = Cell::PlayerA;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    board.drop(column - 1, chip)?;
                    chip = chip.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Drops `chip` into `column`, returning the row it landed in
    ///
    /// A full column is rejected with [`DropError::ColumnFull`] and leaves the
    /// board untouched, as is dropping `Cell::Empty`.
    pub fn drop(&mut self, column: usize, chip: Cell) -> Result<usize, DropError> {
        if chip.is_empty() {
            return Err(DropError::EmptyChip);
        }
        if column >= WIDTH {
            return Err(DropError::OutOfBounds {
                row: HEIGHT - 1,
                column,
            });
        }

        // scan upwards from the bottom row for the first free slot
        for row in (0..HEIGHT).rev() {
            if self.cells[row][column].is_empty() {
                self.cells[row][column] = chip;
                self.chip_count += 1;
                debug!(row, column, ?chip, chips = self.chip_count, "chip dropped");
                return Ok(row);
            }
        }

        Err(DropError::ColumnFull { column })
    }

    pub fn cell_at(&self, row: usize, column: usize) -> Result<Cell, DropError> {
        if row >= HEIGHT || column >= WIDTH {
            return Err(DropError::OutOfBounds { row, column });
        }
        Ok(self.cells[row][column])
    }

    /// The number of chips on the board
    pub fn chip_count(&self) -> usize {
        self.chip_count
    }

    pub fn is_full(&self) -> bool {
        self.chip_count == CELL_COUNT
    }

    /// The number of chips stacked in `column`
    pub fn column_height(&self, column: usize) -> Result<usize, DropError> {
        if column >= WIDTH {
            return Err(DropError::OutOfBounds { row: 0, column });
        }
        Ok((0..HEIGHT)
            .filter(|&row| !self.cells[row][column].is_empty())
            .count())
    }

    pub fn is_playable(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column].is_empty()
    }

    /// Iterates over the rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; WIDTH]> {
        self.cells.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
