//! Win and tie detection over a board snapshot

use crate::{
    board::{Board, Cell},
    CONNECT, HEIGHT, WIDTH,
};

/// The state of a game as seen from the board alone
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameOutcome {
    InProgress,
    Win(Cell),
    Tie,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

// (row step, column step) for each line direction, in scan order
const DIRECTIONS: [(isize, isize); 4] = [
    // horizontal
    (0, 1),
    // vertical
    (1, 0),
    // diagonal, rising to the right
    (-1, 1),
    // diagonal, rising to the left
    (-1, -1),
];

/// Every start cell from which a run of `CONNECT` cells stepping by
/// `(d_row, d_col)` stays inside the board
fn run_starts(d_row: isize, d_col: isize) -> impl Iterator<Item = (usize, usize)> {
    let span = CONNECT as isize - 1;
    let in_range = move |start: isize, step: isize, len: usize| {
        let end = start + step * span;
        end >= 0 && end < len as isize
    };

    (0..HEIGHT).flat_map(move |row| {
        (0..WIDTH)
            .filter(move |&column| {
                in_range(row as isize, d_row, HEIGHT) && in_range(column as isize, d_col, WIDTH)
            })
            .map(move |column| (row, column))
    })
}

fn run_matches(
    board: &Board,
    (row, column): (usize, usize),
    (d_row, d_col): (isize, isize),
    chip: Cell,
) -> bool {
    (0..CONNECT as isize).all(|i| {
        let r = (row as isize + d_row * i) as usize;
        let c = (column as isize + d_col * i) as usize;
        board.cell_at(r, c).map_or(false, |cell| cell == chip)
    })
}

/// Whether `chip` has four in a row anywhere on the board
///
/// Horizontal, vertical and both diagonal directions are all scanned; the
/// first complete run found ends the search. `Cell::Empty` never wins.
pub fn evaluate(board: &Board, chip: Cell) -> bool {
    if chip.is_empty() {
        return false;
    }

    DIRECTIONS.iter().any(|&direction| {
        run_starts(direction.0, direction.1).any(|start| run_matches(board, start, direction, chip))
    })
}

/// The outcome of the game after `last_mover` placed a chip
///
/// A win takes precedence over a full board.
pub fn classify(board: &Board, last_mover: Cell) -> GameOutcome {
    if evaluate(board, last_mover) {
        GameOutcome::Win(last_mover)
    } else if board.is_full() {
        GameOutcome::Tie
    } else {
        GameOutcome::InProgress
    }
}
