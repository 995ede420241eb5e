//! The turn state machine that runs a single game

use anyhow::Result;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::{
    board::{Board, Cell, DropError},
    win::{classify, GameOutcome},
    WIDTH,
};

/// Anything that can choose a column for a player
///
/// Implementations must return a 0-indexed column in `0..WIDTH`; they are not
/// required to check that the column still has room.
pub trait MoveSource {
    /// Chooses the next column, `board` is a read-only view of the game
    fn next_column(&mut self, board: &Board) -> Result<usize>;

    /// Called when the last column returned was full and another is needed
    fn column_full(&mut self, _column: usize) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

/// Where a game currently stands
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TurnState {
    AwaitingPlayerA,
    AwaitingPlayerB,
    Won(Cell),
    Tied,
}

impl TurnState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnState::Won(_) | TurnState::Tied)
    }

    /// The final result, if the game has ended
    pub fn result(&self) -> Option<GameResult> {
        match self {
            TurnState::Won(Cell::PlayerA) => Some(GameResult::PlayerAWin),
            TurnState::Won(Cell::PlayerB) => Some(GameResult::PlayerBWin),
            TurnState::Tied => Some(GameResult::Tie),
            _ => None,
        }
    }
}

/// The result of a finished game, reported to the stats recorder
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameResult {
    PlayerAWin,
    PlayerBWin,
    Tie,
}

#[derive(Debug, Error)]
pub enum TurnError {
    /// A move source broke its contract by choosing a column off the board
    #[error("{player} chose column {column}, columns must be between 0 and {}", WIDTH - 1)]
    InvalidMove { player: String, column: usize },

    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    Board(#[from] DropError),

    /// The move source itself failed, e.g. its input was closed
    #[error(transparent)]
    Source(#[from] anyhow::Error),
}

/// Runs one game: owns the board and asks each player's [`MoveSource`] for
/// moves in turn until someone wins or the board fills up
///
/// A rematch is a new `TurnController`.
#[derive(Clone, Debug)]
pub struct TurnController {
    board: Board,
    state: TurnState,
}

impl TurnController {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: TurnState::AwaitingPlayerA,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Plays a single turn for whichever player is due to move
    ///
    /// A full column is not a turn: the same source is notified and asked
    /// again until its chip lands.
    #[instrument(skip_all, fields(state = ?self.state))]
    pub fn step<A, B>(&mut self, player_a: &mut A, player_b: &mut B) -> Result<TurnState, TurnError>
    where
        A: MoveSource + ?Sized,
        B: MoveSource + ?Sized,
    {
        let chip = match self.state {
            TurnState::AwaitingPlayerA => {
                self.place_chip(Cell::PlayerA, player_a)?;
                Cell::PlayerA
            }
            TurnState::AwaitingPlayerB => {
                self.place_chip(Cell::PlayerB, player_b)?;
                Cell::PlayerB
            }
            TurnState::Won(_) | TurnState::Tied => return Err(TurnError::GameOver),
        };

        self.state = match classify(&self.board, chip) {
            GameOutcome::Win(winner) => TurnState::Won(winner),
            GameOutcome::Tie => TurnState::Tied,
            GameOutcome::InProgress => match chip {
                Cell::PlayerA => TurnState::AwaitingPlayerB,
                _ => TurnState::AwaitingPlayerA,
            },
        };
        debug!(next = ?self.state, "turn finished");

        if let Some(result) = self.state.result() {
            info!(?result, chips = self.board.chip_count(), "game over");
        }
        Ok(self.state)
    }

    /// Steps until the game ends, returning the result
    pub fn play<A, B>(&mut self, player_a: &mut A, player_b: &mut B) -> Result<GameResult, TurnError>
    where
        A: MoveSource + ?Sized,
        B: MoveSource + ?Sized,
    {
        loop {
            if let Some(result) = self.step(player_a, player_b)?.result() {
                return Ok(result);
            }
        }
    }

    // keep asking `source` until its chip lands, returning the row
    fn place_chip<S>(&mut self, chip: Cell, source: &mut S) -> Result<usize, TurnError>
    where
        S: MoveSource + ?Sized,
    {
        loop {
            let column = source.next_column(&self.board)?;
            if column >= WIDTH {
                warn!(player = source.name(), column, "move source returned an invalid column");
                return Err(TurnError::InvalidMove {
                    player: source.name().to_string(),
                    column,
                });
            }

            match self.board.drop(column, chip) {
                Ok(row) => return Ok(row),
                Err(DropError::ColumnFull { column }) => {
                    debug!(player = source.name(), column, "column full, asking again");
                    source.column_full(column)?;
                }
                Err(DropError::OutOfBounds { column, .. }) => {
                    return Err(TurnError::InvalidMove {
                        player: source.name().to_string(),
                        column,
                    })
                }
                Err(err @ DropError::EmptyChip) => return Err(err.into()),
            }
        }
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
