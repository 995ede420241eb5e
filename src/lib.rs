//! A Connect 4 engine for playing a human against a bot
//!
//! The engine is split into a gravity-respecting [`board::Board`], pure win/tie
//! detection in [`win`], and a [`turn::TurnController`] state machine which asks
//! injected [`turn::MoveSource`]s for columns until the game ends.
//!
//! # Basic Usage
//!
//! ```
//! use connect_four::{
//!     source::ScriptedMoveSource,
//!     turn::{GameResult, TurnController},
//! };
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut human = ScriptedMoveSource::new(vec![0, 0, 0, 0]);
//! let mut bot = ScriptedMoveSource::new(vec![1, 1, 1]);
//!
//! let mut controller = TurnController::new();
//! let result = controller.play(&mut human, &mut bot)?;
//!
//! assert_eq!(result, GameResult::PlayerAWin);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod win;

pub mod turn;

pub mod source;

pub mod render;

pub mod stats;

pub mod prompt;


/// The width of the game board in columns
pub const WIDTH: usize = 7;

/// The height of the game board in rows
pub const HEIGHT: usize = 6;

/// The number of chips in a line needed to win
pub const CONNECT: usize = 4;

/// The number of chips on a completely filled board
pub const CELL_COUNT: usize = WIDTH * HEIGHT;

// a winning line must fit on the board in every direction the detector scans
const_assert!(CONNECT <= WIDTH && CONNECT <= HEIGHT);
// row labels are single letters starting at 'A'
const_assert!(HEIGHT <= 26);
// column headers are single digits starting at 1
const_assert!(WIDTH <= 9);
