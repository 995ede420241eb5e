//! Drawing the board for a console player
//!
//! Rows are labelled `A` (top) to `F` (bottom) and columns `1` to `7`, the
//! numbers a human types to choose a column.

use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::Write;

use crate::{board::Board, board::Cell, HEIGHT, WIDTH};

/// The character drawn for a cell
pub fn chip_char(cell: Cell) -> char {
    match cell {
        Cell::PlayerA => 'O',
        Cell::PlayerB => 'X',
        Cell::Empty => ' ',
    }
}

fn separator() -> String {
    format!("  {}\n", "-".repeat(WIDTH * 4 + 1))
}

fn row_label(row: usize) -> char {
    (b'A' + row as u8) as char
}

fn column_headers() -> String {
    let cols: String = (1..=WIDTH).map(|x| format!("  {} ", x)).collect();
    format!("  {}\n", cols)
}

/// Renders the board as plain text
pub fn ascii(board: &Board) -> String {
    let mut out = separator();
    for (row, cells) in board.rows().enumerate() {
        out.push(row_label(row));
        out.push(' ');
        for &cell in cells.iter() {
            out.push_str("| ");
            out.push(chip_char(cell));
            out.push(' ');
        }
        out.push_str("|\n");
        out.push_str(&separator());
    }
    out.push_str(&column_headers());
    out
}

/// Writes the board with coloured chips
pub fn display<W: Write>(board: &Board, out: &mut W) -> Result<()> {
    out.queue(PrintStyledContent(style(separator())))?;
    for row in 0..HEIGHT {
        out.queue(PrintStyledContent(style(format!("{} ", row_label(row)))))?;
        for column in 0..WIDTH {
            let cell = board.cell_at(row, column)?;
            out.queue(PrintStyledContent(style("| ")))?
                .queue(PrintStyledContent(
                    style(chip_char(cell))
                        .attribute(Attribute::Bold)
                        .with(match cell {
                            Cell::PlayerA => Color::Red,
                            Cell::PlayerB => Color::Yellow,
                            Cell::Empty => Color::Reset,
                        }),
                ))?
                .queue(PrintStyledContent(style(" ")))?;
        }
        out.queue(PrintStyledContent(style("|\n")))?
            .queue(PrintStyledContent(style(separator())))?;
    }
    out.queue(PrintStyledContent(style(column_headers())))?;
    out.flush()?;
    Ok(())
}
