//! Plain-text rendering of boards and scores.
//!
//! The board is laid out with column numbers across the top and row
//! numbers down the left:
//!
//! ```text
//!   0 1 2 x
//! 0|x| | |
//! 1| |o| |
//! 2| | | |
//! y
//! ```

use noughts_engine::{BOARD_SIZE, Board, Mark, PlayerId, Scoreboard};
use tracing::instrument;

/// Symbol drawn for `mark`. The round's opener plays `x`.
pub fn symbol(mark: Mark, first_mover: PlayerId) -> char {
    match mark.owner() {
        None => ' ',
        Some(owner) if owner == first_mover => 'x',
        Some(_) => 'o',
    }
}

/// Draws the board with axis labels.
#[instrument(skip(board))]
pub fn board(board: &Board, first_mover: PlayerId) -> String {
    let mut out = String::from(" ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!(" {}", col));
    }
    out.push_str(" x\n");

    for (row, marks) in board.rows().iter().enumerate() {
        out.push_str(&row.to_string());
        for mark in marks {
            out.push('|');
            out.push(symbol(*mark, first_mover));
        }
        out.push_str("|\n");
    }
    out.push_str("y\n");
    out
}

/// One-line score summary, e.g. `Player 1: 2 wins   |   Player 2: 0 wins   |   Ties: 1`.
#[instrument(skip(scores))]
pub fn scores(scores: &Scoreboard) -> String {
    let mut parts: Vec<String> = scores
        .entries()
        .iter()
        .map(|entry| format!("{}: {} wins", entry.name(), entry.wins()))
        .collect();
    parts.push(format!("Ties: {}", scores.ties()));
    parts.join("   |   ")
}
