//! Read-only board view built from the players' ledgers.

use super::cell::{BOARD_SIZE, Cell, Mark, PlayerId};
use super::ledger::MoveLedger;
use serde::Serialize;
use tracing::instrument;

/// Snapshot of every cell's mark.
///
/// A board is never edited directly. It is projected from the two move
/// ledgers whenever someone asks for it, so it cannot drift out of sync
/// with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    marks: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            marks: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Projects both players' ledgers onto a board.
    ///
    /// `ledgers` is indexed by [`PlayerId::index`].
    #[instrument(skip(ledgers))]
    pub fn project(ledgers: [&MoveLedger; 2]) -> Self {
        let mut board = Self::new();
        for player in PlayerId::ALL {
            for cell in ledgers[player.index()].cells() {
                board.marks[cell.row][cell.col] = Mark::of(player);
            }
        }
        board
    }

    /// Returns the mark at `cell`.
    pub fn cell_at(&self, cell: Cell) -> Mark {
        self.marks[cell.row][cell.col]
    }

    /// Checks if no player has claimed `cell`.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.cell_at(cell).is_empty()
    }

    /// Checks if every cell has been claimed.
    pub fn is_full(&self) -> bool {
        self.marks.iter().flatten().all(|mark| !mark.is_empty())
    }

    /// Unclaimed cells in row-major order.
    pub fn open_cells(&self) -> Vec<Cell> {
        Cell::all().filter(|cell| self.is_open(*cell)).collect()
    }

    /// Rows of marks, top to bottom.
    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.marks
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
