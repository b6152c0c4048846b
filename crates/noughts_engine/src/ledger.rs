//! Per-player record of claimed cells.

use super::cell::{BOARD_SIZE, Cell};
use super::error::MoveError;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::instrument;

/// The set of cells one player has claimed in the live round.
///
/// The ledger only guards against claiming the same cell twice for itself.
/// Keeping the two players' ledgers disjoint is the round's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MoveLedger {
    cells: BTreeSet<Cell>,
}

impl MoveLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a claim on `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if this ledger already holds
    /// the cell; the ledger is unchanged.
    #[instrument(skip(self, cell), fields(cell = %cell))]
    pub fn claim(&mut self, cell: Cell) -> Result<(), MoveError> {
        if !self.cells.insert(cell) {
            return Err(MoveError::SquareOccupied(cell));
        }
        Ok(())
    }

    /// Checks whether claiming `cell` completed a line.
    ///
    /// Only lines through `cell` are inspected: its row, its column, and
    /// each diagonal it actually lies on. Any other line was already
    /// complete before this move, which would have ended the round earlier.
    #[instrument(skip(self, cell), fields(cell = %cell))]
    pub fn is_winning_after(&self, cell: Cell) -> bool {
        let row = (0..BOARD_SIZE).all(|col| self.holds(cell.row, col));
        let col = (0..BOARD_SIZE).all(|row| self.holds(row, cell.col));
        let main = cell.on_main_diagonal() && (0..BOARD_SIZE).all(|i| self.holds(i, i));
        let anti = cell.on_anti_diagonal()
            && (0..BOARD_SIZE).all(|i| self.holds(i, BOARD_SIZE - 1 - i));
        row || col || main || anti
    }

    /// Forgets every claim.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells.clear();
    }

    /// Checks if `cell` has been claimed.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of claimed cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Checks if nothing has been claimed.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Claimed cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    fn holds(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&Cell { row, col })
    }
}
