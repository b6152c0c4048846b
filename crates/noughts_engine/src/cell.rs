//! Board coordinates, player identities and cell marks.

use super::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 3;

/// One of the two seats at the table.
///
/// Identity is positional: `First` is player index 0, `Second` is index 1.
/// Who actually moves first in a round is decided separately by the
/// session's first-mover policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    /// Player index 0.
    First,
    /// Player index 1.
    Second,
}

impl PlayerId {
    /// Both seats, in index order.
    pub const ALL: [PlayerId; 2] = [PlayerId::First, PlayerId::Second];

    /// Returns the numeric index (0 or 1).
    pub fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    /// Creates an identity from an index, wrapping modulo 2.
    pub fn from_index(index: usize) -> Self {
        if index % 2 == 0 {
            PlayerId::First
        } else {
            PlayerId::Second
        }
    }

    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.index())
    }
}

/// Occupant of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has claimed the cell.
    #[default]
    Empty,
    /// Claimed by [`PlayerId::First`].
    First,
    /// Claimed by [`PlayerId::Second`].
    Second,
}

impl Mark {
    /// The mark a player leaves on the cells it claims.
    pub fn of(player: PlayerId) -> Self {
        match player {
            PlayerId::First => Mark::First,
            PlayerId::Second => Mark::Second,
        }
    }

    /// Returns the player holding this cell, if any.
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Mark::Empty => None,
            Mark::First => Some(PlayerId::First),
            Mark::Second => Some(PlayerId::Second),
        }
    }

    /// Checks if the cell is unclaimed.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

/// A `(row, col)` position on the board, both in `[0, BOARD_SIZE)`.
///
/// The only public constructor validates bounds, so every `Cell` in
/// circulation is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Cell {
    pub(crate) row: usize,
    pub(crate) col: usize,
}

impl Cell {
    /// Creates a cell, rejecting coordinates that fall off the board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if either coordinate is
    /// `BOARD_SIZE` or larger.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Row index (y).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (x).
    pub fn col(self) -> usize {
        self.col
    }

    /// Whether the cell lies on the diagonal where `row == col`.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// Whether the cell lies on the diagonal where `row + col == BOARD_SIZE - 1`.
    pub fn on_anti_diagonal(self) -> bool {
        self.row + self.col == BOARD_SIZE - 1
    }

    /// Every cell on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Cell { row, col }))
    }
}
