//! Move rejection reasons.

use super::cell::Cell;

/// Error that can occur when submitting a move.
///
/// Every variant is recoverable: a rejected move leaves the round exactly
/// as it was and the same player is still to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate is not on the board.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square is already claimed by one of the players.
    #[display("Square {_0} is not open")]
    SquareOccupied(Cell),

    /// The round has already been won or tied.
    #[display("Round is already over")]
    MoveAfterTerminal,

    /// No round has been started in this session.
    #[display("No round in progress")]
    NoActiveRound,
}

impl std::error::Error for MoveError {}
