//! Noughts engine - the rules and score-keeping beneath a tic-tac-toe game.
//!
//! The engine owns no I/O. A front end drives it through [`Session`] and
//! renders what it reads back.
//!
//! # Architecture
//!
//! - **Cell / Mark**: board coordinates and cell occupants
//! - **MoveLedger**: the cells one player has claimed this round
//! - **Board**: a read-only projection of both ledgers
//! - **Player / Roster**: identities, ledgers and lifetime counters
//! - **Round**: one game from empty board to win or tie
//! - **Session**: consecutive rounds between the same two players
//!
//! # Example
//!
//! ```
//! use noughts_engine::{FirstMoverPolicy, MoveOutcome, PlayerId, Session};
//!
//! # fn main() -> Result<(), noughts_engine::MoveError> {
//! let mut session = Session::new(FirstMoverPolicy::AlwaysFirst);
//! session.start_new_round();
//!
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
//!     assert_eq!(session.play(row, col)?, MoveOutcome::Accepted);
//! }
//! assert_eq!(session.play(0, 2)?, MoveOutcome::Won(PlayerId::First));
//! assert_eq!(*session.player(PlayerId::First).wins(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod cell;
mod error;
mod ledger;
mod player;
mod round;
mod session;

// Crate-level exports - Board geometry
pub use board::Board;
pub use cell::{BOARD_SIZE, Cell, Mark, PlayerId};

// Crate-level exports - Errors
pub use error::MoveError;

// Crate-level exports - Players
pub use ledger::MoveLedger;
pub use player::{Player, Roster};

// Crate-level exports - Round state machine
pub use round::{Move, MoveOutcome, Round, RoundStatus};

// Crate-level exports - Session management
pub use session::{FirstMoverPolicy, ScoreEntry, Scoreboard, Session};
