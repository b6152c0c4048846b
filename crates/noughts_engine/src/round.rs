//! One game from empty board to a win or a tie.
//!
//! A round keeps only turn bookkeeping. The players, and therefore the
//! board, belong to the session and are lent to the round for each move.

use super::cell::{Cell, PlayerId};
use super::error::MoveError;
use super::player::Roster;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// A claim made during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, new)]
pub struct Move {
    /// Who moved.
    pub player: PlayerId,
    /// Where.
    pub cell: Cell,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.cell)
    }
}

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Moves are being accepted.
    Active,
    /// The player completed a line.
    Won(PlayerId),
    /// The board filled up with no line.
    Tied,
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move stood and the turn passed to the other player.
    Accepted,
    /// The move completed a line for this player.
    Won(PlayerId),
    /// The move filled the board without completing a line.
    Tied,
}

/// Turn order and outcome of a single game.
///
/// The acting player on turn `k` is always `(first_mover + k) mod 2`.
/// Once the status leaves [`RoundStatus::Active`] the round is closed
/// for good.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Round {
    /// Who acts on turn 0.
    first_mover: PlayerId,
    /// Number of moves accepted so far.
    turn: usize,
    /// Current state.
    status: RoundStatus,
    /// Accepted moves, oldest first.
    history: Vec<Move>,
}

impl Round {
    /// Opens a round with `first_mover` to act.
    #[instrument]
    pub fn new(first_mover: PlayerId) -> Self {
        info!(%first_mover, "Round started");
        Self {
            first_mover,
            turn: 0,
            status: RoundStatus::Active,
            history: Vec::new(),
        }
    }

    /// The player whose move is awaited.
    pub fn acting_player(&self) -> PlayerId {
        PlayerId::from_index(self.first_mover.index() + self.turn)
    }

    /// The player not on move.
    pub fn waiting_player(&self) -> PlayerId {
        self.acting_player().opponent()
    }

    /// Checks if the round has been won or tied.
    pub fn is_terminal(&self) -> bool {
        self.status != RoundStatus::Active
    }

    /// The most recent accepted move.
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Plays `cell` for the acting player.
    ///
    /// A win bumps the mover's `wins`; a tie bumps both players' `ties`.
    /// On any error nothing changes: same turn, same ledgers, same status.
    ///
    /// # Errors
    ///
    /// - [`MoveError::MoveAfterTerminal`] if the round is already over
    /// - [`MoveError::SquareOccupied`] if either player holds `cell`
    #[instrument(skip(self, roster, cell), fields(cell = %cell, turn = self.turn))]
    pub fn submit_move(
        &mut self,
        roster: &mut Roster,
        cell: Cell,
    ) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            warn!(status = ?self.status, "Move submitted to a finished round");
            return Err(MoveError::MoveAfterTerminal);
        }

        if roster.is_claimed(cell) {
            warn!("Square already taken");
            return Err(MoveError::SquareOccupied(cell));
        }

        let mover = self.acting_player();
        let won = roster[mover].make_move(cell)?;
        self.history.push(Move::new(mover, cell));

        if won {
            roster[mover].record_win();
            self.status = RoundStatus::Won(mover);
            info!(winner = %mover, moves = self.history.len(), "Round won");
            return Ok(MoveOutcome::Won(mover));
        }

        if roster.board().is_full() {
            for id in PlayerId::ALL {
                roster[id].record_tie();
            }
            self.status = RoundStatus::Tied;
            info!(moves = self.history.len(), "Round tied");
            return Ok(MoveOutcome::Tied);
        }

        self.turn += 1;
        Ok(MoveOutcome::Accepted)
    }
}
