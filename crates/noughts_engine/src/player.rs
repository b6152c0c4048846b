//! Players and the two-seat roster they sit in.

use super::board::Board;
use super::cell::{Cell, PlayerId};
use super::error::MoveError;
use super::ledger::MoveLedger;
use derive_getters::Getters;
use serde::Serialize;
use std::ops::{Index, IndexMut};
use tracing::{debug, instrument};

/// A player: identity, this round's claims and lifetime counters.
///
/// `wins` and `ties` survive every round of a session. The ledger is
/// cleared whenever the session starts a new round.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Player {
    /// Seat at the table.
    id: PlayerId,
    /// Display name.
    name: String,
    /// Cells claimed in the live round.
    ledger: MoveLedger,
    /// Rounds won.
    wins: u32,
    /// Rounds tied.
    ties: u32,
}

impl Player {
    /// Creates a player named after its seat ("Player 1", "Player 2").
    #[instrument]
    pub fn new(id: PlayerId) -> Self {
        Self::with_name(id, default_name(id))
    }

    /// Creates a player with a custom display name.
    #[instrument(skip(name))]
    pub fn with_name(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ledger: MoveLedger::new(),
            wins: 0,
            ties: 0,
        }
    }

    /// Claims `cell` and reports whether that completed a line.
    ///
    /// Only this player's ledger is touched.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if this player already holds
    /// the cell.
    #[instrument(skip(self, cell), fields(player = %self.id, cell = %cell))]
    pub fn make_move(&mut self, cell: Cell) -> Result<bool, MoveError> {
        self.ledger.claim(cell)?;
        let won = self.ledger.is_winning_after(cell);
        debug!(won, "Move recorded");
        Ok(won)
    }

    pub(crate) fn record_win(&mut self) {
        self.wins += 1;
    }

    pub(crate) fn record_tie(&mut self) {
        self.ties += 1;
    }

    pub(crate) fn clear_ledger(&mut self) {
        self.ledger.reset();
    }
}

/// Default display name for a seat.
#[instrument]
pub(crate) fn default_name(id: PlayerId) -> String {
    format!("Player {}", id.index() + 1)
}

/// The two players of a session, indexable by [`PlayerId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    players: [Player; 2],
}

impl Roster {
    /// Seats two players with default names.
    #[instrument]
    pub fn new() -> Self {
        Self {
            players: PlayerId::ALL.map(Player::new),
        }
    }

    /// Seats two players with the given names, first seat first.
    #[instrument(skip(first, second))]
    pub fn with_names(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            players: [
                Player::with_name(PlayerId::First, first),
                Player::with_name(PlayerId::Second, second),
            ],
        }
    }

    /// Both players in seat order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Checks if either player holds `cell`.
    pub fn is_claimed(&self, cell: Cell) -> bool {
        self.players.iter().any(|p| p.ledger.contains(cell))
    }

    /// Projects both ledgers onto a board.
    pub fn board(&self) -> Board {
        Board::project([&self.players[0].ledger, &self.players[1].ledger])
    }

    /// Clears both players' ledgers, keeping their counters.
    #[instrument(skip(self))]
    pub fn reset_ledgers(&mut self) {
        for player in &mut self.players {
            player.clear_ledger();
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }
}

impl IndexMut<PlayerId> for Roster {
    fn index_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }
}
