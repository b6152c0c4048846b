//! Consecutive rounds between the same two players.

use super::board::Board;
use super::cell::{Cell, PlayerId};
use super::error::MoveError;
use super::player::{Player, Roster};
use super::round::{MoveOutcome, Round};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Decides who opens each round.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FirstMoverPolicy {
    /// Player 1 opens every round.
    #[default]
    AlwaysFirst,
    /// Seats take turns opening, starting with player 1.
    Alternate,
}

impl FirstMoverPolicy {
    /// Who opens the round that follows `rounds_completed` finished rounds.
    pub fn first_mover(self, rounds_completed: u32) -> PlayerId {
        match self {
            FirstMoverPolicy::AlwaysFirst => PlayerId::First,
            FirstMoverPolicy::Alternate => PlayerId::from_index(rounds_completed as usize),
        }
    }
}

/// One player's line on the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct ScoreEntry {
    /// Display name.
    name: String,
    /// Rounds won.
    wins: u32,
}

/// Lifetime tallies for a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Scoreboard {
    /// Players in seat order.
    entries: Vec<ScoreEntry>,
    /// Rounds tied. Both players always share this count.
    ties: u32,
    /// Rounds that have been replaced by a newer one.
    rounds_completed: u32,
}

/// Two persistent players and the round they are playing.
///
/// Win and tie counters are bumped by the round itself; the session only
/// decides when a round ends its life and a fresh one begins.
#[derive(Debug, Clone)]
pub struct Session {
    roster: Roster,
    round: Option<Round>,
    rounds_completed: u32,
    quit: bool,
    policy: FirstMoverPolicy,
}

impl Session {
    /// Creates a session with default player names and no round yet.
    #[instrument]
    pub fn new(policy: FirstMoverPolicy) -> Self {
        Self::with_roster(Roster::new(), policy)
    }

    /// Creates a session around an existing roster.
    #[instrument(skip(roster))]
    pub fn with_roster(roster: Roster, policy: FirstMoverPolicy) -> Self {
        info!(%policy, "Creating new session");
        Self {
            roster,
            round: None,
            rounds_completed: 0,
            quit: false,
            policy,
        }
    }

    /// Discards the live round, if any, and opens a fresh one.
    ///
    /// Discarding clears both ledgers and counts the old round as
    /// completed. Win and tie counters are left alone.
    #[instrument(skip(self), fields(rounds_completed = self.rounds_completed))]
    pub fn start_new_round(&mut self) -> &Round {
        if self.round.take().is_some() {
            self.roster.reset_ledgers();
            self.rounds_completed += 1;
            debug!(rounds_completed = self.rounds_completed, "Previous round discarded");
        }
        let first_mover = self.policy.first_mover(self.rounds_completed);
        self.round.insert(Round::new(first_mover))
    }

    /// Plays `cell` in the live round.
    ///
    /// # Errors
    ///
    /// [`MoveError::NoActiveRound`] before the first round is started,
    /// otherwise whatever [`Round::submit_move`] rejects.
    #[instrument(skip(self, cell), fields(cell = %cell))]
    pub fn submit_move(&mut self, cell: Cell) -> Result<MoveOutcome, MoveError> {
        let round = self.round.as_mut().ok_or(MoveError::NoActiveRound)?;
        round.submit_move(&mut self.roster, cell)
    }

    /// Plays `(row, col)` in the live round.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for coordinates off the board, otherwise
    /// as [`Session::submit_move`].
    #[instrument(skip(self))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        let cell = Cell::new(row, col)?;
        self.submit_move(cell)
    }

    /// Asks the play loop to stop after the current round.
    #[instrument(skip(self))]
    pub fn quit(&mut self) {
        info!(rounds_completed = self.rounds_completed, "Session quitting");
        self.quit = true;
    }

    /// Checks if [`Session::quit`] has been called.
    pub fn is_quit(&self) -> bool {
        self.quit
    }

    /// The live round.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Both players.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// One player.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.roster[id]
    }

    /// Rounds discarded so far.
    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    /// The first-mover policy in force.
    pub fn policy(&self) -> FirstMoverPolicy {
        self.policy
    }

    /// Board of the live round. Empty when no round has started.
    pub fn board(&self) -> Board {
        self.roster.board()
    }

    /// Lifetime tallies.
    #[instrument(skip(self))]
    pub fn scores(&self) -> Scoreboard {
        Scoreboard {
            entries: self
                .roster
                .iter()
                .map(|p| ScoreEntry {
                    name: p.name().clone(),
                    wins: *p.wins(),
                })
                .collect(),
            ties: *self.roster[PlayerId::First].ties(),
            rounds_completed: self.rounds_completed,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(FirstMoverPolicy::default())
    }
}
