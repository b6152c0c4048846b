//! The interactive `(play)` loop.
//!
//! Reads one command per line, drives the session, and writes everything
//! the players see. Generic over its streams so it can run against
//! in-memory buffers.

use crate::command::{Command, CommandError, Keyword};
use crate::render;
use anyhow::Result;
use noughts_engine::{MoveError, MoveOutcome, PlayerId, Session};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Prompt shown before each command.
pub const PROMPT: &str = "(play) ";

/// Drives a [`Session`] from a line-based input.
#[derive(Debug)]
pub struct PlayLoop<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PlayLoop<R, W> {
    /// Creates a loop over `session`. No round is started until [`PlayLoop::run`].
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    /// Plays rounds until the players quit or input runs out.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "TIC TAC TOE")?;
        writeln!(self.output)?;
        self.session.start_new_round();
        self.show_scores()?;
        self.show_board()?;

        let mut line = String::new();
        while !self.session.is_quit() {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                self.session.quit();
                break;
            }

            match line.parse::<Command>() {
                Ok(command) => self.dispatch(command)?,
                Err(CommandError::Empty) => {}
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }

        writeln!(self.output, "Thanks for playing!")?;
        self.show_scores()?;
        Ok(())
    }

    /// Consumes the loop, returning the session.
    pub fn into_session(self) -> Session {
        self.session
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Move { row, col } => self.play(row, col)?,
            Command::Board => self.show_board()?,
            Command::Score => self.show_scores()?,
            Command::Help => write!(self.output, "{}", Keyword::help_text())?,
            Command::Quit => self.session.quit(),
        }
        Ok(())
    }

    #[instrument(skip(self))]
    fn play(&mut self, row: usize, col: usize) -> Result<()> {
        let outcome = match self.session.play(row, col) {
            Ok(outcome) => outcome,
            Err(MoveError::SquareOccupied(_)) => {
                writeln!(self.output, "Square is not open")?;
                return Ok(());
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                writeln!(self.output, "{}", e)?;
                return Ok(());
            }
        };

        self.echo_last_move()?;
        match outcome {
            MoveOutcome::Accepted => self.show_board()?,
            MoveOutcome::Won(winner) => {
                self.show_grid()?;
                let name = self.session.player(winner).name().clone();
                info!(%name, "Announcing winner");
                writeln!(self.output, "{} wins!", name)?;
                self.next_round()?;
            }
            MoveOutcome::Tied => {
                self.show_grid()?;
                writeln!(self.output, "Cat's game!")?;
                self.next_round()?;
            }
        }
        Ok(())
    }

    /// Writes the move just played, before its round is replaced.
    fn echo_last_move(&mut self) -> Result<()> {
        let Some(last) = self.session.round().and_then(|r| r.last_move()).copied() else {
            return Ok(());
        };
        let name = self.session.player(last.player).name().clone();
        writeln!(self.output, "{} took {}", name, last.cell)?;
        Ok(())
    }

    fn next_round(&mut self) -> Result<()> {
        writeln!(self.output)?;
        self.show_scores()?;
        self.session.start_new_round();
        self.show_board()
    }

    fn opener(&self) -> PlayerId {
        self.session
            .round()
            .map(|round| *round.first_mover())
            .unwrap_or(PlayerId::First)
    }

    fn show_grid(&mut self) -> Result<()> {
        let drawn = render::board(&self.session.board(), self.opener());
        writeln!(self.output)?;
        write!(self.output, "{}", drawn)?;
        Ok(())
    }

    fn show_board(&mut self) -> Result<()> {
        self.show_grid()?;
        if let Some(round) = self.session.round() {
            let mover = round.acting_player();
            let symbol = if mover == *round.first_mover() { 'x' } else { 'o' };
            let name = self.session.player(mover).name().clone();
            writeln!(self.output, "{} to move ({})", name, symbol)?;
        }
        Ok(())
    }

    fn show_scores(&mut self) -> Result<()> {
        writeln!(self.output, "{}", render::scores(&self.session.scores()))?;
        Ok(())
    }
}
