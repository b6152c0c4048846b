//! Parsing of the lines typed at the `(play)` prompt.

use derive_more::Display;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Command keywords understood at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Keyword {
    /// Claim a square.
    Move,
    /// Show the board again.
    Board,
    /// Show the scores.
    Score,
    /// List commands.
    #[strum(serialize = "help", serialize = "?")]
    Help,
    /// Leave the game.
    #[strum(serialize = "quit", serialize = "exit")]
    Quit,
}

impl Keyword {
    /// One-line usage text for the help listing.
    pub fn usage(self) -> &'static str {
        match self {
            Keyword::Move => "move <row> <col>   claim a square (or just type <row> <col>)",
            Keyword::Board => "board              show the board",
            Keyword::Score => "score              show wins and ties",
            Keyword::Help => "help               show this list",
            Keyword::Quit => "quit               stop playing",
        }
    }

    /// Usage lines for every keyword.
    pub fn help_text() -> String {
        let mut text = String::from("Commands:\n");
        for keyword in Keyword::iter() {
            text.push_str("  ");
            text.push_str(keyword.usage());
            text.push('\n');
        }
        text
    }
}

/// A fully parsed prompt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Claim the square at `(row, col)`.
    Move {
        /// Row, counted from the top.
        row: usize,
        /// Column, counted from the left.
        col: usize,
    },
    /// Show the board.
    Board,
    /// Show the scores.
    Score,
    /// List commands.
    Help,
    /// Leave the game.
    Quit,
}

/// Why a prompt line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error)]
pub enum CommandError {
    /// Nothing but whitespace.
    #[display("Empty command")]
    Empty,
    /// The first word is not a command.
    #[display("I'm sorry I'm a bit confused. Maybe ask for 'help'?")]
    Unknown,
    /// `move` without exactly two coordinates.
    #[display("Usage: move <row> <col>")]
    MissingCoordinates,
    /// A coordinate is not a number.
    #[display("'{}' is not a row or column number", _0)]
    BadCoordinate(#[error(not(source))] String),
}

impl FromStr for Command {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|w| !w.is_empty())
            .collect();

        let Some((first, rest)) = words.split_first() else {
            return Err(CommandError::Empty);
        };

        // Bare coordinates repeat the move command.
        if first.chars().all(|c| c.is_ascii_digit()) {
            return parse_move(&words);
        }

        let keyword = Keyword::from_str(first).map_err(|_| CommandError::Unknown)?;
        match keyword {
            Keyword::Move => parse_move(rest),
            Keyword::Board => Ok(Command::Board),
            Keyword::Score => Ok(Command::Score),
            Keyword::Help => Ok(Command::Help),
            Keyword::Quit => Ok(Command::Quit),
        }
    }
}

fn parse_move(args: &[&str]) -> Result<Command, CommandError> {
    let [row, col] = args else {
        return Err(CommandError::MissingCoordinates);
    };
    Ok(Command::Move {
        row: parse_coordinate(row)?,
        col: parse_coordinate(col)?,
    })
}

fn parse_coordinate(word: &str) -> Result<usize, CommandError> {
    word.parse()
        .map_err(|_| CommandError::BadCoordinate(word.to_string()))
}
