//! Noughts - a text front end for the noughts engine.
//!
//! # Architecture
//!
//! - **Cli / Settings**: command-line flags layered over an optional TOML file
//! - **Command**: parsing of lines typed at the `(play)` prompt
//! - **Render**: board and score text
//! - **PlayLoop**: reads commands, drives the session, prints results
//!
//! # Example
//!
//! ```
//! use noughts::{PlayLoop, Settings};
//!
//! # fn main() -> anyhow::Result<()> {
//! let input = "move 0 0\n1 1\nquit\n".as_bytes();
//! let mut output = Vec::new();
//!
//! PlayLoop::new(Settings::new().session(), input, &mut output).run()?;
//!
//! let text = String::from_utf8(output)?;
//! assert!(text.contains("Thanks for playing!"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod command;
mod config;
mod play;
mod render;

// Crate-level exports - Command line
pub use cli::{Cli, FirstMover};

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Prompt commands
pub use command::{Command, CommandError, Keyword};

// Crate-level exports - Play loop
pub use play::{PROMPT, PlayLoop};

// Crate-level exports - Rendering
pub use render::{board as render_board, scores as render_scores, symbol};
