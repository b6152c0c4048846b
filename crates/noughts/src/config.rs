//! Game settings loaded from TOML and command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_engine::{FirstMoverPolicy, Roster, Session};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a play session.
///
/// Every key is optional in the file:
///
/// ```toml
/// first_mover = "alternate"
/// player_one = "Ada"
/// player_two = "Grace"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Who opens each round.
    #[serde(default)]
    first_mover: FirstMoverPolicy,

    /// Display name of the first seat.
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Display name of the second seat.
    #[serde(default = "default_player_two")]
    player_two: String,
}

#[instrument]
fn default_player_one() -> String {
    "Player 1".to_string()
}

#[instrument]
fn default_player_two() -> String {
    "Player 2".to_string()
}

impl Settings {
    /// Creates settings with every default applied.
    #[instrument]
    pub fn new() -> Self {
        Self {
            first_mover: FirstMoverPolicy::default(),
            player_one: default_player_one(),
            player_two: default_player_two(),
        }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        info!(first_mover = %settings.first_mover, "Settings loaded successfully");
        Ok(settings)
    }

    /// Loads from `path` when given, otherwise returns defaults.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::new()),
        }
    }

    /// Replaces the first-mover policy when `policy` is set.
    pub fn with_first_mover(mut self, policy: Option<FirstMoverPolicy>) -> Self {
        if let Some(policy) = policy {
            self.first_mover = policy;
        }
        self
    }

    /// Replaces the first seat's name when `name` is set.
    pub fn with_player_one(mut self, name: Option<String>) -> Self {
        if let Some(name) = name {
            self.player_one = name;
        }
        self
    }

    /// Replaces the second seat's name when `name` is set.
    pub fn with_player_two(mut self, name: Option<String>) -> Self {
        if let Some(name) = name {
            self.player_two = name;
        }
        self
    }

    /// Opens a session with these settings. No round is started yet.
    #[instrument(skip(self))]
    pub fn session(&self) -> Session {
        let roster = Roster::with_names(self.player_one.clone(), self.player_two.clone());
        Session::with_roster(roster, self.first_mover)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
