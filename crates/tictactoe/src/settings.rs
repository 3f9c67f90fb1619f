//! User settings loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::Player;
use tracing::{debug, info, instrument};

/// Which presentation style drives the engine.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ViewKind {
    /// Imperative view that pulls a snapshot after each call.
    #[default]
    Bound,
    /// Declarative view fed by engine change notifications.
    Reactive,
}

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Label shown for player X.
    #[serde(default = "default_player_x_label")]
    player_x_label: String,

    /// Label shown for player O.
    #[serde(default = "default_player_o_label")]
    player_o_label: String,

    /// Presentation style.
    #[serde(default)]
    view: ViewKind,
}

fn default_player_x_label() -> String {
    "X".to_string()
}

fn default_player_o_label() -> String {
    "O".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_x_label: default_player_x_label(),
            player_o_label: default_player_o_label(),
            view: ViewKind::default(),
        }
    }
}

impl Settings {
    /// Creates settings with default labels and the bound view.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(view = %settings.view, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text. Missing keys take their defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        if settings.player_x_label.trim().is_empty() || settings.player_o_label.trim().is_empty() {
            return Err(ConfigError::new("Player labels must not be empty".to_string()));
        }
        if settings.player_x_label == settings.player_o_label {
            return Err(ConfigError::new(format!(
                "Player labels must differ, both are {:?}",
                settings.player_x_label
            )));
        }

        Ok(settings)
    }

    /// Loads from `path` when given, otherwise returns defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No settings file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the presentation style.
    pub fn with_view(mut self, view: ViewKind) -> Self {
        self.view = view;
        self
    }

    /// Label shown for `player`.
    pub fn label(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_x_label,
            Player::O => &self.player_o_label,
        }
    }
}

/// Configuration error.
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
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
