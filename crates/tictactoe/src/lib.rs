//! Two-player tic-tac-toe front ends.
//!
//! Thin view adapters over [`tictactoe_core`]: an imperative
//! [`BoundView`] and a reactive [`ReactiveView`], the labels both
//! render, user settings and a line-based console driver.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod labels;
mod settings;
mod views;

pub use cli::Cli;
pub use console::{ConsoleCommand, InputError, render, run};
pub use labels::{EndOfRoundPrompt, PLAY_AGAIN, UiState};
pub use settings::{ConfigError, Settings, ViewKind};
pub use views::{BoundView, GameView, ReactiveView};
