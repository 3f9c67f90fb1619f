//! Tic-tac-toe game engine.
//!
//! Pure game-state logic for a two-player, single-device game: move
//! validation, win/tie detection, turn alternation and score tallying.
//! Nothing here renders or reads input. A View layer maps taps to
//! `(row, col)` coordinates, calls into [`GameEngine`], and renders the
//! [`GameSnapshot`] it gets back.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, Player, TerminalState};
//!
//! # fn main() -> Result<(), tictactoe_core::CellError> {
//! let mut engine = GameEngine::new();
//! engine.apply_move(0, 0)?; // X
//! engine.apply_move(1, 1)?; // O
//! engine.apply_move(0, 1)?; // X
//! engine.apply_move(2, 2)?; // O
//! let terminal = engine.apply_move(0, 2)?; // X completes the top row
//!
//! assert_eq!(terminal, TerminalState::Won(Player::X));
//! assert_eq!(engine.score().wins(Player::X), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod shared;
mod types;

pub use action::Move;
pub use engine::{GameEngine, SubscriptionId};
pub use error::CellError;
pub use position::Position;
pub use session::{GameSnapshot, Score, TerminalState};
pub use shared::SharedEngine;
pub use types::{Board, Player, Square};
