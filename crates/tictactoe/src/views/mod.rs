//! View adapters over the engine.
//!
//! Two presentation styles share one set of rules: [`BoundView`] calls
//! the engine and pulls a snapshot afterwards, [`ReactiveView`] renders
//! whatever the engine last pushed to it. Both expose [`GameView`] so a
//! front end can drive either.

mod bound;
mod reactive;

pub use bound::BoundView;
pub use reactive::ReactiveView;

use crate::labels::{EndOfRoundPrompt, UiState};
use tictactoe_core::CellError;

/// Operations a front end performs on a view.
pub trait GameView {
    /// Handles a tap on `(row, col)`.
    ///
    /// Returns the end-of-round prompt when this tap ended the round.
    fn tap(&mut self, row: usize, col: usize) -> Result<Option<EndOfRoundPrompt>, CellError>;

    /// Handles the prompt's "Play Again" action.
    fn press_play_again(&mut self);

    /// Handles the reset button.
    fn press_reset(&mut self);

    /// Current labels.
    fn ui_state(&mut self) -> UiState;
}
