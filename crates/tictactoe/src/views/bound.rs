//! Imperative view: call the engine, then pull and rebind every label.

use super::GameView;
use crate::labels::{EndOfRoundPrompt, UiState};
use crate::settings::Settings;
use tictactoe_core::{CellError, GameEngine};
use tracing::{debug, instrument};

/// View that owns its engine and refreshes its labels after each call.
#[derive(Debug)]
pub struct BoundView {
    engine: GameEngine,
    settings: Settings,
    bound: UiState,
}

impl BoundView {
    /// Creates a view over a fresh engine.
    #[instrument(skip(settings))]
    pub fn new(settings: Settings) -> Self {
        let engine = GameEngine::new();
        let bound = UiState::from_snapshot(&engine.snapshot(), &settings);
        Self {
            engine,
            settings,
            bound,
        }
    }

    /// Read-only access to the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    fn rebind(&mut self) {
        self.bound = UiState::from_snapshot(&self.engine.snapshot(), &self.settings);
    }
}

impl GameView for BoundView {
    #[instrument(skip(self))]
    fn tap(&mut self, row: usize, col: usize) -> Result<Option<EndOfRoundPrompt>, CellError> {
        let was_over = self.engine.terminal().is_over();
        let terminal = self.engine.apply_move(row, col)?;
        self.rebind();

        if !was_over && terminal.is_over() {
            debug!(%terminal, "Round ended, showing prompt");
            return Ok(EndOfRoundPrompt::for_terminal(terminal, &self.settings));
        }
        Ok(None)
    }

    #[instrument(skip(self))]
    fn press_play_again(&mut self) {
        self.engine.play_again();
        self.rebind();
    }

    #[instrument(skip(self))]
    fn press_reset(&mut self) {
        self.engine.reset_all();
        self.rebind();
    }

    fn ui_state(&mut self) -> UiState {
        self.bound.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_rebinds_labels() {
        let mut view = BoundView::new(Settings::default());
        assert_eq!(view.tap(0, 0), Ok(None));

        let state = view.ui_state();
        assert_eq!(state.cell(0, 0), "X");
        assert_eq!(state.turn_text(), "O Turn");
    }

    #[test]
    fn test_prompt_only_on_the_ending_tap() {
        let mut view = BoundView::new(Settings::default());
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
            assert_eq!(view.tap(row, col), Ok(None));
        }

        let prompt = view.tap(0, 2).unwrap().expect("round ends");
        assert_eq!(prompt.title(), "Player X won! 🎉");

        // Taps after the round ended are ignored and do not re-prompt.
        assert_eq!(view.tap(2, 0), Ok(None));
        assert_eq!(view.ui_state().cell(2, 0), "");
    }

    #[test]
    fn test_out_of_range_tap_is_error() {
        let mut view = BoundView::new(Settings::default());
        assert_eq!(view.tap(4, 0), Err(CellError::new(4, 0)));
    }
}
