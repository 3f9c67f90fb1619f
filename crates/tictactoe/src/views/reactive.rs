//! Declarative view: render the latest snapshot the engine pushed.

use super::GameView;
use crate::labels::{EndOfRoundPrompt, UiState};
use crate::settings::Settings;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tictactoe_core::{CellError, GameSnapshot, SharedEngine, SubscriptionId};
use tracing::{debug, instrument, warn};

/// Slot holding the newest unread snapshot. Older pushes are overwritten.
type Pending = Arc<Mutex<Option<GameSnapshot>>>;

/// View subscribed to an engine's change notifications.
///
/// The engine pushes a snapshot on every change into a single slot; the
/// view only ever keeps the newest one, however long it goes unread, and
/// derives its labels from it.
#[derive(Debug)]
pub struct ReactiveView {
    engine: SharedEngine,
    settings: Settings,
    pending: Pending,
    subscription: SubscriptionId,
    latest: GameSnapshot,
}

impl ReactiveView {
    /// Subscribes a new view to `engine`.
    #[instrument(skip(engine, settings))]
    pub fn attach(engine: SharedEngine, settings: Settings) -> Self {
        let pending: Pending = Arc::default();
        let slot = Arc::clone(&pending);
        let subscription = engine.subscribe(move |snapshot: &GameSnapshot| {
            *lock(&slot) = Some(snapshot.clone());
        });
        let latest = engine.snapshot();
        debug!(%subscription, "Reactive view attached");
        Self {
            engine,
            settings,
            pending,
            subscription,
            latest,
        }
    }

    /// Picks up the newest pushed snapshot, if any, and returns it.
    pub fn latest(&mut self) -> &GameSnapshot {
        self.refresh();
        &self.latest
    }

    fn refresh(&mut self) {
        if let Some(snapshot) = lock(&self.pending).take() {
            self.latest = snapshot;
        }
    }
}

// The slot is a plain overwrite, so a poisoned lock still holds a whole snapshot.
fn lock(pending: &Pending) -> MutexGuard<'_, Option<GameSnapshot>> {
    pending.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
        warn!("Snapshot slot poisoned, recovering");
        poisoned.into_inner()
    })
}

impl GameView for ReactiveView {
    #[instrument(skip(self))]
    fn tap(&mut self, row: usize, col: usize) -> Result<Option<EndOfRoundPrompt>, CellError> {
        let was_over = self.latest().terminal().is_over();
        self.engine.apply_move(row, col)?;
        let terminal = *self.latest().terminal();

        if !was_over && terminal.is_over() {
            return Ok(EndOfRoundPrompt::for_terminal(terminal, &self.settings));
        }
        Ok(None)
    }

    #[instrument(skip(self))]
    fn press_play_again(&mut self) {
        self.engine.play_again();
    }

    #[instrument(skip(self))]
    fn press_reset(&mut self) {
        self.engine.reset_all();
    }

    fn ui_state(&mut self) -> UiState {
        self.refresh();
        UiState::from_snapshot(&self.latest, &self.settings)
    }
}

impl Drop for ReactiveView {
    fn drop(&mut self) {
        self.engine.unsubscribe(self.subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sees_moves_from_other_handles() {
        let engine = SharedEngine::new();
        let mut view = ReactiveView::attach(engine.clone(), Settings::default());

        engine.apply_move(1, 1).unwrap();
        assert_eq!(view.ui_state().cell(1, 1), "X");
        assert_eq!(view.ui_state().turn_text(), "O Turn");
    }

    #[test]
    fn test_tap_prompts_on_tie() {
        let mut view = ReactiveView::attach(SharedEngine::new(), Settings::default());
        let taps = [(0, 0), (1, 1), (0, 2), (0, 1), (2, 1), (1, 0), (1, 2), (2, 2)];
        for (row, col) in taps {
            assert_eq!(view.tap(row, col), Ok(None));
        }

        let prompt = view.tap(2, 0).unwrap().expect("board is full");
        assert_eq!(prompt.title(), "It is a tie!");
    }

    #[test]
    fn test_drop_unsubscribes() {
        let engine = SharedEngine::new();
        let view = ReactiveView::attach(engine.clone(), Settings::default());
        let subscription = view.subscription;
        drop(view);

        assert!(!engine.unsubscribe(subscription));
        engine.apply_move(0, 0).unwrap();
    }

    #[test]
    fn test_unread_pushes_keep_only_the_newest() {
        let engine = SharedEngine::new();
        let mut view = ReactiveView::attach(engine.clone(), Settings::default());

        for _ in 0..10_000 {
            engine.apply_move(1, 1).unwrap();
            engine.apply_move(0, 0).unwrap();
            engine.play_again();
        }
        engine.apply_move(2, 2).unwrap();

        assert!(lock(&view.pending).is_some());
        assert_eq!(view.latest(), &engine.snapshot());
        assert!(lock(&view.pending).is_none());
        assert_eq!(view.ui_state().cell(2, 2), "X");
    }
}
