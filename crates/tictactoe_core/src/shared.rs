//! Thread-safe handle for engines driven by more than one caller.

use super::{CellError, GameEngine, GameSnapshot, SubscriptionId, TerminalState};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{instrument, warn};

/// A [`GameEngine`] behind one mutex.
///
/// Every operation takes the lock for its whole duration, so moves,
/// resets and snapshots from different threads are serialized. Clones
/// share the same engine.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    engine: Arc<Mutex<GameEngine>>,
}

impl SharedEngine {
    /// Wraps a fresh engine.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing engine.
    pub fn from_engine(engine: GameEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    /// See [`GameEngine::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_move(&self, row: usize, col: usize) -> Result<TerminalState, CellError> {
        self.lock().apply_move(row, col)
    }

    /// See [`GameEngine::play_again`].
    #[instrument(skip(self))]
    pub fn play_again(&self) {
        self.lock().play_again();
    }

    /// See [`GameEngine::reset_all`].
    #[instrument(skip(self))]
    pub fn reset_all(&self) {
        self.lock().reset_all();
    }

    /// See [`GameEngine::snapshot`].
    pub fn snapshot(&self) -> GameSnapshot {
        self.lock().snapshot()
    }

    /// See [`GameEngine::subscribe`].
    ///
    /// Listeners run while the lock is held and must not call back into
    /// this handle.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: FnMut(&GameSnapshot) + Send + 'static,
    {
        self.lock().subscribe(listener)
    }

    /// See [`GameEngine::unsubscribe`].
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.lock().unsubscribe(id)
    }

    // The session is consistent between calls, so a poisoned lock (a
    // listener panicked) still guards valid state.
    fn lock(&self) -> MutexGuard<'_, GameEngine> {
        self.engine.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("Engine lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let shared = SharedEngine::new();
        let other = shared.clone();
        shared.apply_move(1, 1).unwrap();
        assert_eq!(*other.snapshot().current_player(), Player::O);
    }

    #[test]
    fn test_concurrent_taps_on_distinct_cells() {
        let shared = SharedEngine::new();
        let handles: Vec<_> = [(0, 0), (1, 0), (2, 1), (0, 2)]
            .into_iter()
            .map(|(row, col)| {
                let engine = shared.clone();
                thread::spawn(move || engine.apply_move(row, col))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }

        let snapshot = shared.snapshot();
        assert_eq!(snapshot.history().len(), 4);
        assert_eq!(snapshot.board().count(Player::X), 2);
        assert_eq!(snapshot.board().count(Player::O), 2);
    }
}
