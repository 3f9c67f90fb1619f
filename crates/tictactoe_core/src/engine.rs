//! The game engine: the single owner and writer of session state.

use super::rules::{check_winner, is_full};
use super::session::GameSession;
use super::{
    Board, CellError, GameSnapshot, Move, Player, Position, Score, Square, TerminalState,
};
use tracing::{debug, info, instrument};

/// Handle returned by [`GameEngine::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("subscription#{}", _0)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&GameSnapshot) + Send>;

/// Tic-tac-toe game engine.
///
/// Owns the board, the current player, the round's terminal state and
/// the running score. Views call in with taps and read back a
/// [`GameSnapshot`]; they never touch the session directly.
///
/// Invalid moves (occupied cell, round already over) are ignored rather
/// than reported, matching fire-and-forget click handling. Only a
/// coordinate outside the grid is an error.
pub struct GameEngine {
    session: GameSession,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl GameEngine {
    /// Creates an engine with an empty board, X to move and a 0-0 score.
    #[instrument]
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Returns the terminal state after the call. A move on an occupied
    /// cell, or any move once the round has ended, changes nothing and
    /// returns the unchanged terminal state.
    ///
    /// # Errors
    ///
    /// Returns [`CellError`] if `row` or `col` is outside `0..3`. Nothing
    /// is mutated in that case.
    #[instrument(skip(self), fields(player = %self.session.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<TerminalState, CellError> {
        let pos = Position::from_coords(row, col)?;
        Ok(self.apply_position(pos))
    }

    /// Places the current player's mark at an already validated position.
    ///
    /// Same semantics as [`apply_move`](Self::apply_move) minus the range check.
    #[instrument(skip(self), fields(player = %self.session.current_player))]
    pub fn apply_position(&mut self, pos: Position) -> TerminalState {
        if self.session.terminal.is_over() {
            debug!(terminal = %self.session.terminal, "Round is over, ignoring move");
            return self.session.terminal;
        }

        if !self.session.board.is_empty(pos) {
            debug!(position = %pos, "Square is already occupied, ignoring move");
            return self.session.terminal;
        }

        let player = self.session.current_player;
        self.session.board.set(pos, Square::Occupied(player));
        self.session.history.push(Move::new(player, pos));

        if let Some(winner) = check_winner(&self.session.board) {
            self.session.terminal = TerminalState::Won(winner);
            self.session.score.record_win(winner);
            info!(
                winner = %winner,
                x_wins = self.session.score.x_wins(),
                o_wins = self.session.score.o_wins(),
                "Round won"
            );
        } else if is_full(&self.session.board) {
            self.session.terminal = TerminalState::Tie;
            info!("Round tied");
        } else {
            self.session.current_player = player.opponent();
        }

        self.assert_invariants();
        self.notify();
        self.session.terminal
    }

    /// Clears the board for a new round. The score is kept.
    #[instrument(skip(self))]
    pub fn play_again(&mut self) {
        self.session.clear_round();
        debug!("New round started");
        self.notify();
    }

    /// Clears the board and zeroes both win counters.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        self.session.clear_round();
        self.session.score.clear();
        info!("Game reset");
        self.notify();
    }

    /// Returns a read-only copy of the session for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.session.board
    }

    /// Returns the player whose mark the next accepted move places.
    pub fn current_player(&self) -> Player {
        self.session.current_player
    }

    /// Returns the round's terminal state.
    pub fn terminal(&self) -> TerminalState {
        self.session.terminal
    }

    /// Returns the running score.
    pub fn score(&self) -> Score {
        self.session.score
    }

    /// Returns the accepted moves of the current round.
    pub fn history(&self) -> &[Move] {
        &self.session.history
    }

    /// Registers a listener called with a fresh snapshot after every
    /// state change (accepted move, new round, reset).
    #[instrument(skip(self, listener))]
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&GameSnapshot) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(%id, listeners = self.listeners.len(), "Listener subscribed");
        id
    }

    /// Removes a listener. Returns false if `id` was not registered.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.session.snapshot();
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }

    fn assert_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            use super::invariants::{InvariantSet, TicTacToeInvariants};

            if let Err(violations) = TicTacToeInvariants::check_all(&self.session.snapshot()) {
                let descriptions = violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                panic!("Engine invariant violated: {}", descriptions);
            }
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("session", &self.session)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
