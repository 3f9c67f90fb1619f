//! Session state: board, turn, round outcome and running score.

use super::{Board, Move, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// End-of-round status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TerminalState {
    /// Round is still open; moves are accepted.
    #[default]
    None,
    /// Round ended with three in a row.
    Won(Player),
    /// Board filled with no completed line.
    Tie,
}

impl TerminalState {
    /// Returns true once the round has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, TerminalState::None)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            TerminalState::Won(player) => Some(player),
            TerminalState::None | TerminalState::Tie => None,
        }
    }
}

impl std::fmt::Display for TerminalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalState::None => write!(f, "In progress"),
            TerminalState::Won(player) => write!(f, "Player {} wins", player),
            TerminalState::Tie => write!(f, "Tie"),
        }
    }
}

/// Cumulative wins per player across rounds.
///
/// Ties never count. Cleared only by a full reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Score {
    /// Rounds won by X.
    x_wins: u32,
    /// Rounds won by O.
    o_wins: u32,
}

impl Score {
    /// Rounds won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Rounds won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Mutable session aggregate, owned exclusively by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GameSession {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) terminal: TerminalState,
    pub(crate) score: Score,
    pub(crate) history: Vec<Move>,
}

impl GameSession {
    pub(crate) fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            terminal: TerminalState::None,
            score: Score::default(),
            history: Vec::new(),
        }
    }

    /// Clears the round; the score survives.
    pub(crate) fn clear_round(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.terminal = TerminalState::None;
        self.history.clear();
    }

    pub(crate) fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            terminal: self.terminal,
            score: self.score,
            history: self.history.clone(),
        }
    }
}

/// Immutable copy of the session handed to views for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board contents.
    pub(crate) board: Board,
    /// Player whose mark the next accepted move places.
    pub(crate) current_player: Player,
    /// End-of-round status.
    pub(crate) terminal: TerminalState,
    /// Running score.
    pub(crate) score: Score,
    /// Accepted moves of the current round, in order.
    pub(crate) history: Vec<Move>,
}
