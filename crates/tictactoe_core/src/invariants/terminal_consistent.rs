//! Terminal consistency invariant: the recorded outcome matches the board.

use super::Invariant;
use crate::rules::{check_winner, is_full};
use crate::{GameSnapshot, TerminalState};

/// Invariant: The terminal state is exactly what the rules derive from
/// the board. A completed line means a win even on a full board.
pub struct TerminalConsistentInvariant;

impl Invariant<GameSnapshot> for TerminalConsistentInvariant {
    fn holds(snapshot: &GameSnapshot) -> bool {
        let board = snapshot.board();
        let expected = match check_winner(board) {
            Some(player) => TerminalState::Won(player),
            None if is_full(board) => TerminalState::Tie,
            None => TerminalState::None,
        };

        *snapshot.terminal() == expected
    }

    fn description() -> &'static str {
        "Terminal state matches the rules applied to the board"
    }
}
