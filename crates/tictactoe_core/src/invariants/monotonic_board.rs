//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, GameSnapshot, Square};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the round's history onto an empty board must never hit an
/// occupied square and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSnapshot> for MonotonicBoardInvariant {
    fn holds(snapshot: &GameSnapshot) -> bool {
        let mut reconstructed = Board::new();

        for mov in snapshot.history() {
            if reconstructed.get(mov.position) != Square::Empty {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *snapshot.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::played;
    use super::*;
    use crate::{Move, Player, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&played(&[])));
    }

    #[test]
    fn test_sequence_holds() {
        let snapshot = played(&[(0, 0), (1, 1), (2, 0), (1, 0)]);
        assert!(MonotonicBoardInvariant::holds(&snapshot));
    }

    #[test]
    fn test_overwrite_in_history_violates() {
        let mut snapshot = played(&[(1, 1)]);
        snapshot.history.push(Move::new(Player::O, Position::Center));
        assert!(!MonotonicBoardInvariant::holds(&snapshot));
    }
}
