//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::{GameSnapshot, Square};

/// Invariant: History length equals number of occupied squares.
///
/// Every move in history corresponds to exactly one occupied square.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSnapshot> for HistoryConsistentInvariant {
    fn holds(snapshot: &GameSnapshot) -> bool {
        let occupied = snapshot
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        snapshot.history().len() == occupied
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::played;
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_multiple_moves_hold() {
        let snapshot = played(&[(0, 0), (1, 1), (0, 2), (2, 0)]);
        assert!(HistoryConsistentInvariant::holds(&snapshot));
        assert_eq!(snapshot.history().len(), 4);
    }

    #[test]
    fn test_square_without_history_violates() {
        let mut snapshot = played(&[(1, 1)]);
        snapshot
            .board
            .set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&snapshot));
    }
}
