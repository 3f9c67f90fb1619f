//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameSnapshot, Player};

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... starting with X. While the
/// round is open the current player is the one due next; once it has
/// ended the current player is whoever moved last.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSnapshot> for AlternatingTurnInvariant {
    fn holds(snapshot: &GameSnapshot) -> bool {
        let history = snapshot.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.player == if i % 2 == 0 { Player::X } else { Player::O });
        if !alternates {
            return false;
        }

        let expected = match history.last() {
            Some(last) if snapshot.terminal().is_over() => last.player,
            Some(last) => last.player.opponent(),
            None => Player::X,
        };

        *snapshot.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
