//! Property tests over arbitrary tap sequences.

use proptest::prelude::*;
use tictactoe_core::invariants::{InvariantSet, TicTacToeInvariants};
use tictactoe_core::{GameEngine, Player, TerminalState};

fn taps() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..3, 0usize..3), 0..30)
}

/// Taps interleaved with "play again" (`None`), so several rounds get scored.
fn steps() -> impl Strategy<Value = Vec<Option<(usize, usize)>>> {
    prop::collection::vec(
        prop_oneof![
            8 => (0usize..3, 0usize..3).prop_map(Some),
            1 => Just(None),
        ],
        0..80,
    )
}

proptest! {
    #[test]
    fn turns_alternate_starting_with_x(taps in taps()) {
        let mut engine = GameEngine::new();
        for (row, col) in taps {
            engine.apply_move(row, col).unwrap();
        }

        for (i, mov) in engine.history().iter().enumerate() {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            prop_assert_eq!(mov.player, expected);
        }
    }

    #[test]
    fn rejected_moves_leave_snapshot_untouched(taps in taps()) {
        let mut engine = GameEngine::new();
        for (row, col) in taps {
            let before = engine.snapshot();
            let blocked = before.terminal().is_over() || before.board().get_at(row, col)
                != Some(tictactoe_core::Square::Empty);

            engine.apply_move(row, col).unwrap();

            if blocked {
                prop_assert_eq!(&engine.snapshot(), &before);
                prop_assert_eq!(
                    serde_json::to_string(&engine.snapshot()).unwrap(),
                    serde_json::to_string(&before).unwrap()
                );
            } else {
                prop_assert_eq!(engine.history().len(), before.history().len() + 1);
            }
        }
    }

    #[test]
    fn score_moves_only_on_the_winning_tap(steps in steps()) {
        let mut engine = GameEngine::new();
        for step in steps {
            let (row, col) = match step {
                Some(cell) => cell,
                None => {
                    let before = engine.score();
                    engine.play_again();
                    prop_assert_eq!(engine.score(), before);
                    continue;
                }
            };

            let was_over = engine.terminal().is_over();
            let before = engine.score();
            let terminal = engine.apply_move(row, col).unwrap();
            let after = engine.score();

            match terminal {
                TerminalState::Won(player) if !was_over => {
                    prop_assert_eq!(after.wins(player), before.wins(player) + 1);
                    prop_assert_eq!(
                        after.wins(player.opponent()),
                        before.wins(player.opponent())
                    );
                }
                _ => prop_assert_eq!(after, before),
            }
        }
    }

    #[test]
    fn invariants_hold_after_every_tap(taps in taps()) {
        let mut engine = GameEngine::new();
        for (row, col) in taps {
            engine.apply_move(row, col).unwrap();
            prop_assert!(TicTacToeInvariants::check_all(&engine.snapshot()).is_ok());
        }
    }

    #[test]
    fn out_of_range_always_errors(row in 3usize..100, col in 0usize..100) {
        let mut engine = GameEngine::new();
        prop_assert!(engine.apply_move(row, col).is_err());
        prop_assert!(engine.apply_move(col % 3, row).is_err());
        prop_assert_eq!(engine.snapshot(), GameEngine::new().snapshot());
    }
}
