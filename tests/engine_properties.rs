//! Property tests over random move sequences.

use proptest::prelude::*;
use tictactoe_engine::{GameEngine, Player, Square};

proptest! {
    #[test]
    fn turn_matches_parity_until_game_ends(moves in prop::collection::vec(0usize..9, 0..20)) {
        let mut engine = GameEngine::new();
        for index in moves {
            if engine.status().is_terminal() {
                break;
            }
            engine.apply_move(index);
            if !engine.status().is_terminal() {
                let expected = if engine.move_count() % 2 == 0 { Player::X } else { Player::O };
                prop_assert_eq!(engine.turn(), expected);
            }
        }
    }

    #[test]
    fn nothing_changes_after_terminal(moves in prop::collection::vec(0usize..12, 0..40)) {
        let mut engine = GameEngine::new();
        let mut frozen: Option<GameEngine> = None;
        for index in moves {
            engine.apply_move(index);
            if let Some(snapshot) = &frozen {
                prop_assert_eq!(&engine, snapshot);
            } else if engine.status().is_terminal() {
                frozen = Some(engine.clone());
            }
        }
    }

    #[test]
    fn occupied_cells_never_change(moves in prop::collection::vec(0usize..9, 1..30)) {
        let mut engine = GameEngine::new();
        for index in moves {
            let before_square = engine.board().get(index);
            let before_turn = engine.turn();
            engine.apply_move(index);
            if let Some(Square::Occupied(player)) = before_square {
                prop_assert_eq!(engine.board().get(index), Some(Square::Occupied(player)));
                prop_assert_eq!(engine.turn(), before_turn);
            }
        }
    }

    #[test]
    fn marks_match_history(moves in prop::collection::vec(0usize..9, 0..30)) {
        let mut engine = GameEngine::new();
        for index in moves {
            engine.apply_move(index);
        }
        for (n, &index) in engine.history().iter().enumerate() {
            let player = if n % 2 == 0 { Player::X } else { Player::O };
            prop_assert_eq!(engine.board().get(index), Some(Square::Occupied(player)));
        }
        let occupied = engine.board().squares().iter().filter(|s| **s != Square::Empty).count();
        prop_assert_eq!(occupied, engine.move_count());
    }
}
