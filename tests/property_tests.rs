//! Property tests over random command sequences.
//!
//! Whatever the dispatcher sends, the board must keep exactly one deck,
//! keep the cursor on the board, and undo must invert every move.

use freecell_engine::{Board, Command, Deck};
use proptest::prelude::*;

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        2 => Just(Command::Up),
        2 => Just(Command::Down),
        2 => Just(Command::Left),
        2 => Just(Command::Right),
        4 => Just(Command::Select),
        1 => Just(Command::Undo),
    ]
}

fn commands() -> impl Strategy<Value = Vec<Command>> {
    prop::collection::vec(command_strategy(), 0..300)
}

proptest! {
    #[test]
    fn prop_cards_are_conserved(seed in 1u32..=32000, commands in commands()) {
        let mut board = Board::new(seed);
        for command in commands {
            board.apply(command);
            prop_assert_eq!(board.check_invariants(), Ok(()));
        }
    }

    #[test]
    fn prop_cursor_stays_on_board(seed in 1u32..=32000, commands in commands()) {
        let mut board = Board::new(seed);
        for command in commands {
            board.apply(command);
            let cursor = board.cursor();
            prop_assert!(board.contains(cursor));
            if cursor.is_cascade() {
                prop_assert!(cursor.row as usize <= board.top_row_of(cursor.column));
            }
        }
    }

    #[test]
    fn prop_undo_inverts_moves(seed in 1u32..=32000, commands in commands()) {
        let mut board = Board::new(seed);
        for command in commands {
            let before = board.layout();
            let moves = board.history().len();
            board.apply(command);

            if board.history().len() > moves {
                let mut probe = board.clone();
                probe.undo();
                prop_assert_eq!(probe.layout(), before);
            }
        }
    }

    #[test]
    fn prop_navigation_only_moves_cursor(seed in 1u32..=32000, steps in prop::collection::vec(0usize..4, 0..100)) {
        let mut board = Board::new(seed);
        let before = board.layout();
        for step in steps {
            board.apply(Command::NAVIGATION[step]);
        }
        prop_assert_eq!(board.layout(), before);
        prop_assert!(board.history().is_empty());
    }

    #[test]
    fn prop_redeal_reproduces(seed in any::<u32>(), commands in commands()) {
        let mut board = Board::new(seed);
        let dealt = board.layout();
        for command in commands {
            board.apply(command);
        }
        board.redeal();
        prop_assert_eq!(board.layout(), dealt);
    }

    #[test]
    fn prop_shuffle_is_deterministic_permutation(seed in any::<u32>()) {
        let deck = Deck::new();
        let first = deck.shuffled(seed);
        prop_assert_eq!(&first, &deck.shuffled(seed));

        let mut sorted = first.into_iter().collect::<Vec<_>>();
        sorted.sort();
        let mut ordered = deck.cards().to_vec();
        ordered.sort();
        prop_assert_eq!(sorted, ordered);
    }
}
