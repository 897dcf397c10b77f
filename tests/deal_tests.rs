//! Deal integration tests.
//!
//! These tests pin the seed-to-layout mapping against known deals and
//! check that redeals reproduce the board.

use freecell_engine::{Board, Card, Deck, Position, Selection, Slot, Suit};

fn cards(labels: &str) -> Vec<Card> {
    labels.split_whitespace().map(|l| l.parse().unwrap()).collect()
}

/// Rows of a dealt board, bottom row first.
fn rows(board: &Board) -> Vec<Vec<Card>> {
    let depth = board.cascades().iter().map(|c| c.len()).max().unwrap_or(0);
    (0..depth)
        .map(|row| {
            board
                .cascades()
                .iter()
                .filter_map(|c| c.get(row).copied())
                .collect()
        })
        .collect()
}

// =============================================================================
// Known Deals
// =============================================================================

/// Game 1 is the well-known first Microsoft FreeCell deal.
#[test]
fn test_game_one_layout() {
    let board = Board::new(1);
    let expected = vec![
        cards("J♦ 2♦ 9♥ J♣ 5♦ 7♥ 7♣ 5♥"),
        cards("K♦ K♣ 9♠ 5♠ A♦ Q♣ K♥ 3♥"),
        cards("2♠ K♠ 9♦ Q♦ J♠ A♠ A♥ 3♣"),
        cards("4♣ 5♣ 10♠ Q♥ 4♥ A♣ 4♦ 7♠"),
        cards("3♠ 10♦ 4♠ 10♥ 8♥ 2♣ J♥ 7♦"),
        cards("6♦ 8♠ 8♦ Q♠ 6♣ 3♦ 8♣ 10♣"),
        cards("6♠ 9♣ 2♥ 6♥"),
    ];

    assert_eq!(rows(&board), expected);
}

#[test]
fn test_game_617_layout() {
    let board = Board::new(617);
    let layout = rows(&board);

    assert_eq!(layout[0], cards("7♦ A♦ 5♣ 3♠ 5♠ 8♣ 2♦ A♥"));
    assert_eq!(layout[6], cards("J♦ K♠ K♣ 4♥"));
}

#[test]
fn test_game_42_layout() {
    let board = Board::new(42);

    assert_eq!(board.cascade(0), cards("5♠ 4♦ J♣ J♥ 8♥ 4♠ 3♦").as_slice());
    assert_eq!(board.cascade(7), cards("10♠ 7♥ A♣ 9♥ 7♣ 4♥").as_slice());
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_deck() {
    let deck = Deck::new();
    for seed in [0, 1, 2, 1000, u32::MAX] {
        assert_eq!(deck.shuffled(seed), deck.shuffled(seed));
    }
}

#[test]
fn test_redeal_reproduces_board() {
    let mut board = Board::new(11982);
    let dealt = board.layout();

    // Play a little, then redeal.
    assert!(board.try_move(Position::new(0, 6), Position::freecell(0)));
    board.up();
    board.select();
    board.redeal();

    assert_eq!(board.layout(), dealt);
    assert_eq!(board.game_number(), 11982);
    assert!(board.history().is_empty());
    assert_eq!(board.selection(), Selection::Idle);
    assert_eq!(board.cursor(), Position::new(0, 6));
}

#[test]
fn test_deal_replaces_previous_game() {
    let mut board = Board::new(1);
    assert!(board.try_move(Position::new(0, 6), Position::freecell(0)));

    board.deal(2);
    assert_eq!(board.layout(), Board::new(2).layout());
    for (i, slot) in board.foundations().iter().enumerate() {
        assert_eq!(*slot, Slot::Placeholder(Suit::ALL[i]));
    }
    assert_eq!(board.check_invariants(), Ok(()));
}

#[test]
fn test_round_robin_distribution() {
    let board = Board::new(5);
    let shuffled = Deck::new().shuffled(5);

    for (i, card) in shuffled.iter().enumerate() {
        assert_eq!(board.cascade(i % 8)[i / 8], *card);
    }
}
