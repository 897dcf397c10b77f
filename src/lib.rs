//! # freecell-engine
//!
//! Rule and state engine for FreeCell solitaire.
//!
//! The engine owns the board, the deal, the move rules and the undo
//! history. Rendering and input handling live outside: a dispatcher sends
//! `Command`s (or calls the matching `Board` methods) and a renderer reads
//! the board through its accessors or a `BoardSnapshot`.
//!
//! ## Design Principles
//!
//! 1. **Deterministic deals**: A game number fully determines the layout.
//!    Game numbers match the classic Microsoft FreeCell deals.
//!
//! 2. **Silent rejection**: Illegal moves and out-of-range navigation are
//!    no-ops. There is no error state during play.
//!
//! 3. **Conservation**: The board always holds exactly one deck. Debug
//!    builds audit this after every mutation.
//!
//! ## Example
//!
//! ```
//! use freecell_engine::{Board, Command, Position};
//!
//! let mut board = Board::new(42);
//! board.apply(Command::Select);
//! assert_eq!(board.selected(), Some(Position::new(0, 6)));
//! println!("{}", board.dump());
//! ```
//!
//! ## Modules
//!
//! - `cards`: Suits, ranks, cards, slots, deck and shuffle
//! - `core`: Positions, configuration, commands and RNG
//! - `rules`: Stacking and foundation predicates
//! - `board`: The board state machine, history and snapshots

pub mod board;
pub mod cards;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{Card, Deck, ParseCardError, Rank, Slot, Suit, DECK_SIZE};

pub use crate::core::{
    Address, BoardConfig, Command, ConfigError, DealRng, Position, SeedSource,
    FOUNDATION_COUNT, TOP_ROW,
};

pub use crate::rules::{can_place_on_foundation, can_stack, StackRule};

pub use crate::board::{
    Board, BoardSnapshot, Cascade, InvariantError, Layout, Move, MoveHistory, Selection,
    Viewport,
};
