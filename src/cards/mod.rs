//! Card model: suits, ranks, cards, slots, the deck and the deal shuffle.
//!
//! ## Key Types
//!
//! - `Card`: A real (rank, suit) pair
//! - `Slot`: Empty, a suit-tagged foundation placeholder, or a card
//! - `Deck`: The ordered 52-card deck
//! - `shuffle`: Deterministic permutation for a game number

pub mod card;
pub mod deck;
pub mod shuffle;

pub use card::{Card, ParseCardError, Rank, Slot, Suit};
pub use deck::{Deck, DECK_SIZE};
pub use shuffle::shuffle;
