//! The 52-card deck.
//!
//! The fresh deck is ordered rank-outer, suit-inner:
//! `A♣ A♦ A♥ A♠ 2♣ ... K♠`. The shuffle consumes this order, so changing
//! it changes every dealt layout.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use super::shuffle::shuffle;

/// Number of cards in a deck.
pub const DECK_SIZE: usize = Rank::ALL.len() * Suit::ALL.len();

/// An ordered sequence of exactly one card per (rank, suit).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create the ordered deck.
    #[must_use]
    pub fn new() -> Self {
        let cards = Rank::ALL
            .iter()
            .flat_map(|&rank| Suit::ALL.iter().map(move |&suit| Card::new(rank, suit)))
            .collect::<Vec<_>>();

        debug_assert_eq!(cards.len(), DECK_SIZE);
        Self { cards }
    }

    /// Return a shuffled copy of this deck for a game number.
    #[must_use]
    pub fn shuffled(&self, seed: u32) -> Self {
        Self {
            cards: shuffle(&self.cards, seed),
        }
    }

    /// The cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
