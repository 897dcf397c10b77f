//! Board consistency audit.
//!
//! After a deal the board must always hold exactly one deck: every card
//! once, none missing. A foundation showing rank `r` holds Ace through `r`
//! of its suit. Debug builds run this check after every mutation.

use rustc_hash::FxHashSet;
use thiserror::Error;

use super::state::Board;
use crate::cards::{Card, Rank, Slot, DECK_SIZE};

/// A broken board invariant. Always a bug in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("board holds {0} cards, expected {}", DECK_SIZE)]
    CardCount(usize),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("foundation {index} holds {slot:?}")]
    ForeignFoundation { index: usize, slot: Slot },
    #[error("{found} freecells, config says {expected}")]
    FreecellCount { found: usize, expected: usize },
    #[error("{found} cascades, config says {expected}")]
    CascadeCount { found: usize, expected: usize },
}

impl Board {
    /// Check that the board still holds exactly one deck in a valid shape.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let config = self.config();
        if self.freecells().len() != config.freecells {
            return Err(InvariantError::FreecellCount {
                found: self.freecells().len(),
                expected: config.freecells,
            });
        }
        if self.cascades().len() != config.cascades {
            return Err(InvariantError::CascadeCount {
                found: self.cascades().len(),
                expected: config.cascades,
            });
        }

        let mut seen = FxHashSet::default();
        let mut count = 0;
        let mut record = |card: Card| {
            count += 1;
            if seen.insert(card) {
                Ok(())
            } else {
                Err(InvariantError::DuplicateCard(card))
            }
        };

        for (index, &slot) in self.foundations().iter().enumerate() {
            // Foundation column is the suit index.
            if slot.suit().map(|suit| suit.index()) != Some(index) {
                return Err(InvariantError::ForeignFoundation { index, slot });
            }
            if let Slot::Occupied(top) = slot {
                for &rank in &Rank::ALL[..=top.rank.index()] {
                    record(Card::new(rank, top.suit))?;
                }
            }
        }
        for card in self.freecells().iter().filter_map(|slot| slot.card()) {
            record(card)?;
        }
        for &card in self.cascades().iter().flatten() {
            record(card)?;
        }

        if count != DECK_SIZE {
            return Err(InvariantError::CardCount(count));
        }
        Ok(())
    }

    /// Number of cards on the board, counting every card under a
    /// foundation's top.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let on_foundations: usize = self
            .foundations()
            .iter()
            .filter_map(|slot| slot.card())
            .map(|card| card.rank.index() + 1)
            .sum();
        let in_freecells = self.freecells().iter().filter(|slot| slot.is_occupied()).count();
        let in_cascades: usize = self.cascades().iter().map(|cascade| cascade.len()).sum();

        on_foundations + in_freecells + in_cascades
    }
}
