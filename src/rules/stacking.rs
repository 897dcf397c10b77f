//! Stacking predicates.
//!
//! `can_stack` decides whether one card may be placed on another under a
//! `StackRule`. FreeCell cascades use `StackRule::ALTERNATING_DESCENDING`;
//! the other five combinations are available for other layouts.
//!
//! Predicates are total: anything illegal is simply `false`.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Slot};

/// How the moving card must relate to the card it lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Matching {
    /// Both red or both black.
    SameColor,
    /// One red, one black.
    AlternatingColor,
    /// Identical suit.
    SameSuit,
}

/// Rank direction of a pile as it grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// The moving card is one rank above the card it lands on.
    Ascending,
    /// The moving card is one rank below the card it lands on.
    Descending,
}

/// A stacking policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackRule {
    pub matching: Matching,
    pub direction: Direction,
}

impl StackRule {
    pub const SAME_COLOR_ASCENDING: Self = Self::new(Matching::SameColor, Direction::Ascending);
    pub const SAME_COLOR_DESCENDING: Self = Self::new(Matching::SameColor, Direction::Descending);
    pub const ALTERNATING_ASCENDING: Self =
        Self::new(Matching::AlternatingColor, Direction::Ascending);
    pub const ALTERNATING_DESCENDING: Self =
        Self::new(Matching::AlternatingColor, Direction::Descending);
    pub const SAME_SUIT_ASCENDING: Self = Self::new(Matching::SameSuit, Direction::Ascending);
    pub const SAME_SUIT_DESCENDING: Self = Self::new(Matching::SameSuit, Direction::Descending);

    /// Every supported rule.
    pub const ALL: [StackRule; 6] = [
        Self::SAME_COLOR_ASCENDING,
        Self::SAME_COLOR_DESCENDING,
        Self::ALTERNATING_ASCENDING,
        Self::ALTERNATING_DESCENDING,
        Self::SAME_SUIT_ASCENDING,
        Self::SAME_SUIT_DESCENDING,
    ];

    #[must_use]
    pub const fn new(matching: Matching, direction: Direction) -> Self {
        Self { matching, direction }
    }
}

impl Default for StackRule {
    fn default() -> Self {
        Self::ALTERNATING_DESCENDING
    }
}

/// Can `from` be placed on `to` under `rule`?
///
/// ```
/// use freecell_engine::cards::Card;
/// use freecell_engine::rules::{can_stack, StackRule};
///
/// let black_seven: Card = "7♠".parse().unwrap();
/// let red_six: Card = "6♥".parse().unwrap();
/// assert!(can_stack(StackRule::ALTERNATING_DESCENDING, red_six, black_seven));
/// ```
#[must_use]
pub fn can_stack(rule: StackRule, from: Card, to: Card) -> bool {
    let ranks_fit = match rule.direction {
        Direction::Ascending => is_one_above(from, to),
        Direction::Descending => is_one_above(to, from),
    };
    let suits_fit = match rule.matching {
        Matching::SameColor => from.is_black() == to.is_black(),
        Matching::AlternatingColor => from.is_black() != to.is_black(),
        Matching::SameSuit => from.suit == to.suit,
    };
    ranks_fit && suits_fit
}

/// Can `card` be placed on a foundation currently holding `foundation`?
///
/// A placeholder takes only the Ace of its suit; an occupied foundation
/// takes the next rank of the same suit. An untagged empty slot takes
/// nothing.
#[must_use]
pub fn can_place_on_foundation(card: Card, foundation: Slot) -> bool {
    match foundation {
        Slot::Empty => false,
        Slot::Placeholder(suit) => card.suit == suit && card.rank.index() == 0,
        Slot::Occupied(top) => card.suit == top.suit && is_one_above(card, top),
    }
}

fn is_one_above(card: Card, other: Card) -> bool {
    card.rank.index() == other.rank.index() + 1
}
