//! Playing cards and board slot contents.
//!
//! ## Key Types
//!
//! - `Suit`: The four suits in deal order (clubs, diamonds, hearts, spades)
//! - `Rank`: Ace through King
//! - `Card`: A real (rank, suit) pair
//! - `Slot`: What a foundation, freecell, or cascade position holds
//!
//! Foundations need to remember which suit they accept before any card is
//! placed, so an empty foundation is a `Slot::Placeholder(suit)` rather than
//! a card with a sentinel rank.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Card suit.
///
/// The declaration order is the deck order and the foundation column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Index of this suit (0..4). Also its foundation column.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Suit for an index, or `None` if out of range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Diamonds and hearts are red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }

    /// Clubs and spades are black.
    #[must_use]
    pub const fn is_black(self) -> bool {
        !self.is_red()
    }

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "♣" | "C" | "c" => Some(Suit::Clubs),
            "♦" | "D" | "d" => Some(Suit::Diamonds),
            "♥" | "H" | "h" => Some(Suit::Hearts),
            "♠" | "S" | "s" => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

/// Card rank, Ace (0) through King (12).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Ordinal of this rank (Ace = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rank for an ordinal, or `None` if out of range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The rank one above, or `None` for a King.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The rank one below, or `None` for an Ace.
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Short label as printed on the card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("T") {
            return Some(Rank::Ten);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|rank| rank.label().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A playing card.
///
/// ## Example
///
/// ```
/// use freecell_engine::cards::{Card, Rank, Suit};
///
/// let card: Card = "10♦".parse().unwrap();
/// assert_eq!(card, Card::new(Rank::Ten, Suit::Diamonds));
/// assert!(card.is_red());
/// assert_eq!(format!("{:>4}", card), " 10♦");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[must_use]
    pub const fn is_red(self) -> bool {
        self.suit.is_red()
    }

    #[must_use]
    pub const fn is_black(self) -> bool {
        self.suit.is_black()
    }

    /// Label such as `"A♣"` or `"10♥"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.label())
    }
}

/// Error returned when a card label cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("card label is empty")]
    Empty,
    #[error("unknown rank `{0}`")]
    Rank(String),
    #[error("unknown suit `{0}`")]
    Suit(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parse labels like `"A♣"`, `"10♦"`, `"TD"` or `"qs"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (split, _) = s.char_indices().last().ok_or(ParseCardError::Empty)?;
        let (rank, suit) = s.split_at(split);
        let rank = Rank::parse(rank).ok_or_else(|| ParseCardError::Rank(rank.to_string()))?;
        let suit = Suit::parse(suit).ok_or_else(|| ParseCardError::Suit(suit.to_string()))?;
        Ok(Card::new(rank, suit))
    }
}

/// Contents of a single board position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// Nothing here (empty freecell or empty cascade).
    #[default]
    Empty,
    /// Empty foundation that accepts the Ace of this suit.
    Placeholder(Suit),
    /// A card.
    Occupied(Card),
}

impl Slot {
    /// True for `Empty` and `Placeholder`: no card is present.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !self.is_occupied()
    }

    #[must_use]
    pub const fn is_placeholder(self) -> bool {
        matches!(self, Slot::Placeholder(_))
    }

    #[must_use]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    /// The card held here, if any.
    #[must_use]
    pub const fn card(self) -> Option<Card> {
        match self {
            Slot::Occupied(card) => Some(card),
            _ => None,
        }
    }

    /// The suit this slot is tagged with (placeholder or card).
    #[must_use]
    pub const fn suit(self) -> Option<Suit> {
        match self {
            Slot::Empty => None,
            Slot::Placeholder(suit) => Some(suit),
            Slot::Occupied(card) => Some(card.suit),
        }
    }
}

impl From<Card> for Slot {
    fn from(card: Card) -> Self {
        Slot::Occupied(card)
    }
}

impl From<Option<Card>> for Slot {
    fn from(card: Option<Card>) -> Self {
        card.map_or(Slot::Empty, Slot::Occupied)
    }
}
