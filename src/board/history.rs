//! Move records and the undo stack.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// One executed relocation of a single card.
///
/// `to` is where the card actually landed, which for a cascade is the slot
/// one past the previous top rather than the cursor row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// The move that puts the card back.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Last-in, first-out log of executed moves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an executed move.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Remove and return the most recent move.
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    /// The most recent move without removing it.
    #[must_use]
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Moves oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}
