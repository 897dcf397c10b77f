//! Board addressing.
//!
//! Every slot on the board is a `(column, row)` pair:
//!
//! - `row == -1`, `column < 4`: foundation `column` (one per suit)
//! - `row == -1`, `column >= 4`: freecell `column - 4`
//! - `row >= 0`: cascade `column`, depth `row` from the bottom
//!
//! Classification is a pure function of the pair. Bounds are the board's
//! concern, not this module's.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Suit;

/// Row index of the foundation/freecell row.
pub const TOP_ROW: i32 = -1;

/// Number of foundations, one per suit.
pub const FOUNDATION_COUNT: usize = Suit::ALL.len();

/// A board coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub column: usize,
    pub row: i32,
}

/// What a `Position` refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Address {
    /// Foundation index (equal to the suit index).
    Foundation(usize),
    /// Freecell index.
    Freecell(usize),
    /// Cascade index and depth (0 = bottom card).
    Cascade { index: usize, depth: usize },
}

impl Position {
    #[must_use]
    pub const fn new(column: usize, row: i32) -> Self {
        Self { column, row }
    }

    /// Foundation slot for a suit.
    #[must_use]
    pub const fn foundation(suit: Suit) -> Self {
        Self::new(suit.index(), TOP_ROW)
    }

    /// Freecell slot by freecell index.
    #[must_use]
    pub const fn freecell(index: usize) -> Self {
        Self::new(FOUNDATION_COUNT + index, TOP_ROW)
    }

    /// Cascade slot by cascade index and depth.
    #[must_use]
    pub const fn cascade(index: usize, depth: usize) -> Self {
        Self::new(index, depth as i32)
    }

    /// Classify this position. Any negative row is the top row.
    #[must_use]
    pub const fn address(self) -> Address {
        if self.row < 0 {
            if self.column < FOUNDATION_COUNT {
                Address::Foundation(self.column)
            } else {
                Address::Freecell(self.column - FOUNDATION_COUNT)
            }
        } else {
            Address::Cascade {
                index: self.column,
                depth: self.row as usize,
            }
        }
    }

    #[must_use]
    pub const fn is_foundation(self) -> bool {
        matches!(self.address(), Address::Foundation(_))
    }

    #[must_use]
    pub const fn is_freecell(self) -> bool {
        matches!(self.address(), Address::Freecell(_))
    }

    #[must_use]
    pub const fn is_cascade(self) -> bool {
        matches!(self.address(), Address::Cascade { .. })
    }

    /// True if this position is in the foundation/freecell row.
    #[must_use]
    pub const fn is_top_row(self) -> bool {
        self.row < 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.column, self.row)
    }
}
