//! Read-only views of the board for renderers, tests and debugging.
//!
//! - `Layout`: Where every card is, nothing else
//! - `BoardSnapshot`: Layout plus cursor, selection and viewport
//! - `Board::dump`: Plain-text grid of the layout

use std::fmt;

use serde::{Deserialize, Serialize};

use super::state::{Board, Viewport};
use crate::cards::{Card, Slot};
use crate::core::Position;

/// Card placement on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub foundations: Vec<Slot>,
    pub freecells: Vec<Slot>,
    /// Cascades, bottom card first.
    pub cascades: Vec<Vec<Card>>,
}

/// Everything a renderer reads from the board at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub game_number: u32,
    pub cursor: Position,
    pub selected: Option<Position>,
    pub viewport: Viewport,
    pub layout: Layout,
}

impl Board {
    /// Copy of the current card placement.
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout {
            foundations: self.foundations().to_vec(),
            freecells: self.freecells().to_vec(),
            cascades: self.cascades().iter().map(|c| c.to_vec()).collect(),
        }
    }

    /// Copy of everything a renderer needs.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            game_number: self.game_number(),
            cursor: self.cursor(),
            selected: self.selected(),
            viewport: self.viewport(),
            layout: self.layout(),
        }
    }

    /// Text dump of the board.
    ///
    /// First line: foundations then freecells, `X` for an empty slot.
    /// After a blank line, the cascades as columns, bottom card first.
    #[must_use]
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in self.foundations().iter().chain(self.freecells()) {
            match slot.card() {
                Some(card) => write!(f, "{:>4}", card)?,
                None => write!(f, "{:>4}", "X")?,
            }
        }
        writeln!(f)?;
        writeln!(f)?;

        let depth = self.cascades().iter().map(|c| c.len()).max().unwrap_or(0);
        for row in 0..depth {
            for cascade in self.cascades() {
                match cascade.get(row) {
                    Some(card) => write!(f, "{:>4}", card)?,
                    None => write!(f, "    ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
