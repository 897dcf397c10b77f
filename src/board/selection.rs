//! Selection state of the two-step select gesture.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Whether a card is picked up and waiting for a destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    Idle,
    /// The card at this position will move on the next select elsewhere.
    PendingMove(Position),
}

impl Selection {
    /// The selected position, if any.
    #[must_use]
    pub const fn position(self) -> Option<Position> {
        match self {
            Selection::Idle => None,
            Selection::PendingMove(at) => Some(at),
        }
    }

    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Selection::PendingMove(_))
    }
}
