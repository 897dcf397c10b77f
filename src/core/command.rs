//! Commands an input dispatcher sends to the board.
//!
//! Each variant maps to one `Board` operation; `Board::apply` runs it.
//! Key bindings live with the dispatcher, not here.

use serde::{Deserialize, Serialize};

/// A single board command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Deal the given game number.
    Deal(u32),
    /// Deal the current game number again.
    Redeal,
    Up,
    Down,
    Left,
    Right,
    /// Select the cursor position, or move the selected card there.
    Select,
    /// Reverse the last move.
    Undo,
    /// Viewport size changed.
    Resize { width: u16, height: u16 },
}

impl Command {
    /// Cursor movement commands.
    pub const NAVIGATION: [Command; 4] = [Command::Up, Command::Down, Command::Left, Command::Right];

    /// Does this command only move the cursor?
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(self, Command::Up | Command::Down | Command::Left | Command::Right)
    }
}
