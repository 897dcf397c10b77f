//! The board state machine and its supporting types.
//!
//! ## Key Types
//!
//! - `Board`: Owns every card, the cursor, the selection and the history
//! - `Selection`: Idle, or a card waiting for a destination
//! - `Move` / `MoveHistory`: Executed moves, newest last, for undo
//! - `Layout` / `BoardSnapshot`: Read-only copies for renderers

pub mod history;
pub mod invariants;
pub mod selection;
pub mod snapshot;
pub mod state;

pub use history::{Move, MoveHistory};
pub use invariants::InvariantError;
pub use selection::Selection;
pub use snapshot::{BoardSnapshot, Layout};
pub use state::{Board, Cascade, Viewport, CASCADE_INLINE};
