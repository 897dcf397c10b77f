//! Card placement rules.
//!
//! Pure predicates the board consults before moving a card:
//! - `can_stack`: Card onto another card under a `StackRule`
//! - `can_place_on_foundation`: Card onto a foundation

pub mod stacking;

pub use stacking::{can_place_on_foundation, can_stack, Direction, Matching, StackRule};
