//! Core engine types: positions, configuration, commands, RNG.
//!
//! These are plain values shared by the rules and the board.

pub mod command;
pub mod config;
pub mod position;
pub mod rng;

pub use command::Command;
pub use config::{BoardConfig, ConfigError, DEFAULT_CASCADES, DEFAULT_FREECELLS};
pub use position::{Address, Position, FOUNDATION_COUNT, TOP_ROW};
pub use rng::{DealRng, SeedSource, MAX_GAME_NUMBER};
