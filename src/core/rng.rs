//! Random number generation for deals.
//!
//! ## Key Types
//!
//! - `DealRng`: The linear congruential generator behind the deal shuffle.
//!   Same seed produces the identical sequence on every platform.
//! - `SeedSource`: Picks game numbers for new random deals.
//!
//! ## Usage
//!
//! ```
//! use freecell_engine::core::{DealRng, SeedSource};
//!
//! let mut rng = DealRng::new(1);
//! assert_eq!(rng.next_draw(), 41);
//!
//! let mut seeds = SeedSource::new(7);
//! let game = seeds.next_game_number();
//! assert!((1..=32000).contains(&game));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

const LCG_MULTIPLIER: u64 = 214_013;
const LCG_INCREMENT: u64 = 2_531_011;
const LCG_MASK: u64 = 0x7FFF_FFFF;

/// Highest game number handed out by `SeedSource`.
pub const MAX_GAME_NUMBER: u32 = 32_000;

/// Deal generator: `state = (state * 214013 + 2531011) mod 2^31`,
/// each draw is `state >> 16` (0..32768).
///
/// The generator is a plain value; nothing survives between deals except
/// what the caller keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealRng {
    state: u32,
}

impl DealRng {
    /// Create a generator seeded with a game number.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the generator and return the next draw.
    pub fn next_draw(&mut self) -> u32 {
        let next = (u64::from(self.state) * LCG_MULTIPLIER + LCG_INCREMENT) & LCG_MASK;
        self.state = next as u32;
        self.state >> 16
    }

    /// Current internal state.
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }
}

/// Source of game numbers for random deals.
///
/// Uses ChaCha8 so that a seeded source replays the same run of games.
#[derive(Clone, Debug)]
pub struct SeedSource {
    inner: ChaCha8Rng,
}

impl SeedSource {
    /// Create a reproducible source.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Pick a game number in `1..=MAX_GAME_NUMBER`.
    pub fn next_game_number(&mut self) -> u32 {
        self.inner.gen_range(1..=MAX_GAME_NUMBER)
    }
}
