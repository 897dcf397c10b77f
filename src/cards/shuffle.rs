//! Deterministic deal shuffle.
//!
//! Each step draws from `DealRng`, takes the drawn card out of the live
//! pile and fills the hole with the last live card. With the ordered deck
//! this reproduces the Microsoft FreeCell deal numbers.

use crate::core::rng::DealRng;

/// Shuffle `items` for `seed` and return the new order.
///
/// The input is left untouched; the same seed always gives the same order.
///
/// ```
/// use freecell_engine::cards::shuffle;
///
/// let items = [1, 2, 3, 4, 5];
/// assert_eq!(shuffle(&items, 11), shuffle(&items, 11));
/// ```
#[must_use]
pub fn shuffle<T: Clone>(items: &[T], seed: u32) -> Vec<T> {
    let mut rng = DealRng::new(seed);
    let mut live = items.to_vec();
    let mut shuffled = Vec::with_capacity(live.len());

    for remaining in (1..=live.len()).rev() {
        let index = rng.next_draw() as usize % remaining;
        shuffled.push(live.swap_remove(index));
    }

    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_is_deterministic() {
        let items: Vec<u32> = (0..52).collect();
        assert_eq!(shuffle(&items, 42), shuffle(&items, 42));
    }

    #[test]
    fn test_shuffle_differs_by_seed() {
        let items: Vec<u32> = (0..52).collect();
        assert_ne!(shuffle(&items, 1), shuffle(&items, 2));
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let items: Vec<u32> = (0..52).collect();
        let mut shuffled = shuffle(&items, 1234);
        shuffled.sort_unstable();
        assert_eq!(shuffled, items);
    }

    #[test]
    fn test_shuffle_first_draws() {
        // Seed 1: first draw is 41 (41 % 52 = 41), second is 18467 % 51 = 5.
        let items: Vec<u32> = (0..52).collect();
        let shuffled = shuffle(&items, 1);
        assert_eq!(shuffled[0], 41);
        assert_eq!(shuffled[1], 5);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let empty: [u8; 0] = [];
        assert!(shuffle(&empty, 5).is_empty());
        assert_eq!(shuffle(&[9], 5), vec![9]);
    }
}
