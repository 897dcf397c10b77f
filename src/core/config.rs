//! Board configuration.
//!
//! A `BoardConfig` describes the layout the engine plays on:
//! - `cascades`: Number of cascades the deck is dealt into
//! - `freecells`: Number of single-card holding cells
//! - `stack_rule`: How cards build on each other in the cascades
//!
//! The default is standard FreeCell: 8 cascades, 4 freecells,
//! alternating colors in descending rank.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::DECK_SIZE;
use crate::rules::StackRule;

/// Default number of cascades.
pub const DEFAULT_CASCADES: usize = 8;

/// Default number of freecells.
pub const DEFAULT_FREECELLS: usize = 4;

/// Error returned by `BoardConfig::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a board needs at least one cascade")]
    NoCascades,
    #[error("{0} cascades is more than the {} cards in a deck", DECK_SIZE)]
    TooManyCascades(usize),
}

/// Layout configuration.
///
/// ## Example
///
/// ```
/// use freecell_engine::core::BoardConfig;
/// use freecell_engine::rules::StackRule;
///
/// let config = BoardConfig::new()
///     .with_freecells(2)
///     .with_stack_rule(StackRule::SAME_SUIT_DESCENDING);
///
/// assert_eq!(config.cascades, 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of cascades (at least 1, at most one per card).
    pub cascades: usize,

    /// Number of freecells.
    pub freecells: usize,

    /// Rule for placing a card on a cascade's top card.
    pub stack_rule: StackRule,
}

impl BoardConfig {
    /// Standard FreeCell layout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cascades: DEFAULT_CASCADES,
            freecells: DEFAULT_FREECELLS,
            stack_rule: StackRule::ALTERNATING_DESCENDING,
        }
    }

    /// Set the number of cascades.
    #[must_use]
    pub fn with_cascades(mut self, cascades: usize) -> Self {
        self.cascades = cascades;
        self
    }

    /// Set the number of freecells.
    #[must_use]
    pub fn with_freecells(mut self, freecells: usize) -> Self {
        self.freecells = freecells;
        self
    }

    /// Set the cascade stacking rule.
    #[must_use]
    pub fn with_stack_rule(mut self, rule: StackRule) -> Self {
        self.stack_rule = rule;
        self
    }

    /// Check that a deck can be dealt onto this layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cascades == 0 {
            return Err(ConfigError::NoCascades);
        }
        if self.cascades > DECK_SIZE {
            return Err(ConfigError::TooManyCascades(self.cascades));
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();

        assert_eq!(config.cascades, 8);
        assert_eq!(config.freecells, 4);
        assert_eq!(config.stack_rule, StackRule::ALTERNATING_DESCENDING);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_config_builder() {
        let config = BoardConfig::new()
            .with_cascades(10)
            .with_freecells(0)
            .with_stack_rule(StackRule::SAME_SUIT_DESCENDING);

        assert_eq!(config.cascades, 10);
        assert_eq!(config.freecells, 0);
        assert_eq!(config.stack_rule, StackRule::SAME_SUIT_DESCENDING);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_config_rejects_zero_cascades() {
        let config = BoardConfig::new().with_cascades(0);
        assert_eq!(config.validate(), Err(ConfigError::NoCascades));
    }

    #[test]
    fn test_config_rejects_too_many_cascades() {
        let config = BoardConfig::new().with_cascades(53);
        assert_eq!(config.validate(), Err(ConfigError::TooManyCascades(53)));
        assert_eq!(
            ConfigError::TooManyCascades(53).to_string(),
            "53 cascades is more than the 52 cards in a deck"
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = BoardConfig::new().with_freecells(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BoardConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
