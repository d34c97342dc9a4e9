//! Rule constants and match configuration.
//!
//! The ruleset itself is fixed; these constants name its numbers. What a
//! caller may choose is collected in `GameConfig`: the seed, the names
//! shown for each seat, and the safety bound on mulligans.

use serde::{Deserialize, Serialize};

use super::player::Seat;

/// Maximum number of creatures on a bench.
pub const BENCH_CAPACITY: usize = 5;

/// Prize cards set aside per participant.
pub const PRIZE_COUNT: usize = 6;

/// Cards in a starting hand, and cards drawn by Professor's Research.
pub const STARTING_HAND_SIZE: usize = 7;

/// Highest resource cost that still counts as a basic creature.
pub const BASIC_MAX_COST: u32 = 1;

/// Hit points restored by a Potion.
pub const POTION_HEAL: i32 = 20;

/// Copies of the resource card in every deck.
pub const RESOURCE_COPIES: usize = 20;

/// Total cards in every deck.
pub const DECK_SIZE: usize = 35;

/// Default bound on redraws before setup gives up.
pub const DEFAULT_MAX_MULLIGANS: u32 = 100;

/// Configuration for a single match.
///
/// ```
/// use rock_tcg::core::{GameConfig, Seat};
///
/// let config = GameConfig::new(42)
///     .with_name(Seat::Human, "ASH")
///     .with_max_mulligans(10);
///
/// assert_eq!(config.seed, 42);
/// assert_eq!(config.name(Seat::Human), "ASH");
/// assert_eq!(config.name(Seat::Computer), "COMPUTER");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for every shuffle in the match.
    pub seed: u64,

    /// Display name of the human seat.
    pub human_name: String,

    /// Display name of the scripted seat.
    pub computer_name: String,

    /// Mulligans allowed per participant before setup fails.
    pub max_mulligans: u32,
}

impl GameConfig {
    /// Create a configuration with default names and mulligan bound.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            human_name: Seat::Human.to_string(),
            computer_name: Seat::Computer.to_string(),
            max_mulligans: DEFAULT_MAX_MULLIGANS,
        }
    }

    /// Set the display name for a seat.
    #[must_use]
    pub fn with_name(mut self, seat: Seat, name: impl Into<String>) -> Self {
        match seat {
            Seat::Human => self.human_name = name.into(),
            Seat::Computer => self.computer_name = name.into(),
        }
        self
    }

    /// Set the mulligan bound.
    #[must_use]
    pub fn with_max_mulligans(mut self, max: u32) -> Self {
        self.max_mulligans = max;
        self
    }

    /// Display name for a seat.
    #[must_use]
    pub fn name(&self, seat: Seat) -> &str {
        match seat {
            Seat::Human => &self.human_name,
            Seat::Computer => &self.computer_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new(3);

        assert_eq!(config.seed, 3);
        assert_eq!(config.name(Seat::Human), "PLAYER");
        assert_eq!(config.name(Seat::Computer), "COMPUTER");
        assert_eq!(config.max_mulligans, DEFAULT_MAX_MULLIGANS);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(1)
            .with_name(Seat::Computer, "BROCK")
            .with_max_mulligans(2);

        assert_eq!(config.name(Seat::Computer), "BROCK");
        assert_eq!(config.max_mulligans, 2);
    }

    #[test]
    fn test_deck_constants_agree() {
        assert_eq!(DECK_SIZE, 10 + RESOURCE_COPIES + 5);
        assert!(PRIZE_COUNT + STARTING_HAND_SIZE < DECK_SIZE);
    }
}
