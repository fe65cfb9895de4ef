//! Per-game settings.

use std::num::NonZeroU8;

use crate::MAX_ATTEMPTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Guesses allowed before the game is lost
    pub max_attempts: NonZeroU8,
}

impl GameConfig {
    pub fn new(max_attempts: NonZeroU8) -> Self {
        Self { max_attempts }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
        }
    }
}
