//! # Wordle RU
//!
//! A Russian-language Wordle: guess a five-letter word in six attempts.
//!
//! Each guess is scored letter by letter against the secret word (exact,
//! present elsewhere, absent) with repeated letters credited no more often than
//! they occur in the secret. A hint engine proposes words that are still
//! consistent with every pattern seen so far.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod session;
pub mod suggest;
pub mod word;

use std::num::NonZeroU8;

pub use config::GameConfig;
pub use dictionary::{bundled_dictionary, load_dictionary, parse_dictionary, WordSet};
pub use error::{DictionaryError, TurnError, WordError};
pub use feedback::{evaluate, Feedback, FeedbackPattern};
pub use session::{GameSession, GameStatus, TurnResult};
pub use suggest::Suggester;
pub use word::Word;

/// Word length for the game
pub const WORD_LENGTH: usize = 5;

/// Default number of guesses per game
pub const MAX_ATTEMPTS: NonZeroU8 = match NonZeroU8::new(6) {
    Some(attempts) => attempts,
    None => unreachable!(),
};
