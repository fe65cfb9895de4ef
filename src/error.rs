//! Error types for dictionary loading and turn handling.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::word::Word;

/// Why a piece of text is not a valid word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("expected {expected} letters, got {actual}")]
    Length { expected: usize, actual: usize },
    #[error("letter {0:?} is not in the Russian alphabet")]
    Alphabet(char),
}

/// A rejected turn. None of these consume an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The guess failed length or alphabet validation.
    #[error("invalid word format: {0}")]
    InvalidFormat(#[from] WordError),
    /// The guess is well-formed but unknown to the dictionary.
    #[error("word {0} is not in the dictionary")]
    NotInDictionary(Word),
    /// The session already reached a win or a loss.
    #[error("the game is already finished")]
    GameFinished,
}

impl TurnError {
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }

    pub fn is_not_in_dictionary(&self) -> bool {
        matches!(self, Self::NotInDictionary(_))
    }

    pub fn is_game_finished(&self) -> bool {
        matches!(self, Self::GameFinished)
    }
}

/// Fatal dictionary problems. No game can start after either of these.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The source could not be read at all.
    #[error("failed to read dictionary {}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The source was read but held no usable five-letter words.
    #[error("dictionary contains no usable words")]
    Empty,
}
