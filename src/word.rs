//! Validated five-letter words over the Russian alphabet.
//!
//! A [`Word`] can only be built through [`Word::parse`], which normalizes the raw
//! text first. Everything downstream (scoring, dictionary lookups, suggestions)
//! works on letter indexes and never re-validates.

use std::fmt;
use std::str::FromStr;

use crate::error::WordError;
use crate::WORD_LENGTH;

/// Number of letters in the game alphabet (`а`..=`я`, with `ё` folded onto `е`).
pub const ALPHABET_SIZE: usize = 32;

const LETTERS: [char; ALPHABET_SIZE] = [
    'а', 'б', 'в', 'г', 'д', 'е', 'ж', 'з', 'и', 'й', 'к', 'л', 'м', 'н', 'о', 'п', 'р', 'с',
    'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ы', 'ь', 'э', 'ю', 'я',
];

/// Canonical form of raw input: trimmed, lowercased, `ё` folded to `е`.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase().replace('ё', "е")
}

fn letter_index(c: char) -> Option<u8> {
    if ('а'..='я').contains(&c) {
        Some((c as u32 - 'а' as u32) as u8)
    } else {
        None
    }
}

/// A five-letter word, stored as alphabet indexes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Normalize `raw` and validate it as a word.
    ///
    /// Length is checked before the alphabet, so `"дом"` reports a length error
    /// and `"hello"` reports the first non-Cyrillic letter.
    pub fn parse(raw: &str) -> Result<Self, WordError> {
        let normalized = normalize(raw);

        let actual = normalized.chars().count();
        if actual != WORD_LENGTH {
            return Err(WordError::Length {
                expected: WORD_LENGTH,
                actual,
            });
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, c) in letters.iter_mut().zip(normalized.chars()) {
            *slot = letter_index(c).ok_or(WordError::Alphabet(c))?;
        }

        Ok(Self(letters))
    }

    /// Alphabet indexes of the letters, each in `0..ALPHABET_SIZE`.
    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().map(|&index| LETTERS[index as usize])
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars().try_for_each(|c| write!(f, "{}", c))
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self)
    }
}
