//! Scoring a guess against the secret word.
//!
//! This module computes the per-letter feedback pattern (exact/present/absent)
//! and handles its textual forms: the `+^-` notation the game prints, and the
//! colored squares used with `--emoji`.

use std::fmt;

use crate::word::{Word, ALPHABET_SIZE};
use crate::WORD_LENGTH;

/// Feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Right letter, right position
    Exact,
    /// Letter occurs elsewhere in the secret
    Present,
    /// Letter not in the secret (or all its occurrences already credited)
    Absent,
}

impl Feedback {
    /// Symbol used in the game's text output
    pub fn to_symbol(self) -> char {
        match self {
            Feedback::Exact => '+',
            Feedback::Present => '^',
            Feedback::Absent => '-',
        }
    }

    pub fn to_emoji(self) -> char {
        match self {
            Feedback::Exact => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Parse from a symbol (`+^-`, or g/y/b, or 2/1/0)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            '+' | 'g' | '2' => Some(Feedback::Exact),
            '^' | 'y' | '1' => Some(Feedback::Present),
            '-' | 'b' | 'x' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }
}

/// A complete feedback pattern for a five-letter guess.
/// Encoded as a single u8 value (0-242): position i contributes
/// 0 (absent), 1 (present) or 2 (exact) times 3^i.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(u8);

impl FeedbackPattern {
    /// The all-exact (winning) pattern
    pub const ALL_EXACT: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81); // 242

    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        let mut multiplier: u8 = 1;
        for fb in feedbacks {
            let value = match fb {
                Feedback::Absent => 0,
                Feedback::Present => 1,
                Feedback::Exact => 2,
            };
            pattern += value * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut pattern = self.0;
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match pattern % 3 {
                0 => Feedback::Absent,
                1 => Feedback::Present,
                _ => Feedback::Exact,
            };
            pattern /= 3;
        }
        feedbacks
    }

    pub fn is_win(self) -> bool {
        self == Self::ALL_EXACT
    }

    /// Number of positions marked exact
    pub fn exact_count(self) -> usize {
        self.to_feedbacks()
            .iter()
            .filter(|&&fb| fb == Feedback::Exact)
            .count()
    }

    /// Parse a pattern from a string like "+^--+", "gybbb" or "21000"
    pub fn parse(s: &str) -> Option<Self> {
        if s.chars().count() != WORD_LENGTH {
            return None;
        }
        let feedbacks: Option<Vec<_>> = s.chars().map(Feedback::from_char).collect();
        let arr: [Feedback; WORD_LENGTH] = feedbacks?.try_into().ok()?;
        Some(Self::new(arr))
    }

    pub fn to_emoji_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_emoji()).collect()
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_feedbacks()
            .iter()
            .try_for_each(|fb| write!(f, "{}", fb.to_symbol()))
    }
}

/// Score `guess` against `secret`.
///
/// Exact matches are settled in a first full pass and consume their letter from
/// the secret's letter counts; the second pass then hands out `Present` left to
/// right while counts last. A letter is therefore never credited more often than
/// it occurs in the secret.
pub fn evaluate(guess: &Word, secret: &Word) -> FeedbackPattern {
    let guess = guess.letters();
    let secret = secret.letters();

    let mut remaining = [0u8; ALPHABET_SIZE];
    for &letter in secret {
        remaining[letter as usize] += 1;
    }

    let mut feedback = [Feedback::Absent; WORD_LENGTH];

    for i in 0..WORD_LENGTH {
        if guess[i] == secret[i] {
            feedback[i] = Feedback::Exact;
            remaining[guess[i] as usize] -= 1;
        }
    }

    for i in 0..WORD_LENGTH {
        if feedback[i] != Feedback::Exact {
            let count = &mut remaining[guess[i] as usize];
            if *count > 0 {
                feedback[i] = Feedback::Present;
                *count -= 1;
            }
        }
    }

    FeedbackPattern::new(feedback)
}
