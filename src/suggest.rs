//! Hint engine: proposes a word that is still consistent with every turn so far.
//!
//! A dictionary word is a candidate when scoring each past guess against it
//! reproduces exactly the pattern the player saw, and it has not been used yet
//! (guessed or offered as a hint). The scan re-scores the whole dictionary
//! against the whole history on every call, which is the expensive part of the
//! game, so it runs on rayon's pool.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::dictionary::WordSet;
use crate::feedback::evaluate;
use crate::session::TurnResult;
use crate::word::Word;

/// Whether `word` could be the secret given `history`.
pub fn is_consistent(word: &Word, history: &[TurnResult]) -> bool {
    history
        .iter()
        .all(|turn| evaluate(&turn.guess, word) == turn.pattern)
}

#[derive(Debug, Clone, Copy)]
pub struct Suggester<'a> {
    words: &'a WordSet,
}

impl<'a> Suggester<'a> {
    pub fn new(words: &'a WordSet) -> Self {
        Self { words }
    }

    /// Unused words consistent with `history`, in dictionary order.
    pub fn candidates(&self, history: &[TurnResult], used: &HashSet<Word>) -> Vec<Word> {
        self.words
            .words()
            .par_iter()
            .filter(|word| !used.contains(*word) && is_consistent(word, history))
            .copied()
            .collect()
    }

    /// Pick one candidate at random and mark it used.
    ///
    /// Returns `None` when nothing in the dictionary fits, which is an ordinary
    /// outcome late in a game rather than an error.
    pub fn suggest<R: Rng + ?Sized>(
        &self,
        history: &[TurnResult],
        used: &mut HashSet<Word>,
        rng: &mut R,
    ) -> Option<Word> {
        let candidates = self.candidates(history, used);

        let Some(&hint) = candidates.choose(rng) else {
            info!(turns = history.len(), "no candidate found for suggestion");
            return None;
        };

        used.insert(hint);
        debug!(%hint, candidates = candidates.len(), "suggestion chosen");
        Some(hint)
    }
}
