//! The word set and its loaders.
//!
//! Dictionary text is read line by line. Every line is normalized the same way
//! player input is (see [`crate::word::normalize`]); lines that do not form a
//! valid five-letter word are skipped and repeated words keep their first
//! position.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use rand::Rng;
use tracing::{debug, info, instrument};

use crate::error::DictionaryError;
use crate::word::Word;

const BUNDLED_WORDS: &str = include_str!("../dictionary/words_ru.txt");

/// Immutable, non-empty collection of unique words.
#[derive(Debug, Clone)]
pub struct WordSet {
    words: Vec<Word>,
    index: HashSet<Word>,
}

impl WordSet {
    /// Build a set from `words`, dropping repeats. Fails on an empty input.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, DictionaryError> {
        let mut index = HashSet::new();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(*word))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, index })
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Uniformly random member of the set.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        self.words[rng.gen_range(0..self.words.len())]
    }

    /// All words in load order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Read a dictionary file.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_dictionary(path: &Path) -> Result<WordSet, DictionaryError> {
    let load_error = |source: io::Error| DictionaryError::Load {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(load_error)?;
    let words = read_words(BufReader::new(file)).map_err(load_error)?;
    let set = WordSet::new(words)?;

    info!(words = set.len(), "dictionary loaded");
    Ok(set)
}

/// Parse dictionary text that is already in memory.
pub fn parse_dictionary(text: &str) -> Result<WordSet, DictionaryError> {
    // Reading from a byte slice cannot fail with valid UTF-8 input.
    let words = read_words(text.as_bytes()).map_err(|source| DictionaryError::Load {
        path: "<memory>".into(),
        source,
    })?;
    WordSet::new(words)
}

/// The word list compiled into the binary.
pub fn bundled_dictionary() -> Result<WordSet, DictionaryError> {
    let set = parse_dictionary(BUNDLED_WORDS)?;
    info!(words = set.len(), "bundled dictionary loaded");
    Ok(set)
}

fn read_words<R: BufRead>(reader: R) -> io::Result<Vec<Word>> {
    let mut words = Vec::new();
    let mut skipped = 0usize;

    for line in reader.lines() {
        match Word::parse(&line?) {
            Ok(word) => words.push(word),
            Err(_) => skipped += 1,
        }
    }

    debug!(accepted = words.len(), skipped, "dictionary lines read");
    Ok(words)
}
