//! A single game: secret word, attempts, history and outcome.

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::config::GameConfig;
use crate::dictionary::WordSet;
use crate::error::TurnError;
use crate::feedback::{evaluate, FeedbackPattern};
use crate::suggest::Suggester;
use crate::word::Word;

/// Outcome of a session. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// An accepted guess and the feedback it earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnResult {
    pub guess: Word,
    pub pattern: FeedbackPattern,
}

/// Mutable state of one game.
///
/// The word set is borrowed, so any number of sessions can share one loaded
/// dictionary. Every mutating method takes `&mut self`.
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    words: &'a WordSet,
    secret: Word,
    max_attempts: u8,
    steps_left: u8,
    history: Vec<TurnResult>,
    used: HashSet<Word>,
    status: GameStatus,
}

impl<'a> GameSession<'a> {
    /// Start a game with the default configuration and a random secret.
    pub fn new<R: Rng + ?Sized>(words: &'a WordSet, rng: &mut R) -> Self {
        Self::with_config(words, GameConfig::default(), rng)
    }

    pub fn with_config<R: Rng + ?Sized>(
        words: &'a WordSet,
        config: GameConfig,
        rng: &mut R,
    ) -> Self {
        let secret = words.random_word(rng);
        Self::start(words, secret, config)
    }

    /// Start a game with a chosen secret, which must be in `words`.
    pub fn with_secret(
        words: &'a WordSet,
        secret: Word,
        config: GameConfig,
    ) -> Result<Self, TurnError> {
        if !words.contains(&secret) {
            return Err(TurnError::NotInDictionary(secret));
        }
        Ok(Self::start(words, secret, config))
    }

    fn start(words: &'a WordSet, secret: Word, config: GameConfig) -> Self {
        let max_attempts = config.max_attempts.get();
        debug!(max_attempts, dictionary = words.len(), "game started");
        Self {
            words,
            secret,
            max_attempts,
            steps_left: max_attempts,
            history: Vec::new(),
            used: HashSet::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Play one turn from raw player input.
    ///
    /// The input is normalized and validated before anything changes; a
    /// rejected turn leaves the session untouched.
    #[instrument(skip(self), fields(steps_left = self.steps_left))]
    pub fn take_turn(&mut self, input: &str) -> Result<TurnResult, TurnError> {
        self.ensure_in_progress()?;
        let guess = Word::parse(input)?;
        self.guess(guess)
    }

    /// Play one turn with an already validated word.
    pub fn guess(&mut self, guess: Word) -> Result<TurnResult, TurnError> {
        self.ensure_in_progress()?;
        if !self.words.contains(&guess) {
            return Err(TurnError::NotInDictionary(guess));
        }

        self.steps_left -= 1;
        self.used.insert(guess);

        let turn = TurnResult {
            guess,
            pattern: evaluate(&guess, &self.secret),
        };
        self.history.push(turn);

        self.status = if guess == self.secret {
            GameStatus::Won
        } else if self.steps_left == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        debug!(%guess, pattern = %turn.pattern, steps_left = self.steps_left, "turn accepted");
        if self.status.is_finished() {
            info!(status = ?self.status, turns = self.history.len(), "game finished");
        }

        Ok(turn)
    }

    fn ensure_in_progress(&self) -> Result<(), TurnError> {
        if self.status.is_finished() {
            warn!(status = ?self.status, "turn attempted after the game ended");
            return Err(TurnError::GameFinished);
        }
        Ok(())
    }

    /// Propose an unused word consistent with every turn so far.
    ///
    /// The proposal is marked used, so it is never offered again. A finished
    /// game is read-only and gets no proposal.
    #[instrument(skip_all, fields(turns = self.history.len()))]
    pub fn suggest<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Word> {
        if self.status.is_finished() {
            debug!(status = ?self.status, "no suggestion for a finished game");
            return None;
        }
        Suggester::new(self.words).suggest(&self.history, &mut self.used, rng)
    }

    /// Let the hint engine play until the game ends or it runs out of ideas.
    pub fn autoplay<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<GameStatus, TurnError> {
        while !self.is_finished() {
            let Some(hint) = self.suggest(rng) else {
                break;
            };
            self.guess(hint)?;
        }
        Ok(self.status)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn steps_left(&self) -> u8 {
        self.steps_left
    }

    pub fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    /// The secret word.
    pub fn answer(&self) -> Word {
        self.secret
    }

    pub fn history(&self) -> &[TurnResult] {
        &self.history
    }

    /// Guessed words plus every suggestion handed out.
    pub fn used_words(&self) -> &HashSet<Word> {
        &self.used
    }
}
