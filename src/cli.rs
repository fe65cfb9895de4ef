//! Command-line interface for wordle-ru.

use std::num::NonZeroU8;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wordle_ru::{GameConfig, MAX_ATTEMPTS};

/// Wordle RU - guess the five-letter Russian word
#[derive(Parser, Debug)]
#[command(name = "wordle-ru")]
#[command(about = "Russian Wordle with a hint engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Dictionary file, one word per line. The bundled list is used when omitted
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,

    /// File receiving diagnostic logs
    #[arg(long, default_value = "wordle.log")]
    pub log: PathBuf,

    /// Seed for secret and hint selection (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Guesses allowed per game
    #[arg(long, default_value_t = MAX_ATTEMPTS)]
    pub attempts: NonZeroU8,

    /// Show feedback as colored squares instead of +^-
    #[arg(long)]
    pub emoji: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(self.attempts)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively (default)
    Play,

    /// Watch the hint engine solve a game
    Solve {
        /// Secret word; a random one is drawn when omitted
        word: Option<String>,
    },
}
