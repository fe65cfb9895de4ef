//! Wordle RU CLI
//!
//! Interactive game loop, plus a `solve` mode where the hint engine plays.

mod cli;

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wordle_ru::{
    bundled_dictionary, load_dictionary, FeedbackPattern, GameConfig, GameSession, GameStatus,
    TurnError, Word, WordError, WordSet,
};

use cli::{Cli, Command};

const BANNER_TEXT: &str = include_str!("text/banner.txt");

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn load_words(cli: &Cli) -> Result<WordSet> {
    let words = match &cli.dictionary {
        Some(path) => load_dictionary(path)?,
        None => bundled_dictionary()?,
    };
    Ok(words)
}

fn render(pattern: FeedbackPattern, emoji: bool) -> String {
    if emoji {
        pattern.to_emoji_string()
    } else {
        pattern.to_string()
    }
}

fn describe(err: &TurnError) -> String {
    match err {
        TurnError::InvalidFormat(WordError::Length { expected, .. }) => {
            format!("нужно слово из {} русских букв", expected)
        }
        TurnError::InvalidFormat(WordError::Alphabet(c)) => {
            format!("буква «{}» не из русского алфавита", c)
        }
        TurnError::NotInDictionary(word) => format!("слова «{}» нет в словаре", word),
        TurnError::GameFinished => "игра уже окончена".to_string(),
    }
}

/// Player-facing notice for a fatal error. Without a log file the cause chain is
/// the only place the detail ends up.
fn failure_notice(err: &anyhow::Error, logging: bool) -> String {
    if logging {
        "Ошибка программы. Подробности в логе.".to_string()
    } else {
        format!("Ошибка программы: {:#}", err)
    }
}

fn run_interactive(
    words: &WordSet,
    config: GameConfig,
    rng: &mut StdRng,
    emoji: bool,
) -> Result<()> {
    println!("{}", BANNER_TEXT);

    let mut game = GameSession::with_config(words, config, rng);
    info!(words = words.len(), attempts = game.max_attempts(), "new game");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    while !game.is_finished() {
        println!("Введите слово:");
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            println!("Игра прервана. Загаданное слово: {}", game.answer());
            return Ok(());
        }

        match line.trim() {
            "" => continue,
            ":quit" | ":q" => {
                println!("Загаданное слово: {}", game.answer());
                return Ok(());
            }
            ":hint" | "?" => {
                match game.suggest(rng) {
                    Some(hint) => println!("Подсказка: {}", hint),
                    None => println!("Подходящих слов не осталось."),
                }
                continue;
            }
            _ => {}
        }

        match game.take_turn(&line) {
            Ok(turn) => {
                println!("{}", turn.guess);
                println!("{}", render(turn.pattern, emoji));
                println!("Осталось попыток: {}", game.steps_left());
            }
            Err(err) => println!("Ошибка: {}", describe(&err)),
        }
    }

    if game.is_won() {
        println!("Победа!");
    } else {
        println!("Попытки закончились.");
        println!("Загаданное слово: {}", game.answer());
    }

    Ok(())
}

fn run_solve(
    words: &WordSet,
    config: GameConfig,
    secret: Option<&str>,
    rng: &mut StdRng,
    emoji: bool,
) -> Result<()> {
    let mut game = match secret {
        Some(raw) => {
            let secret = Word::parse(raw).with_context(|| format!("invalid secret word {:?}", raw))?;
            GameSession::with_secret(words, secret, config)?
        }
        None => GameSession::with_config(words, config, rng),
    };

    println!("Загаданное слово: {}", game.answer());
    println!();

    let status = game.autoplay(rng)?;

    for (i, turn) in game.history().iter().enumerate() {
        println!("Попытка {}: {} → {}", i + 1, turn.guess, render(turn.pattern, emoji));
    }

    println!();
    match status {
        GameStatus::Won => println!("Угадано. Попыток: {}", game.history().len()),
        GameStatus::Lost => println!("Не угадано. Попыток: {}", game.max_attempts()),
        GameStatus::InProgress => println!("Подходящих слов не осталось."),
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = init_logging(&cli.log);
    if let Err(err) = &logging {
        eprintln!("Журнал недоступен, игра продолжится без него: {:#}", err);
    }

    let words = match load_words(&cli) {
        Ok(words) => words,
        Err(err) => {
            error!("dictionary unavailable: {:#}", err);
            if logging.is_ok() {
                println!("{}", failure_notice(&err, true));
            } else {
                eprintln!("{}", failure_notice(&err, false));
            }
            return ExitCode::FAILURE;
        }
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = cli.game_config();

    let outcome = match &cli.command {
        None | Some(Command::Play) => run_interactive(&words, config, &mut rng, cli.emoji),
        Some(Command::Solve { word }) => {
            run_solve(&words, config, word.as_deref(), &mut rng, cli.emoji)
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("game aborted: {:#}", err);
            eprintln!("Критическая ошибка: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
