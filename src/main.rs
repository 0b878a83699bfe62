//! Unscramble - command-line entry point
//!
//! Plays a word-unscrambling session on the terminal, or validates a
//! configuration before one.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_unscramble::{RandomSource, RngSource, UnscrambleEngine};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use unscramble::{AppConfig, OutputFormat, run};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Game output owns stdout; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            words,
            seed,
            json,
        } => run_play(config, words, seed, json),
        Command::Check { config, words } => run_check(config, words),
    }
}

/// Resolves the config file and word-list override into one config.
#[instrument]
fn load_config(config: Option<PathBuf>, words: Option<PathBuf>) -> Result<AppConfig> {
    let app_config = AppConfig::load_or_default(config.as_deref())?;
    Ok(match words {
        Some(path) => app_config.with_words_file(path),
        None => app_config,
    })
}

/// Play a session on stdin/stdout
#[instrument]
fn run_play(
    config: Option<PathBuf>,
    words: Option<PathBuf>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let app_config = load_config(config, words)?;
    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match seed {
        Some(seed) => {
            info!(seed, "Starting seeded session");
            play(&app_config, RngSource::seeded(seed), format)
        }
        None => play(&app_config, RngSource::from_entropy(), format),
    }
}

fn play<R: RandomSource>(app_config: &AppConfig, source: R, format: OutputFormat) -> Result<()> {
    let mut engine = UnscrambleEngine::new(app_config.word_pool()?, app_config.game_config()?, source)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let last = run(&mut engine, stdin.lock(), &mut stdout, format)?;

    info!(score = last.score(), game_over = last.is_game_over(), "Session ended");
    Ok(())
}

/// Validate a config and word list without playing
#[instrument]
fn run_check(config: Option<PathBuf>, words: Option<PathBuf>) -> Result<()> {
    let app_config = load_config(config, words)?;
    let game_config = app_config.game_config()?;
    let pool = app_config.word_pool()?;

    // Same checks the engine runs at construction.
    UnscrambleEngine::new(pool.clone(), game_config, RngSource::seeded(0))?;

    println!(
        "OK: {} words, {} rounds per session, {} points per correct guess",
        pool.len(),
        game_config.max_rounds(),
        game_config.score_increase()
    );
    Ok(())
}
