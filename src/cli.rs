//! Command-line interface for unscramble.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Unscramble - guess the word hidden in a scramble
#[derive(Parser, Debug)]
#[command(name = "unscramble")]
#[command(about = "Single-player word unscrambling game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a session on stdin/stdout
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Word list file (overrides words_file in the config)
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,

        /// Print each snapshot as a JSON line
        #[arg(long)]
        json: bool,
    },

    /// Validate a config and word list without playing
    Check {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Word list file (overrides words_file in the config)
        #[arg(short, long)]
        words: Option<PathBuf>,
    },
}
