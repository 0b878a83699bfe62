//! Unscramble - configuration and terminal driver for the word game
//!
//! The game rules live in [`strictly_unscramble`]. This crate loads
//! settings and word lists, and plays a session over plain text streams.
//!
//! # Example
//!
//! ```no_run
//! use unscramble::{AppConfig, OutputFormat, run};
//! use strictly_unscramble::{RngSource, UnscrambleEngine};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AppConfig::from_file("unscramble.toml")?;
//! let mut engine = UnscrambleEngine::new(
//!     config.word_pool()?,
//!     config.game_config()?,
//!     RngSource::from_entropy(),
//! )?;
//!
//! let stdin = std::io::stdin();
//! let mut stdout = std::io::stdout();
//! run(&mut engine, stdin.lock(), &mut stdout, OutputFormat::Text)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod driver;
mod words;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, load_words, parse_words};

// Crate-level exports - Driver
pub use driver::{Command, OutputFormat, run};

// Crate-level exports - Built-in words
pub use words::DEFAULT_WORDS;
