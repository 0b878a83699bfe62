//! Line-oriented driver that plays a session over any reader and writer.
//!
//! Each input line is one action. Lines starting with `:` are commands;
//! anything else is a guess.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use strictly_unscramble::{RandomSource, SessionState, UnscrambleEngine};
use tracing::{debug, info, instrument};

/// Commands recognised by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
pub enum Command {
    /// Move to the next word without scoring.
    #[strum(to_string = ":skip", serialize = ":s")]
    Skip,
    /// Start a new session.
    #[strum(to_string = ":reset", serialize = ":r")]
    Reset,
    /// Stop playing.
    #[strum(to_string = ":quit", serialize = ":q")]
    Quit,
}

/// How snapshots are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable status lines.
    #[default]
    Text,
    /// One JSON-serialized [`SessionState`] per line.
    Json,
}

/// What happened to a guess line, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuessReport {
    /// Letters not drawn from the puzzle.
    Rejected,
    /// Right letters, wrong count.
    Incomplete { needed: usize },
    /// Checked and wrong.
    Wrong,
    /// Checked and right.
    Correct,
}

/// Plays a session, reading actions from `input` until `:quit` or end of input.
///
/// Guess lines are trimmed and lowercased before they reach the engine.
/// Returns the last snapshot.
#[instrument(skip_all, fields(format = ?format))]
pub fn run<R, I, O>(
    engine: &mut UnscrambleEngine<R>,
    input: I,
    output: &mut O,
    format: OutputFormat,
) -> io::Result<SessionState>
where
    R: RandomSource,
    I: BufRead,
    O: Write,
{
    write_state(engine, output, format)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with(':') {
            match Command::from_str(line) {
                Ok(Command::Quit) => {
                    info!("Player quit");
                    break;
                }
                Ok(Command::Skip) => {
                    engine.skip();
                }
                Ok(Command::Reset) => {
                    engine.reset();
                }
                Err(_) => {
                    debug!(line, "Unknown command");
                    if format == OutputFormat::Text {
                        writeln!(output, "Unknown command {line}. Try :skip, :reset or :quit.")?;
                    }
                    continue;
                }
            }
        } else if engine.state().is_game_over() {
            if format == OutputFormat::Text {
                writeln!(output, "The game is over. Type :reset to play again.")?;
            }
            continue;
        } else {
            let report = guess(engine, &line.to_lowercase());
            if format == OutputFormat::Text {
                write_report(output, report)?;
            }
        }

        write_state(engine, output, format)?;
    }

    Ok(engine.state().clone())
}

/// Feeds one guess through the typing filter and the submit check.
fn guess<R: RandomSource>(engine: &mut UnscrambleEngine<R>, text: &str) -> GuessReport {
    if engine.set_pending_guess(text).user_guess() != text {
        return GuessReport::Rejected;
    }

    let state = engine.submit_if_complete();

    if !state.user_guess().is_empty() {
        // Not submitted; drop it so the next line starts fresh.
        let needed = engine.word_len();
        engine.set_user_guess("");
        GuessReport::Incomplete { needed }
    } else if state.is_guessed_word_wrong() {
        GuessReport::Wrong
    } else {
        GuessReport::Correct
    }
}

fn write_report<O: Write>(output: &mut O, report: GuessReport) -> io::Result<()> {
    match report {
        GuessReport::Rejected => writeln!(output, "Those letters are not in the puzzle."),
        GuessReport::Incomplete { needed } => writeln!(output, "The word has {needed} letters."),
        GuessReport::Wrong => writeln!(output, "Wrong guess, try again or :skip."),
        GuessReport::Correct => writeln!(output, "Correct!"),
    }
}

fn write_state<R, O>(engine: &UnscrambleEngine<R>, output: &mut O, format: OutputFormat) -> io::Result<()>
where
    R: RandomSource,
    O: Write,
{
    let state = engine.state();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *output, state)?;
            writeln!(output)
        }
        OutputFormat::Text if state.is_game_over() => writeln!(
            output,
            "Game over! Final score: {}. Type :reset to play again or :quit.",
            state.score()
        ),
        OutputFormat::Text => writeln!(
            output,
            "Round {}/{} | Score {} | Unscramble: {}",
            state.current_word_count(),
            engine.config().max_rounds(),
            state.score(),
            state.scrambled_word()
        ),
    }
}
