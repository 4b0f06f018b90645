//! Terminal front-end for memory-match.
//!
//! Reads one command per line from stdin:
//! - a card number (1-based) to reveal it
//! - `r` to deal a new game
//! - `q` to quit
//!
//! The game clock follows wall time: before each command the engine is
//! advanced to the time elapsed since start.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use memory_match::core::config::DEFAULT_COLUMNS;
use memory_match::{Board, GameConfig, GameEvent, GameRng, GameState, MemoryGame, SelectOutcome};

#[derive(Parser, Debug)]
#[command(name = "memory-match")]
#[command(about = "Find every pair of matching cards", long_about = None)]
struct Cli {
    /// Shuffle seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated symbols, one pair per symbol
    #[arg(long, value_delimiter = ',')]
    symbols: Vec<String>,

    /// Cards per row
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,
}

/// A line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Select(usize),
    Reset,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "r" | "reset" => Some(Command::Reset),
        "q" | "quit" => Some(Command::Quit),
        other => other
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .map(Command::Select),
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn draw(out: &mut impl Write, game: &MemoryGame) -> Result<()> {
    writeln!(out)?;
    write!(out, "{}", Board::new(game.state(), game.config().columns))?;
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = if cli.symbols.is_empty() {
        GameConfig::default()
    } else {
        GameConfig::with_symbols(cli.symbols)
    }
    .with_columns(cli.columns);

    let rng = cli.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);
    let mut game = MemoryGame::with_rng(config, rng).context("invalid game configuration")?;
    log::info!("starting game with seed {}", game.seed());

    game.subscribe(|_: &GameState, event: &GameEvent| {
        if let GameEvent::Completed {
            attempts,
            elapsed_seconds,
        } = event
        {
            println!(
                "\nAll pairs found in {} attempts and {} seconds! Press r to play again.",
                attempts, elapsed_seconds
            );
        }
    });

    let started = Instant::now();
    let mut out = io::stdout();
    draw(&mut out, &game)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read input")?;
        game.advance_to(elapsed_ms(started));

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Reset) => game.reset(),
            Some(Command::Select(index)) => match game.select(index) {
                Ok(SelectOutcome::PairRevealed { resolve_at_ms, .. }) => {
                    draw(&mut out, &game)?;
                    writeln!(out)?;
                    let wait = resolve_at_ms.saturating_sub(elapsed_ms(started));
                    thread::sleep(Duration::from_millis(wait));
                    game.advance_to(elapsed_ms(started).max(resolve_at_ms));
                }
                Ok(SelectOutcome::Ignored(reason)) => {
                    writeln!(out, "Ignored: {:?}", reason)?;
                }
                Ok(SelectOutcome::Revealed { .. }) => {}
                Err(err) => writeln!(out, "{}", err)?,
            },
            None => writeln!(out, "Enter a card number, r to reset, or q to quit")?,
        }

        draw(&mut out, &game)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("1"), Some(Command::Select(0)));
        assert_eq!(parse_command(" 12 \n"), Some(Command::Select(11)));
        assert_eq!(parse_command("r"), Some(Command::Reset));
        assert_eq!(parse_command("reset"), Some(Command::Reset));
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("0"), None);
        assert_eq!(parse_command("-1"), None);
        assert_eq!(parse_command("flip"), None);
    }

    #[test]
    fn test_cli_parses_symbols() {
        let cli = Cli::parse_from(["memory-match", "--seed", "7", "--symbols", "a,b,c", "--columns", "2"]);

        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.symbols, vec!["a", "b", "c"]);
        assert_eq!(cli.columns, 2);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["memory-match"]);

        assert_eq!(cli.seed, None);
        assert!(cli.symbols.is_empty());
        assert_eq!(cli.columns, DEFAULT_COLUMNS);
    }
}
