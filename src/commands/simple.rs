//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: a menu, a name prompt and a guessing loop.

use crate::commands::scores::run_scores;
use crate::core::{Difficulty, GameError, Snapshot};
use crate::game::{GameEngine, Turn};
use crate::ledger::Ledger;
use crate::output::{print_outcome, print_snapshot};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play(Difficulty),
    Scores,
    Exit,
}

/// Input during a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    Guess(char),
    /// Reveal the letter at a zero-based position
    Hint(usize),
    Back,
    Quit,
}

/// Parse a menu line: a number, a difficulty name, `scores` or `exit`
#[must_use]
pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "s" | "score" | "scores" => Some(MenuChoice::Scores),
        "x" | "exit" | "quit" => Some(MenuChoice::Exit),
        _ => {
            if let Ok(n) = input.parse::<usize>() {
                return n
                    .checked_sub(1)
                    .and_then(|i| Difficulty::ALL.get(i).copied())
                    .map(MenuChoice::Play);
            }
            input.parse().ok().map(MenuChoice::Play)
        }
    }
}

/// Parse a game line: a single letter, `hint N` / `?N` (1-based), `back` or `quit`
#[must_use]
pub fn parse_play_command(input: &str) -> Option<PlayCommand> {
    let input = input.trim().to_lowercase();

    let mut chars = input.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && c.is_ascii_alphabetic()
    {
        return Some(PlayCommand::Guess(c));
    }

    match input.as_str() {
        "back" | "menu" => return Some(PlayCommand::Back),
        "quit" | "exit" => return Some(PlayCommand::Quit),
        _ => {}
    }

    let position = input
        .strip_prefix("hint")
        .or_else(|| input.strip_prefix('?'))?
        .trim();
    position
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .map(PlayCommand::Hint)
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(engine: &mut GameEngine<'_, Ledger, R>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Welcome To Hangman!                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    loop {
        println!("Choose Difficulty:");
        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            println!("  {}. {difficulty}", i + 1);
        }
        println!("  s. Scores");
        println!("  x. Exit\n");

        match parse_menu_choice(&get_user_input("Choice")?) {
            Some(MenuChoice::Play(difficulty)) => {
                if !play(engine, difficulty)? {
                    break;
                }
            }
            Some(MenuChoice::Scores) => {
                run_scores(engine.ledger());
                println!();
            }
            Some(MenuChoice::Exit) => break,
            None => println!("❌ Unknown choice\n"),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// One session from the name prompt to the end; false means quit the program
fn play<R: Rng>(
    engine: &mut GameEngine<'_, Ledger, R>,
    difficulty: Difficulty,
) -> Result<bool, String> {
    let mut snapshot = loop {
        let name = get_user_input("Player Name (or 'back')")?;
        if name.eq_ignore_ascii_case("back") {
            return Ok(true);
        }
        match engine.start(difficulty, &name) {
            Ok(snapshot) => break snapshot,
            Err(e) => println!("❌ {e}\n"),
        }
    };

    println!("\nPlay Hangman! Type a letter, 'hint N' to reveal position N, 'back' or 'quit'.");

    loop {
        print_snapshot(&snapshot);

        let Some(command) = parse_play_command(&get_user_input("\nGuess")?) else {
            println!("❌ Type one letter, 'hint N', 'back' or 'quit'");
            continue;
        };

        let result = match command {
            PlayCommand::Guess(letter) => engine.guess(letter),
            PlayCommand::Hint(position) => engine.reveal(position),
            PlayCommand::Back => {
                engine.abandon();
                return Ok(true);
            }
            PlayCommand::Quit => {
                engine.abandon();
                return Ok(false);
            }
        };

        match result {
            Ok(Turn {
                status, snapshot: next, ..
            }) => {
                if matches!(command, PlayCommand::Hint(_)) {
                    println!("💡 You have {} hint(s) left", next.hints_left);
                }
                if status.is_terminal() {
                    finish(engine, &next, true);
                    return Ok(true);
                }
                snapshot = next;
            }
            Err(GameError::Ledger(e)) => {
                println!("{} Could not save your score: {e}", "⚠".yellow());
                if let Some(last) = engine.snapshot() {
                    finish(engine, &last, false);
                }
                return Ok(true);
            }
            Err(e) => println!("❌ {e}"),
        }
    }
}

fn finish<R: Rng>(engine: &mut GameEngine<'_, Ledger, R>, snapshot: &Snapshot, saved: bool) {
    print_snapshot(snapshot);
    print_outcome(snapshot);
    if saved {
        println!("  Score saved to the leaderboard.\n");
    }
    engine.abandon();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("stdin closed".to_string());
    }

    Ok(input.trim().to_string())
}
