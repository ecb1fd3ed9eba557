//! Hangman - CLI
//!
//! Hangman with TUI and text modes, hints and a CSV leaderboard.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{run_scores, run_simple},
    core::{ScoringPolicy, SessionConfig},
    game::GameEngine,
    ledger::Ledger,
    wordlists::WordSource,
};
use log::{LevelFilter, info};
use rand::{SeedableRng, rngs::StdRng};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word lists: 'embedded' (default) or a directory holding easy.txt, medium.txt, hard.txt
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Leaderboard CSV file
    #[arg(short, long, global = true, default_value = "data/score.csv")]
    ledger: PathBuf,

    /// Seed for deterministic word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Scoring: 'letters' (default, +1 per revealed letter) or 'classic' (+100/-50)
    #[arg(long, global = true, default_value = "letters")]
    scoring: ScoringPolicy,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode
    Simple,

    /// Print the leaderboard
    Scores,
}

/// Load word lists based on the -w flag
fn load_words(source: &str) -> Result<WordSource> {
    let words = match source {
        "embedded" => WordSource::embedded()?,
        dir => WordSource::from_dir(dir).with_context(|| format!("loading word lists from {dir}"))?,
    };
    Ok(words)
}

/// Logger reading `RUST_LOG`; while the TUI owns the terminal it writes to `log_path`
fn logger(tui: bool, log_path: &Path) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_default_env();
    if tui {
        match OpenOptions::new().create(true).append(true).open(log_path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(_) => {
                builder.filter_level(LevelFilter::Off);
            }
        }
    }
    builder
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    logger(
        matches!(command, Commands::Play),
        &std::env::temp_dir().join("hangman.log"),
    )
    .init();

    let ledger = Ledger::new(&cli.ledger);
    if matches!(command, Commands::Scores) {
        run_scores(&ledger);
        return Ok(());
    }

    let words = load_words(&cli.words)?;
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let config = SessionConfig::default().with_scoring(cli.scoring);
    let mut engine = GameEngine::new(&words, ledger, rng).with_config(config);
    info!(
        "Starting hangman (scoring: {}, ledger: {})",
        engine.config().scoring(),
        engine.ledger().path().display()
    );

    match command {
        Commands::Play => run_play_command(engine),
        Commands::Simple => run_simple(&mut engine).map_err(|e| anyhow::anyhow!(e)),
        Commands::Scores => Ok(()),
    }
}

fn run_play_command(engine: GameEngine<'_, Ledger, StdRng>) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(engine);
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Record};
    use std::fs;

    #[test]
    fn tui_logging_goes_to_file() {
        let path =
            std::env::temp_dir().join(format!("hangman-main-{}.log", std::process::id()));
        let _ = fs::remove_file(&path);

        let logger = logger(true, &path).build();
        logger.log(
            &Record::builder()
                .args(format_args!("score not recorded"))
                .level(Level::Error)
                .build(),
        );
        logger.flush();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("score not recorded"));

        fs::remove_file(&path).unwrap();
    }
}
