//! TUI application state and logic

use crate::commands::{Leaderboard, load_leaderboard};
use crate::core::{Difficulty, GameError, Snapshot, Status};
use crate::game::{GameEngine, Turn};
use crate::ledger::Ledger;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest name accepted by the input box
const MAX_NAME_LEN: usize = 24;

/// Entries of the main menu after the difficulties
pub const MENU_EXTRAS: [&str; 2] = ["Score", "Exit"];

/// Application state
pub struct App<'a, R: Rng> {
    pub engine: GameEngine<'a, Ledger, R>,
    pub screen: Screen,
    /// Latest session state, the only thing the game screen renders
    pub snapshot: Option<Snapshot>,
    pub popup: Option<Popup>,
    /// Width reserved for the word, from the longest word loaded
    pub word_width: usize,
    pub should_quit: bool,
}

#[derive(Debug)]
pub enum Screen {
    Menu { selected: usize },
    PlayerName { difficulty: Difficulty, input: String },
    Playing { cursor: usize },
    Scores { board: Leaderboard, scroll: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Modal message; dismissing it may end the session
#[derive(Debug, Clone)]
pub struct Popup {
    pub title: String,
    pub text: String,
    pub style: MessageStyle,
    pub back_to_menu: bool,
}

impl Popup {
    fn new(title: &str, text: impl Into<String>, style: MessageStyle) -> Self {
        Self {
            title: title.to_string(),
            text: text.into(),
            style,
            back_to_menu: false,
        }
    }

    fn then_menu(mut self) -> Self {
        self.back_to_menu = true;
        self
    }
}

/// Next hidden position from `from`, searching in one direction and wrapping
fn next_hidden(snapshot: &Snapshot, from: usize, forward: bool) -> Option<usize> {
    let len = snapshot.mask.len();
    if len == 0 {
        return None;
    }
    (1..=len)
        .map(|step| {
            if forward {
                (from + step) % len
            } else {
                (from + len * step - step) % len
            }
        })
        .find(|&i| snapshot.mask[i].is_none())
}

/// First hidden position at or after the start of the word
fn first_hidden(snapshot: &Snapshot) -> usize {
    snapshot.hidden_positions().next().unwrap_or(0)
}

impl<'a, R: Rng> App<'a, R> {
    #[must_use]
    pub fn new(engine: GameEngine<'a, Ledger, R>) -> Self {
        let word_width = engine.words().longest_word();
        Self {
            engine,
            screen: Screen::Menu { selected: 0 },
            snapshot: None,
            popup: None,
            word_width,
            should_quit: false,
        }
    }

    /// Number of menu entries
    #[must_use]
    pub const fn menu_len() -> usize {
        Difficulty::ALL.len() + MENU_EXTRAS.len()
    }

    fn go_to_menu(&mut self) {
        self.engine.abandon();
        self.snapshot = None;
        self.screen = Screen::Menu { selected: 0 };
    }

    fn open_scores(&mut self) {
        let board = load_leaderboard(self.engine.ledger());
        if let Some(warning) = &board.warning {
            self.popup = Some(Popup::new("Score", warning.clone(), MessageStyle::Info));
        }
        self.screen = Screen::Scores { board, scroll: 0 };
    }

    fn select_menu(&mut self, selected: usize) {
        if let Some(&difficulty) = Difficulty::ALL.get(selected) {
            self.screen = Screen::PlayerName {
                difficulty,
                input: String::new(),
            };
        } else if selected == Difficulty::ALL.len() {
            self.open_scores();
        } else {
            self.should_quit = true;
        }
    }

    fn start_game(&mut self, difficulty: Difficulty, name: &str) {
        match self.engine.start(difficulty, name) {
            Ok(snapshot) => {
                self.screen = Screen::Playing {
                    cursor: first_hidden(&snapshot),
                };
                self.snapshot = Some(snapshot);
            }
            Err(e) => {
                self.popup = Some(Popup::new("Error", e.to_string(), MessageStyle::Error));
            }
        }
    }

    fn apply_turn(&mut self, result: Result<Turn, GameError>, hinted: bool) {
        match result {
            Ok(turn) => {
                let popup = match turn.status {
                    Status::Won => Some(
                        Popup::new(
                            "Congratulation",
                            "Congratulation You Win!",
                            MessageStyle::Success,
                        )
                        .then_menu(),
                    ),
                    Status::Lost => Some(
                        Popup::new(
                            "Game Over",
                            format!(
                                "Too bad, you lose. The word was '{}'.",
                                turn.snapshot.answer.as_deref().unwrap_or_default()
                            ),
                            MessageStyle::Error,
                        )
                        .then_menu(),
                    ),
                    Status::InProgress if hinted => Some(Popup::new(
                        "Hint",
                        format!("You have {} hint(s) left", turn.snapshot.hints_left),
                        MessageStyle::Info,
                    )),
                    Status::InProgress => None,
                };

                if let Screen::Playing { cursor } = &mut self.screen
                    && turn.snapshot.mask.get(*cursor).is_some_and(Option::is_some)
                {
                    *cursor = next_hidden(&turn.snapshot, *cursor, true).unwrap_or(*cursor);
                }
                self.snapshot = Some(turn.snapshot);
                self.popup = popup;
            }
            Err(GameError::NoHintsRemaining) => {
                self.popup = Some(Popup::new(
                    "Hint",
                    "You have no hint left",
                    MessageStyle::Info,
                ));
            }
            Err(e @ GameError::Ledger(_)) => {
                self.snapshot = self.engine.snapshot();
                self.popup =
                    Some(Popup::new("Error", e.to_string(), MessageStyle::Error).then_menu());
            }
            Err(e) => {
                debug!("Rejected input: {e}");
                self.popup = Some(Popup::new("Error", e.to_string(), MessageStyle::Error));
            }
        }
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(popup) = &self.popup {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                let back_to_menu = popup.back_to_menu;
                self.popup = None;
                if back_to_menu {
                    self.go_to_menu();
                }
            }
            return;
        }

        match &mut self.screen {
            Screen::Menu { selected } => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    *selected = (*selected + Self::menu_len() - 1) % Self::menu_len();
                }
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                    *selected = (*selected + 1) % Self::menu_len();
                }
                KeyCode::Char(c @ '1'..='3') => {
                    let index = (c as usize) - ('1' as usize);
                    self.select_menu(index);
                }
                KeyCode::Char('s') => self.open_scores(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => {
                    let index = *selected;
                    self.select_menu(index);
                }
                _ => {}
            },
            Screen::PlayerName { difficulty, input } => match key.code {
                KeyCode::Esc => self.go_to_menu(),
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) if !c.is_control() && input.chars().count() < MAX_NAME_LEN => {
                    input.push(c);
                }
                KeyCode::Enter => {
                    let difficulty = *difficulty;
                    let name = input.clone();
                    self.start_game(difficulty, &name);
                }
                _ => {}
            },
            Screen::Playing { cursor } => match key.code {
                KeyCode::Esc => self.go_to_menu(),
                KeyCode::Left | KeyCode::Right => {
                    if let Some(snapshot) = &self.snapshot
                        && let Some(next) =
                            next_hidden(snapshot, *cursor, key.code == KeyCode::Right)
                    {
                        *cursor = next;
                    }
                }
                KeyCode::Enter => {
                    let position = *cursor;
                    let result = self.engine.reveal(position);
                    self.apply_turn(result, true);
                }
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    let result = self.engine.guess(c);
                    self.apply_turn(result, false);
                }
                _ => {}
            },
            Screen::Scores { board, scroll } => match key.code {
                KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
                KeyCode::Down | KeyCode::Char('j') => {
                    if *scroll + 1 < board.entries.len() {
                        *scroll += 1;
                    }
                }
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('b' | 'q') => {
                    self.screen = Screen::Menu {
                        selected: Difficulty::ALL.len(),
                    };
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordSource;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;

    fn words() -> WordSource {
        WordSource::new(
            words_from_slice(&["cat"]),
            words_from_slice(&["planet"]),
            words_from_slice(&["rhythm"]),
        )
        .unwrap()
    }

    fn ledger_path(name: &str) -> std::path::PathBuf {
        let path =
            std::env::temp_dir().join(format!("hangman-app-{}-{name}.csv", std::process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    fn press(app: &mut App<'_, StdRng>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App<'_, StdRng>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app<'a>(words: &'a WordSource, path: &std::path::Path) -> App<'a, StdRng> {
        let engine = GameEngine::new(words, Ledger::new(path), StdRng::seed_from_u64(3));
        App::new(engine)
    }

    #[test]
    fn menu_navigation_wraps() {
        let words = words();
        let path = ledger_path("menu");
        let mut app = app(&words, &path);

        press(&mut app, KeyCode::Up);
        assert!(matches!(app.screen, Screen::Menu { selected: 4 }));
        press(&mut app, KeyCode::Down);
        assert!(matches!(app.screen, Screen::Menu { selected: 0 }));

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert!(app.should_quit);
    }

    #[test]
    fn short_name_shows_error_and_stays() {
        let words = words();
        let path = ledger_path("short");
        let mut app = app(&words, &path);

        press(&mut app, KeyCode::Char('1'));
        type_text(&mut app, "Bob");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.screen, Screen::PlayerName { .. }));
        let popup = app.popup.clone().unwrap();
        assert_eq!(popup.style, MessageStyle::Error);

        press(&mut app, KeyCode::Enter);
        assert!(app.popup.is_none());
        assert!(matches!(app.screen, Screen::PlayerName { .. }));
    }

    #[test]
    fn full_game_records_score_and_returns_to_menu() {
        let words = words();
        let path = ledger_path("win");
        let mut app = app(&words, &path);

        press(&mut app, KeyCode::Char('1'));
        type_text(&mut app, "Alice");
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.screen, Screen::Playing { cursor: 0 }));

        type_text(&mut app, "cat");
        let snapshot = app.snapshot.clone().unwrap();
        assert_eq!(snapshot.status, Status::Won);
        assert_eq!(app.popup.as_ref().unwrap().title, "Congratulation");

        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.screen, Screen::Menu { .. }));
        assert!(app.snapshot.is_none());

        let entries = Ledger::new(&path).load_sorted().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].player, "Alice");
        assert_eq!(entries[0].score, 3);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn hint_moves_cursor_and_reports_remaining() {
        let words = words();
        let path = ledger_path("hint");
        let mut app = app(&words, &path);

        press(&mut app, KeyCode::Char('1'));
        type_text(&mut app, "Alice");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Right);
        assert!(matches!(app.screen, Screen::Playing { cursor: 1 }));
        press(&mut app, KeyCode::Enter);

        let snapshot = app.snapshot.clone().unwrap();
        assert_eq!(snapshot.masked_word(), "_a_");
        assert_eq!(snapshot.hints_left, 2);
        assert_eq!(app.popup.as_ref().unwrap().text, "You have 2 hint(s) left");
        assert!(matches!(app.screen, Screen::Playing { cursor: 2 }));

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Esc);
        assert!(matches!(app.screen, Screen::Menu { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn missing_ledger_shows_empty_scores() {
        let words = words();
        let path = ledger_path("scores");
        let mut app = app(&words, &path);

        press(&mut app, KeyCode::Char('s'));
        match &app.screen {
            Screen::Scores { board, .. } => assert!(board.entries.is_empty()),
            other => panic!("unexpected screen {other:?}"),
        }
        assert!(app.popup.is_some());
    }

    #[test]
    fn next_hidden_wraps_both_ways() {
        let snapshot = Snapshot {
            player: "Alice".to_string(),
            difficulty: Difficulty::Easy,
            mask: vec![None, Some('a'), None, Some('b')],
            guessed: crate::core::LetterSet::new(),
            wrong_letters: crate::core::LetterSet::new(),
            wrong: 0,
            max_wrong: 10,
            hints_left: 3,
            score: 0,
            status: Status::InProgress,
            answer: None,
        };
        assert_eq!(next_hidden(&snapshot, 0, true), Some(2));
        assert_eq!(next_hidden(&snapshot, 2, true), Some(0));
        assert_eq!(next_hidden(&snapshot, 0, false), Some(2));
        assert_eq!(next_hidden(&snapshot, 2, false), Some(0));
    }
}
