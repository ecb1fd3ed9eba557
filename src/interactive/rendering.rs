//! TUI rendering with ratatui
//!
//! Draws whichever screen is active plus the modal popup, reading the game
//! only through the latest `Snapshot`.

use super::app::{App, MENU_EXTRAS, MessageStyle, Popup, Screen};
use crate::commands::Leaderboard;
use crate::core::{Difficulty, Snapshot};
use crate::output::formatters::{KEYBOARD_ROWS, gallows, lives_bar};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Help bar
        ])
        .split(f.area());

    let (title, help) = match &app.screen {
        Screen::Menu { .. } => (
            "Welcome To Hangman!",
            "↑/↓: Move | Enter: Select | 1-3: Difficulty | s: Score | q: Exit",
        ),
        Screen::PlayerName { .. } => (
            "Input Player Name",
            "Enter: Start | Esc: Back (names need more than 3 characters)",
        ),
        Screen::Playing { .. } => (
            "Play Hangman!",
            "a-z: Guess | ←/→: Pick blank | Enter: Hint | Esc: Back",
        ),
        Screen::Scores { .. } => ("Score", "↑/↓: Scroll | Esc: Back"),
    };

    render_header(f, chunks[0], title);

    match &app.screen {
        Screen::Menu { selected } => render_menu(f, chunks[1], *selected),
        Screen::PlayerName { difficulty, input } => {
            render_name_input(f, chunks[1], *difficulty, input);
        }
        Screen::Playing { cursor } => {
            if let Some(snapshot) = &app.snapshot {
                render_game(f, chunks[1], snapshot, *cursor, app.word_width);
            }
        }
        Screen::Scores { board, scroll } => render_scores(f, chunks[1], board, *scroll),
    }

    let help = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, chunks[2]);

    if let Some(popup) = &app.popup {
        render_popup(f, popup);
    }
}

fn render_header(f: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(format!("🪢 HANGMAN - {title}"))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_menu(f: &mut Frame, area: Rect, selected: usize) {
    let labels = Difficulty::ALL
        .iter()
        .map(|d| d.label())
        .chain(MENU_EXTRAS);

    let mut lines = vec![Line::from("Choose Difficulty"), Line::from("")];
    for (i, label) in labels.enumerate() {
        let line = if i == selected {
            Line::from(Span::styled(
                format!("▶ {label:^20} ◀"),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(format!("  {label:^20}  "))
        };
        lines.push(line);
    }

    let menu = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, centered_rect(40, 11, area));
}

fn render_name_input(f: &mut Frame, area: Rect, difficulty: Difficulty, input: &str) {
    let input = Paragraph::new(format!("{input}▏"))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(format!(" Player Name ({difficulty}) "))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, centered_rect(44, 3, area));
}

fn render_game(f: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: usize, word_width: usize) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24), // Gallows
            Constraint::Min(30),    // Word, keyboard, status
        ])
        .split(area);

    let stage = Paragraph::new(gallows(snapshot.wrong))
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(format!(" Stage {}/{} ", snapshot.wrong, snapshot.max_wrong))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(stage, chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Word
            Constraint::Length(5), // Keyboard
            Constraint::Min(4),    // Status
        ])
        .split(chunks[1]);

    // Two columns per letter, as wide as the longest word in play
    let word_area = Rect {
        width: right[0]
            .width
            .min(u16::try_from(word_width * 2 + 4).unwrap_or(u16::MAX))
            .max(20),
        ..right[0]
    }
    .intersection(right[0]);
    render_word(f, word_area, snapshot, cursor);
    render_keyboard(f, right[1], snapshot);
    render_status(f, right[2], snapshot);
}

fn render_word(f: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: usize) {
    let spans: Vec<Span> = snapshot
        .mask
        .iter()
        .enumerate()
        .flat_map(|(i, slot)| {
            let span = match slot {
                Some(c) => Span::styled(
                    c.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                None if i == cursor => Span::styled(
                    "_",
                    Style::default().add_modifier(Modifier::REVERSED),
                ),
                None => Span::raw("_"),
            };
            [span, Span::raw(" ")]
        })
        .collect();

    let word = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(word, area);
}

fn render_keyboard(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|b| {
                    let style = if snapshot.wrong_letters.contains(b) {
                        Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::CROSSED_OUT)
                    } else if snapshot.guessed.contains(b) {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD)
                    };
                    [
                        Span::styled(char::from(b).to_string(), style),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let content = vec![
        Line::from(vec![
            Span::raw("Player: "),
            Span::styled(
                snapshot.player.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("   Level: {}", snapshot.difficulty)),
        ]),
        Line::from(format!(
            "Lives:  [{}] {}",
            lives_bar(snapshot, 20),
            snapshot.max_wrong.saturating_sub(snapshot.wrong)
        )),
        Line::from(vec![
            Span::raw(format!("Hints:  {}   Score: ", snapshot.hints_left)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];

    let status = Paragraph::new(content)
        .block(Block::default().title(" Status ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(status, area);
}

fn render_scores(f: &mut Frame, area: Rect, board: &Leaderboard, scroll: usize) {
    let header = Row::new(["Player", "Score", "Difficulty", "Date"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = board
        .entries
        .iter()
        .skip(scroll)
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.player.clone()),
                Cell::from(entry.score.to_string()),
                Cell::from(entry.difficulty.label()),
                Cell::from(entry.timestamp()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(format!(" Score ({} games) ", board.entries.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(table, area);
}

fn render_popup(f: &mut Frame, popup: &Popup) {
    let color = match popup.style {
        MessageStyle::Info => Color::White,
        MessageStyle::Success => Color::Green,
        MessageStyle::Error => Color::Red,
    };

    let area = centered_rect(50, 5, f.area());
    let message = Paragraph::new(vec![
        Line::from(popup.text.clone()),
        Line::from(Span::styled(
            "Enter: OK",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(format!(" {} ", popup.title))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(Clear, area);
    f.render_widget(message, area);
}

/// Rectangle of at most `width` x `height` centred in `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
