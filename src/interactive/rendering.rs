//! TUI rendering with ratatui
//!
//! Tile grid, on-screen keyboard and message area for the game.

use super::app::{App, InputPhase, MessageStyle};
use crate::core::{LetterOutcome, WORD_LENGTH, display_upper};
use crate::session::{KeyStatus, MAX_ATTEMPTS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Turkish Q-layout keyboard rows
const KEYBOARD_ROWS: [&[char]; 3] = [
    &['e', 'r', 't', 'y', 'u', 'ı', 'o', 'p', 'ğ', 'ü'],
    &['a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'ş', 'i'],
    &['z', 'c', 'v', 'b', 'n', 'm', 'ö', 'ç'],
];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Guess grid
            Constraint::Length(5),  // Keyboard
            Constraint::Min(5),     // Messages
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("KELİMELE - Kelime Oyunu")
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

fn outcome_style(outcome: LetterOutcome) -> Style {
    match outcome {
        LetterOutcome::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterOutcome::WrongLocation => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterOutcome::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let mut lines: Vec<Line> = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for row in 0..MAX_ATTEMPTS {
        let mut spans: Vec<Span> = Vec::with_capacity(WORD_LENGTH * 2);

        if let Some(record) = history.get(row) {
            // Evaluated row: colored tiles
            for i in 0..WORD_LENGTH {
                let tile = format!(" {} ", display_upper(record.word.letter_at(i)));
                spans.push(Span::styled(tile, outcome_style(record.evaluation.outcome(i))));
                spans.push(Span::raw(" "));
            }
        } else if row == history.len() && app.phase == InputPhase::Guessing {
            // Active row: buffered letters plus empty slots
            let letters = app.buffer.letters();
            for i in 0..WORD_LENGTH {
                let (tile, style) = match letters.get(i) {
                    Some(letter) => (
                        format!(" {} ", display_upper(letter.as_char())),
                        Style::default()
                            .fg(Color::White)
                            .bg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    ),
                    None => (" · ".to_string(), Style::default().fg(Color::DarkGray)),
                };
                spans.push(Span::styled(tile, style));
                spans.push(Span::raw(" "));
            }
        } else {
            // Untouched row
            for _ in 0..WORD_LENGTH {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::default());
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Tahminler ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn key_style(status: KeyStatus) -> Style {
    match status {
        KeyStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        KeyStatus::WrongLocation => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        KeyStatus::Absent => Style::default().fg(Color::DarkGray),
        KeyStatus::Unused => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans: Vec<Span> = Vec::with_capacity(row.len() * 2);
            for &letter in *row {
                let key = format!("{}", display_upper(letter));
                spans.push(Span::styled(key, key_style(app.keyboard.status(letter))));
                spans.push(Span::raw(" "));
            }
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Klavye ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|message| {
            let style = match message.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(&message.text, style)))
        })
        .collect();

    let messages = List::new(items).block(
        Block::default()
            .title(" Mesajlar ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(messages, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.phase {
        InputPhase::Guessing => format!(
            "Kalan hak: {}  |  Enter: gönder  |  Backspace: sil  |  Esc: çık",
            app.session.remaining_attempts()
        ),
        InputPhase::GameOver => "n: yeni oyun  |  q: çık".to_string(),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
