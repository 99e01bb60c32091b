//! TUI application state and logic

use crate::core::{GuessBuffer, Letter, Word, display_upper_word};
use crate::session::{GameSession, KeyboardState, SubmitOutcome};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::prelude::IndexedRandom;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Input gating phase
///
/// Key presses mutate the buffer only while Guessing; after a terminal
/// state only new-game and quit keys are accepted. An explicit phase field
/// instead of attaching and detaching handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
    Guessing,
    GameOver,
}

/// Application state
pub struct App<'a> {
    dictionary: &'a Dictionary,
    targets: &'a [Word],
    pub session: GameSession<'a>,
    pub buffer: GuessBuffer,
    pub keyboard: KeyboardState,
    pub messages: Vec<Message>,
    pub phase: InputPhase,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, targets: &'a [Word], first_target: Word) -> Self {
        let mut app = Self {
            dictionary,
            targets,
            session: GameSession::new(dictionary, first_target),
            buffer: GuessBuffer::new(),
            keyboard: KeyboardState::new(),
            messages: Vec::new(),
            phase: InputPhase::Guessing,
            should_quit: false,
        };

        app.add_message("5 harfli gizli kelimeyi 6 denemede bul.", MessageStyle::Info);
        app
    }

    /// A typed character; non-letters are ignored
    pub fn handle_letter(&mut self, raw: char) {
        if self.phase != InputPhase::Guessing {
            return;
        }
        if let Some(letter) = Letter::new(raw) {
            self.buffer.push(letter);
        }
    }

    /// Backspace removes the last buffered letter
    pub fn handle_backspace(&mut self) {
        if self.phase == InputPhase::Guessing {
            self.buffer.pop();
        }
    }

    /// Enter submits the buffered guess
    pub fn handle_submit(&mut self) {
        if self.phase != InputPhase::Guessing {
            return;
        }

        match self.session.submit(&self.buffer) {
            Ok(outcome) => {
                let record = self.session.history().last().expect("accepted guess recorded");
                self.keyboard.absorb(&record.word, &record.evaluation);
                self.buffer.clear();

                match outcome {
                    SubmitOutcome::Won(_) => {
                        let attempts = self.session.history().len();
                        self.phase = InputPhase::GameOver;
                        self.add_message(
                            &format!("🎉 Tebrikler Kazandın! {attempts} denemede bildin."),
                            MessageStyle::Success,
                        );
                        self.add_message(
                            "Yeni oyun için 'n', çıkmak için 'q'.",
                            MessageStyle::Info,
                        );
                    }
                    SubmitOutcome::Lost(_) => {
                        self.phase = InputPhase::GameOver;
                        self.add_message(
                            &format!(
                                "😔 Kaybettin. Kelime: {}",
                                display_upper_word(self.session.target().text())
                            ),
                            MessageStyle::Error,
                        );
                        self.add_message(
                            "Yeni oyun için 'n', çıkmak için 'q'.",
                            MessageStyle::Info,
                        );
                    }
                    SubmitOutcome::Continue(_) => {}
                }
            }
            // Recoverable rejection: buffer kept for correction
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Reset state for a fresh target
    pub fn new_game(&mut self) {
        let target = self
            .targets
            .choose(&mut rand::rng())
            .cloned()
            .unwrap_or_else(|| self.session.target().clone());

        self.session = GameSession::new(self.dictionary, target);
        self.buffer.clear();
        self.keyboard = KeyboardState::new();
        self.messages.clear();
        self.phase = InputPhase::Guessing;
        self.add_message("🔄 Yeni oyun başladı!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.phase {
                InputPhase::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // After the game ends, other keys are ignored
                    }
                },
                InputPhase::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.handle_letter(c);
                    }
                    KeyCode::Backspace | KeyCode::Delete => {
                        app.handle_backspace();
                    }
                    KeyCode::Enter => {
                        app.handle_submit();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
