//! TUI application state and event loop

use crate::client::GameApi;
use crate::config::ClientConfig;
use crate::controller::{GameController, MessageStyle, SessionState};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Position, Rect},
};
use std::io;
use tracing::debug;

/// What a key press means right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a guess and colouring cells
    Guess,
    /// Waiting for y/n on a new game
    ConfirmReset,
    /// Solved or game over; only a new game continues
    Finished,
}

/// Application state
pub struct App {
    pub game: GameController,
    pub server: String,
    pub should_quit: bool,
    /// Screen areas of the feedback cells from the last frame, for mouse clicks
    pub cell_areas: Vec<Rect>,
}

/// A round trip the event loop must run before reading more input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Submit,
    Reset,
}

impl App {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let mut game = GameController::new(config);
        game.show_message(
            "Type your guess, press 1-5 (or click a cell) to colour it, Enter to submit.",
            MessageStyle::Info,
        );
        Self {
            game,
            server: config.server_url.to_string(),
            should_quit: false,
            cell_areas: Vec::new(),
        }
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.game.session_state() != SessionState::Idle {
            InputMode::ConfirmReset
        } else if self.game.turn_state().is_terminal() {
            InputMode::Finished
        } else {
            InputMode::Guess
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Pending> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        match self.input_mode() {
            InputMode::ConfirmReset => match key.code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => return Some(Pending::Reset),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => self.game.cancel_reset(),
                _ => {}
            },
            InputMode::Finished | InputMode::Guess => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    match key.code {
                        KeyCode::Char('n') => {
                            self.game.request_reset();
                        }
                        KeyCode::Char('e') => {
                            self.game.toggle_exclude_past_words();
                        }
                        _ => {}
                    }
                    return None;
                }

                match key.code {
                    KeyCode::Esc => self.should_quit = true,
                    KeyCode::Enter => {
                        if self.game.can_submit() {
                            return Some(Pending::Submit);
                        }
                        self.game.show_message(
                            "Game finished. Press Ctrl-N for a new game.",
                            MessageStyle::Info,
                        );
                    }
                    KeyCode::Backspace => self.game.delete_letter(),
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        if let Some(index) = c.to_digit(10).and_then(|d| d.checked_sub(1)) {
                            self.game.click_cell(index as usize);
                        }
                    }
                    KeyCode::Char(c) if c.is_alphabetic() => self.game.type_letter(c),
                    _ => {}
                }
            }
        }
        None
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left)
            || self.input_mode() == InputMode::ConfirmReset
        {
            return;
        }

        let position = Position::new(mouse.column, mouse.row);
        if let Some(index) = self.cell_areas.iter().position(|r| r.contains(position)) {
            debug!(index, "cell clicked");
            self.game.click_cell(index);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui<A: GameApi + ?Sized>(app: App, api: &A) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, api).await;

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

fn draw<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut cells = Vec::new();
    terminal.draw(|f| cells = super::rendering::ui(f, &*app))?;
    app.cell_areas = cells;
    Ok(())
}

async fn run_app<B: Backend, A: GameApi + ?Sized>(
    terminal: &mut Terminal<B>,
    mut app: App,
    api: &A,
) -> Result<()> {
    loop {
        draw(terminal, &mut app)?;

        let pending = match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => {
                app.handle_mouse(mouse);
                None
            }
            _ => None,
        };

        // Input is not read again until the round trip finishes, so at most one
        // request is ever in flight
        match pending {
            Some(Pending::Submit) => {
                if let Some(request) = app.game.begin_submit() {
                    draw(terminal, &mut app)?;
                    let outcome = api.submit_guess(&request).await;
                    app.game.finish_submit(outcome);
                }
            }
            Some(Pending::Reset) => {
                if let Some(request) = app.game.begin_reset() {
                    draw(terminal, &mut app)?;
                    let outcome = api.reset_game(&request).await;
                    app.game.finish_reset(outcome);
                }
            }
            None => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
