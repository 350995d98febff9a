//! Client-side game controller
//!
//! `GameController` owns the feedback editor, the display state and both protocol
//! controllers. Hosts (the TUI and line mode) only talk to it, so nothing else ever
//! writes to the feedback vector or the display.

pub mod display;
pub mod editor;
pub mod session;
pub mod turn;

#[cfg(test)]
pub(crate) mod testing;

pub use display::{GameDisplayState, Message, MessageStyle};
pub use editor::{Cell, EditError, FeedbackEditor};
pub use session::{SessionController, SessionState};
pub use turn::{TurnController, TurnState};

use crate::client::{GameApi, TransportError};
use crate::config::ClientConfig;
use crate::core::Feedback;
use crate::protocol::{GameResponse, GuessRequest, ResetRequest};

/// Single owner of all client-side game state
#[derive(Debug, Clone)]
pub struct GameController {
    editor: FeedbackEditor,
    display: GameDisplayState,
    turn: TurnController,
    session: SessionController,
}

impl GameController {
    /// Build the controller from the server-rendered initial values
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            editor: FeedbackEditor::new(config.guess_length),
            display: GameDisplayState::seeded(&config.initial),
            turn: TurnController::new(),
            session: SessionController::new(),
        }
    }

    #[must_use]
    pub fn editor(&self) -> &FeedbackEditor {
        &self.editor
    }

    #[must_use]
    pub fn display(&self) -> &GameDisplayState {
        &self.display
    }

    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.turn.state()
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.turn.can_submit()
    }

    pub fn show_message(&mut self, text: &str, style: MessageStyle) {
        self.display.show_message(text, style);
    }

    /// Replace the guess text (as typed into an input field)
    pub fn set_text(&mut self, raw: &str) {
        self.editor.on_text_input(raw);
    }

    pub fn type_letter(&mut self, ch: char) {
        self.editor.push_letter(ch);
    }

    pub fn delete_letter(&mut self) {
        self.editor.pop_letter();
    }

    /// Click a feedback cell; a refused click shows its prompt
    pub fn click_cell(&mut self, index: usize) -> Option<Feedback> {
        match self.editor.on_cell_click(index) {
            Ok(feedback) => Some(feedback),
            Err(e) => {
                self.display.show_message(&e.to_string(), MessageStyle::Error);
                None
            }
        }
    }

    /// First half of a submission, for hosts that redraw before awaiting
    pub fn begin_submit(&mut self) -> Option<GuessRequest> {
        self.turn.begin(&self.editor, &mut self.display)
    }

    /// Second half of a submission
    pub fn finish_submit(&mut self, outcome: Result<GameResponse, TransportError>) -> TurnState {
        self.turn
            .complete(outcome, &mut self.editor, &mut self.display)
    }

    /// Submit the current guess and feedback
    pub async fn submit<A: GameApi + ?Sized>(&mut self, api: &A) -> TurnState {
        self.turn
            .submit(api, &mut self.editor, &mut self.display)
            .await
    }

    /// Ask for reset confirmation
    pub fn request_reset(&mut self) -> bool {
        self.session.request_reset(&mut self.display)
    }

    pub fn cancel_reset(&mut self) {
        self.session.cancel(&mut self.display);
    }

    /// First half of a confirmed reset, for hosts that redraw before awaiting
    pub fn begin_reset(&mut self) -> Option<ResetRequest> {
        self.session.confirm(&mut self.display)
    }

    /// Second half of a confirmed reset
    pub fn finish_reset(&mut self, outcome: Result<GameResponse, TransportError>) {
        self.session.complete(
            outcome,
            &mut self.turn,
            &mut self.editor,
            &mut self.display,
        );
    }

    /// Confirm a pending reset and run it
    pub async fn confirm_reset<A: GameApi + ?Sized>(&mut self, api: &A) {
        self.session
            .reset(api, &mut self.turn, &mut self.editor, &mut self.display)
            .await;
    }

    pub fn toggle_exclude_past_words(&mut self) -> bool {
        self.session.toggle_exclude_past_words(&mut self.display)
    }
}
