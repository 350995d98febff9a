//! New-game protocol
//!
//! A reset throws away the game in progress, so it only runs after an explicit
//! confirmation. The exclude-past-words checkbox is read when the reset is sent;
//! toggling it in between does not touch the live game.

use super::display::{GameDisplayState, MessageStyle};
use super::editor::FeedbackEditor;
use super::turn::TurnController;
use crate::client::{GameApi, TransportError};
use crate::protocol::{GameResponse, ResetRequest};
use tracing::{debug, info};

/// Prompt shown while waiting for the player to confirm a reset
pub const CONFIRM_PROMPT: &str = "Are you sure you want to start a new game? (y/n)";

/// Message shown when the server sends none with a successful reset
pub const DEFAULT_RESET_MESSAGE: &str = "Game reset";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    /// Waiting for the player to confirm or cancel
    ConfirmPending,
    /// A reset round trip is in flight
    Resetting,
}

/// Runs the confirmation-gated reset round trip
#[derive(Debug, Clone, Default)]
pub struct SessionController {
    state: SessionState,
}

impl SessionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_confirming(&self) -> bool {
        self.state == SessionState::ConfirmPending
    }

    /// Ask the player to confirm a reset
    ///
    /// Returns false if a reset is already being confirmed or sent.
    pub fn request_reset(&mut self, display: &mut GameDisplayState) -> bool {
        if self.state != SessionState::Idle {
            return false;
        }
        self.state = SessionState::ConfirmPending;
        display.show_message(CONFIRM_PROMPT, MessageStyle::Info);
        true
    }

    /// Abandon a pending confirmation
    pub fn cancel(&mut self, display: &mut GameDisplayState) {
        if self.state == SessionState::ConfirmPending {
            self.state = SessionState::Idle;
            display.show_message("New game cancelled.", MessageStyle::Info);
        }
    }

    /// Confirm the reset and enter `Resetting`
    ///
    /// Returns the request to send, carrying the checkbox value as it is now, or
    /// `None` if no confirmation was pending.
    pub fn confirm(&mut self, display: &mut GameDisplayState) -> Option<ResetRequest> {
        if self.state != SessionState::ConfirmPending {
            return None;
        }

        let request = ResetRequest {
            exclude_past_words: display.exclude_past_words,
        };
        debug!(exclude_past_words = request.exclude_past_words, "resetting game");
        display.show_message("Resetting game...", MessageStyle::Info);
        self.state = SessionState::Resetting;
        Some(request)
    }

    /// Apply the outcome of the round trip started by `confirm`
    ///
    /// Only a successful response reinitializes anything. Success always returns the
    /// turn controller to `Idle`, including from a terminal state.
    pub fn complete(
        &mut self,
        outcome: Result<GameResponse, TransportError>,
        turn: &mut TurnController,
        editor: &mut FeedbackEditor,
        display: &mut GameDisplayState,
    ) {
        if self.state != SessionState::Resetting {
            debug!(state = ?self.state, "stray reset outcome ignored");
            return;
        }
        self.state = SessionState::Idle;

        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                display.show_message(&format!("Error resetting game: {e}"), MessageStyle::Error);
                return;
            }
        };

        if let Some(error) = response.error() {
            display.show_message(error, MessageStyle::Error);
            return;
        }

        display.project(&response);
        editor.initialize();
        turn.reset();

        let message = response.message.as_deref().unwrap_or(DEFAULT_RESET_MESSAGE);
        display.show_message(message, MessageStyle::Success);
        let exclude_past_words = display.exclude_past_words;
        info!(exclude_past_words, "game reset");
    }

    /// Confirm and run the reset round trip
    pub async fn reset<A: GameApi + ?Sized>(
        &mut self,
        api: &A,
        turn: &mut TurnController,
        editor: &mut FeedbackEditor,
        display: &mut GameDisplayState,
    ) {
        let Some(request) = self.confirm(display) else {
            return;
        };
        let outcome = api.reset_game(&request).await;
        self.complete(outcome, turn, editor, display);
    }

    /// Flip the exclude-past-words checkbox
    ///
    /// The new value is only sent with the next reset.
    pub fn toggle_exclude_past_words(&self, display: &mut GameDisplayState) -> bool {
        display.exclude_past_words = !display.exclude_past_words;
        let state = if display.exclude_past_words {
            "on"
        } else {
            "off"
        };
        display.show_message(
            &format!("Exclude past words {state}. Takes effect when you start a new game."),
            MessageStyle::Info,
        );
        display.exclude_past_words
    }
}
