//! Submit-guess state machine
//!
//! One round trip per submission: validate locally, send guess + feedback, then
//! move to the next state based on the response. Whether submission is enabled is
//! read off the current state; there is no separate flag to drift out of sync.

use super::display::{GameDisplayState, MessageStyle};
use super::editor::FeedbackEditor;
use crate::client::{GameApi, TransportError};
use crate::core::GuessAttempt;
use crate::protocol::{GameResponse, GuessRequest};
use tracing::{debug, info};

/// Where the turn protocol stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnState {
    /// Ready for the first submission of a game
    #[default]
    Idle,
    /// A round trip is in flight
    Processing,
    /// The last guess was accepted; ready for the next one
    Continue,
    /// The word was found
    Solved,
    /// No guesses left
    GameOver,
    /// The last attempt failed recoverably; ready for a retry
    ErrorDisplayed,
}

impl TurnState {
    /// Whether a submit action is accepted in this state
    #[must_use]
    pub const fn accepts_submit(self) -> bool {
        matches!(self, Self::Idle | Self::Continue | Self::ErrorDisplayed)
    }

    /// Solved and `GameOver` only end through a session reset
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::GameOver)
    }
}

/// Drives one guess submission at a time
#[derive(Debug, Clone, Default)]
pub struct TurnController {
    state: TurnState,
    pending_guess: Option<String>,
}

impl TurnController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Whether the submit control is enabled
    #[inline]
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state.accepts_submit()
    }

    /// Validate the editor's guess and enter `Processing`
    ///
    /// Returns the request to send, or `None` when the submit is refused (wrong
    /// state or malformed guess). A malformed guess leaves a message and keeps
    /// submission enabled.
    pub fn begin(
        &mut self,
        editor: &FeedbackEditor,
        display: &mut GameDisplayState,
    ) -> Option<GuessRequest> {
        if !self.state.accepts_submit() {
            debug!(state = ?self.state, "submit ignored");
            return None;
        }

        let attempt = match GuessAttempt::new(
            editor.text(),
            editor.feedback().clone(),
            editor.guess_length(),
        ) {
            Ok(attempt) => attempt,
            Err(e) => {
                debug!(error = %e, "guess rejected locally");
                display.show_message(
                    &format!(
                        "Please enter a valid {}-letter guess.",
                        editor.guess_length()
                    ),
                    MessageStyle::Error,
                );
                self.state = TurnState::ErrorDisplayed;
                return None;
            }
        };

        let request = attempt.to_request();
        debug!(guess = %request.guess, feedback = %request.feedback, "submitting guess");
        display.show_message("Processing...", MessageStyle::Info);
        self.pending_guess = Some(request.guess.clone());
        self.state = TurnState::Processing;
        Some(request)
    }

    /// Apply the outcome of the round trip started by `begin`
    ///
    /// Outcomes arriving outside `Processing` are ignored.
    pub fn complete(
        &mut self,
        outcome: Result<GameResponse, TransportError>,
        editor: &mut FeedbackEditor,
        display: &mut GameDisplayState,
    ) -> TurnState {
        if self.state != TurnState::Processing {
            debug!(state = ?self.state, "stray submit outcome ignored");
            return self.state;
        }
        let submitted = self.pending_guess.take().unwrap_or_default();

        self.state = match outcome {
            Err(e) => {
                display.show_message(
                    &format!("Error communicating with server: {e}"),
                    MessageStyle::Error,
                );
                TurnState::ErrorDisplayed
            }
            Ok(response) => Self::apply_response(&response, &submitted, editor, display),
        };

        info!(state = ?self.state, "submit finished");
        self.state
    }

    fn apply_response(
        response: &GameResponse,
        submitted: &str,
        editor: &mut FeedbackEditor,
        display: &mut GameDisplayState,
    ) -> TurnState {
        if let Some(error) = response.error() {
            display.show_message(error, MessageStyle::Error);
            return if response.is_game_over() {
                TurnState::GameOver
            } else {
                TurnState::ErrorDisplayed
            };
        }

        display.project(response);

        if response.is_solved() {
            let word = response
                .final_guess
                .as_deref()
                .filter(|g| !g.is_empty())
                .map_or_else(|| submitted.to_uppercase(), str::to_owned);
            display.show_message(&format!("Solved! Word: {word}"), MessageStyle::Success);
            TurnState::Solved
        } else if response.is_game_over() {
            display.show_message("Game Over. No more guesses.", MessageStyle::Error);
            TurnState::GameOver
        } else {
            editor.initialize();
            TurnState::Continue
        }
    }

    /// Full submission: `begin`, one round trip, `complete`
    ///
    /// Holding `&mut self` across the await keeps a second submission from starting
    /// while this one is in flight.
    pub async fn submit<A: GameApi + ?Sized>(
        &mut self,
        api: &A,
        editor: &mut FeedbackEditor,
        display: &mut GameDisplayState,
    ) -> TurnState {
        let Some(request) = self.begin(editor, display) else {
            return self.state;
        };
        let outcome = api.submit_guess(&request).await;
        self.complete(outcome, editor, display)
    }

    /// Return to `Idle` after a session reset, whatever the current state
    pub(crate) fn reset(&mut self) {
        self.state = TurnState::Idle;
        self.pending_guess = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InitialState;
    use crate::controller::testing::FakeServer;

    fn setup(text: &str) -> (TurnController, FeedbackEditor, GameDisplayState) {
        let mut editor = FeedbackEditor::new(5);
        editor.on_text_input(text);
        (
            TurnController::new(),
            editor,
            GameDisplayState::seeded(&InitialState::default()),
        )
    }

    #[test]
    fn states_accepting_submit() {
        assert!(TurnState::Idle.accepts_submit());
        assert!(TurnState::Continue.accepts_submit());
        assert!(TurnState::ErrorDisplayed.accepts_submit());
        assert!(!TurnState::Processing.accepts_submit());
        assert!(!TurnState::Solved.accepts_submit());
        assert!(!TurnState::GameOver.accepts_submit());
        assert!(TurnState::Solved.is_terminal());
        assert!(TurnState::GameOver.is_terminal());
        assert!(!TurnState::ErrorDisplayed.is_terminal());
    }

    #[tokio::test]
    async fn short_guess_never_reaches_server() {
        let server = FakeServer::new();
        let (mut turn, mut editor, mut display) = setup("abc");

        let state = turn.submit(&server, &mut editor, &mut display).await;

        assert_eq!(state, TurnState::ErrorDisplayed);
        assert!(turn.can_submit());
        assert_eq!(server.guess_requests().len(), 0);
        assert_eq!(display.status_text(), "Please enter a valid 5-letter guess.");
    }

    #[tokio::test]
    async fn non_letter_guess_rejected() {
        let server = FakeServer::new();
        let (mut turn, mut editor, mut display) = setup("cr4ne");

        turn.submit(&server, &mut editor, &mut display).await;

        assert!(server.guess_requests().is_empty());
        assert_eq!(display.status_text(), "Please enter a valid 5-letter guess.");
    }

    #[tokio::test]
    async fn request_carries_lowercase_guess_and_feedback() {
        let server = FakeServer::new();
        server.push_guess_response(GameResponse::default());
        let (mut turn, mut editor, mut display) = setup("CRANE");
        editor.on_cell_click(0).unwrap();
        editor.on_cell_click(1).unwrap();
        editor.on_cell_click(1).unwrap();

        turn.submit(&server, &mut editor, &mut display).await;

        assert_eq!(
            server.guess_requests(),
            vec![GuessRequest {
                guess: "crane".to_string(),
                feedback: "GYXXX".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn solved_with_final_guess() {
        let server = FakeServer::new();
        server.push_guess_response(GameResponse {
            solved: Some(true),
            final_guess: Some("crane".to_string()),
            ..GameResponse::default()
        });
        let (mut turn, mut editor, mut display) = setup("crane");
        for i in 0..5 {
            editor.on_cell_click(i).unwrap();
        }

        let state = turn.submit(&server, &mut editor, &mut display).await;

        assert_eq!(server.guess_requests()[0].feedback, "GGGGG");
        assert_eq!(state, TurnState::Solved);
        assert!(!turn.can_submit());
        assert_eq!(display.status_text(), "Solved! Word: crane");

        // Further submits are refused without a round trip
        let state = turn.submit(&server, &mut editor, &mut display).await;
        assert_eq!(state, TurnState::Solved);
        assert_eq!(server.guess_requests().len(), 1);
    }

    #[tokio::test]
    async fn solved_without_final_guess_uses_submitted() {
        let server = FakeServer::new();
        server.push_guess_response(GameResponse {
            solved: Some(true),
            game_over: Some(true),
            message: Some("Congratulations! You found the word: CRANE".to_string()),
            ..GameResponse::default()
        });
        let (mut turn, mut editor, mut display) = setup("crane");

        turn.submit(&server, &mut editor, &mut display).await;

        assert_eq!(turn.state(), TurnState::Solved);
        assert_eq!(display.status_text(), "Solved! Word: CRANE");
    }

    #[tokio::test]
    async fn solved_with_empty_final_guess_uses_submitted() {
        let server = FakeServer::new();
        server.push_guess_response(GameResponse {
            solved: Some(true),
            final_guess: Some(String::new()),
            ..GameResponse::default()
        });
        let (mut turn, mut editor, mut display) = setup("slate");

        turn.submit(&server, &mut editor, &mut display).await;

        assert_eq!(turn.state(), TurnState::Solved);
        assert_eq!(display.status_text(), "Solved! Word: SLATE");
    }

    #[tokio::test]
    async fn game_over_disables_submission() {
        let server = FakeServer::new();
        server.push_guess_response(GameResponse {
            game_over: Some(true),
            solved: Some(false),
            guess_number: Some(7),
            ..GameResponse::default()
        });
        let (mut turn, mut editor, mut display) = setup("crane");

        let state = turn.submit(&server, &mut editor, &mut display).await;

        assert_eq!(state, TurnState::GameOver);
        assert!(!turn.can_submit());
        assert_eq!(display.status_text(), "Game Over. No more guesses.");
        assert_eq!(display.guess_number, Some(7));
    }

    #[tokio::test]
    async fn continue_resets_editor() {
        let server = FakeServer::new();
        server.push_guess_response(GameResponse {
            suggested_guess: Some("SLOTH".to_string()),
            possible_words_count: Some(17),
            guess_number: Some(2),
            solved: Some(false),
            game_over: Some(false),
            ..GameResponse::default()
        });
        let (mut turn, mut editor, mut display) = setup("crane");
        editor.on_cell_click(2).unwrap();

        let state = turn.submit(&server, &mut editor, &mut display).await;

        assert_eq!(state, TurnState::Continue);
        assert!(turn.can_submit());
        assert_eq!(editor.text(), "");
        assert_eq!(editor.feedback().encode(), "XXXXX");
        assert_eq!(display.suggested_guess.as_deref(), Some("SLOTH"));
        assert_eq!(display.possible_words_count, Some(17));
    }

    #[tokio::test]
    async fn transport_error_is_retryable() {
        let server = FakeServer::new();
        server.push_guess_failure();
        server.push_guess_response(GameResponse::default());
        let (mut turn, mut editor, mut display) = setup("crane");
        editor.on_cell_click(0).unwrap();

        let state = turn.submit(&server, &mut editor, &mut display).await;

        assert_eq!(state, TurnState::ErrorDisplayed);
        assert!(turn.can_submit());
        assert!(
            display
                .status_text()
                .starts_with("Error communicating with server: ")
        );
        // The attempt is kept for the retry
        assert_eq!(editor.text(), "CRANE");
        assert_eq!(editor.feedback().encode(), "GXXXX");

        let state = turn.submit(&server, &mut editor, &mut display).await;
        assert_eq!(state, TurnState::Continue);
        assert_eq!(server.guess_requests().len(), 2);
    }

    #[tokio::test]
    async fn server_error_without_game_over_is_recoverable() {
        let server = FakeServer::new();
        server.push_guess_response(GameResponse {
            error: Some("No possible words left. Check feedback or word not in list.".to_string()),
            suggested_guess: Some("N/A".to_string()),
            ..GameResponse::default()
        });
        let (mut turn, mut editor, mut display) = setup("crane");

        let state = turn.submit(&server, &mut editor, &mut display).await;

        assert_eq!(state, TurnState::ErrorDisplayed);
        assert!(turn.can_submit());
        assert_eq!(
            display.status_text(),
            "No possible words left. Check feedback or word not in list."
        );
        // Error responses are not projected
        assert_eq!(display.suggested_guess, None);
        assert_eq!(editor.text(), "CRANE");
    }

    #[tokio::test]
    async fn server_error_with_game_over_locks_submission() {
        let server = FakeServer::new();
        server.push_guess_response(GameResponse {
            error: Some("Game is over.".to_string()),
            game_over: Some(true),
            ..GameResponse::default()
        });
        let (mut turn, mut editor, mut display) = setup("crane");

        let state = turn.submit(&server, &mut editor, &mut display).await;

        assert_eq!(state, TurnState::GameOver);
        assert!(!turn.can_submit());
        assert_eq!(display.status_text(), "Game is over.");
    }

    #[test]
    fn begin_enters_processing_and_blocks_reentry() {
        let (mut turn, editor, mut display) = setup("crane");

        let request = turn.begin(&editor, &mut display);
        assert!(request.is_some());
        assert_eq!(turn.state(), TurnState::Processing);
        assert!(!turn.can_submit());
        assert_eq!(display.status_text(), "Processing...");

        assert_eq!(turn.begin(&editor, &mut display), None);
    }

    #[test]
    fn stray_outcome_ignored() {
        let (mut turn, mut editor, mut display) = setup("crane");
        let state = turn.complete(
            Ok(GameResponse {
                solved: Some(true),
                ..GameResponse::default()
            }),
            &mut editor,
            &mut display,
        );
        assert_eq!(state, TurnState::Idle);
        assert_eq!(display.status_text(), "");
    }

    #[test]
    fn reset_leaves_terminal_state() {
        let (mut turn, mut editor, mut display) = setup("crane");
        turn.begin(&editor, &mut display);
        turn.complete(
            Ok(GameResponse {
                game_over: Some(true),
                ..GameResponse::default()
            }),
            &mut editor,
            &mut display,
        );
        assert_eq!(turn.state(), TurnState::GameOver);

        turn.reset();
        assert_eq!(turn.state(), TurnState::Idle);
        assert!(turn.can_submit());
    }
}
