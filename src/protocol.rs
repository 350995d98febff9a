//! JSON wire protocol shared with the helper server
//!
//! Every response field is optional: the server omits fields that did not change,
//! and error responses carry only `error` (plus `game_over` when the game has ended).

use serde::{Deserialize, Serialize};

/// Path of the guess submission endpoint, relative to the server base URL
pub const SUBMIT_GUESS_PATH: &str = "submit_guess";

/// Path of the reset endpoint, relative to the server base URL
pub const RESET_GAME_PATH: &str = "reset_game";

/// Body of `POST /submit_guess`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRequest {
    /// Lowercase guess
    pub guess: String,
    /// Feedback symbols over `{G, Y, X}`, one per guess letter
    pub feedback: String,
}

/// Body of `POST /reset_game`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetRequest {
    pub exclude_past_words: bool,
}

/// Response body of either endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_guess: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possible_words_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possible_words_sample: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guess_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub known_letters_display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present_letters_display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absent_letters_display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_over: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_guess: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_past_words_setting: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_list_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GameResponse {
    /// Server-reported error, if any
    ///
    /// An empty error string does not count as an error.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved == Some(true)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over == Some(true)
    }

    /// True when the response ends the game, either way
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_solved() || self.is_game_over()
    }
}
