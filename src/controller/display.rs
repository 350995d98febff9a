//! Server-derived display state and its projection
//!
//! Nothing here is computed client-side. Every field mirrors the last value the
//! server sent; a field missing from a response leaves the previous value in place.

use crate::config::InitialState;
use crate::protocol::GameResponse;

/// Messages kept for the message log
const MESSAGE_HISTORY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Everything the server tells us about the current game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDisplayState {
    pub suggested_guess: Option<String>,
    pub possible_words_count: Option<u64>,
    pub possible_words_sample: Vec<String>,
    pub guess_number: Option<u32>,
    pub known_letters: Option<String>,
    pub present_letters: Option<String>,
    pub absent_letters: Option<String>,
    /// The exclude-past-words checkbox
    pub exclude_past_words: bool,
    pub word_list_info: String,
    messages: Vec<Message>,
}

impl GameDisplayState {
    /// Display state as rendered by the server before the client started
    #[must_use]
    pub fn seeded(initial: &InitialState) -> Self {
        Self {
            suggested_guess: None,
            possible_words_count: None,
            possible_words_sample: Vec::new(),
            guess_number: None,
            known_letters: None,
            present_letters: None,
            absent_letters: None,
            exclude_past_words: initial.exclude_past_words,
            word_list_info: initial.word_list_info.clone(),
            messages: Vec::new(),
        }
    }

    /// Copy every field present in `response` into the display
    ///
    /// Absent fields keep their previous value. The sample list is replaced, not
    /// merged. The response message is skipped when the game just ended, since the
    /// turn controller writes the end-of-game message right after.
    pub fn project(&mut self, response: &GameResponse) {
        if let Some(ref guess) = response.suggested_guess {
            self.suggested_guess = Some(guess.clone());
        }
        if let Some(count) = response.possible_words_count {
            self.possible_words_count = Some(count);
        }
        if let Some(ref sample) = response.possible_words_sample {
            self.possible_words_sample.clone_from(sample);
        }
        if let Some(number) = response.guess_number {
            self.guess_number = Some(number);
        }
        if let Some(ref known) = response.known_letters_display {
            self.known_letters = Some(known.clone());
        }
        if let Some(ref present) = response.present_letters_display {
            self.present_letters = Some(present.clone());
        }
        if let Some(ref absent) = response.absent_letters_display {
            self.absent_letters = Some(absent.clone());
        }
        if let Some(exclude) = response.exclude_past_words_setting {
            self.exclude_past_words = exclude;
        }
        if let Some(ref info) = response.word_list_info {
            self.word_list_info.clone_from(info);
        }

        if let Some(ref message) = response.message
            && !response.is_terminal()
        {
            self.show_message(message, MessageStyle::Info);
        }
    }

    /// Write the status message
    ///
    /// Repeating the current message only updates its style.
    pub fn show_message(&mut self, text: &str, style: MessageStyle) {
        if let Some(last) = self.messages.last_mut()
            && last.text == text
        {
            last.style = style;
            return;
        }

        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the last few messages
        if self.messages.len() > MESSAGE_HISTORY {
            self.messages.remove(0);
        }
    }

    /// Current status message
    #[must_use]
    pub fn status(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Current status text, or "" when nothing has been shown yet
    #[must_use]
    pub fn status_text(&self) -> &str {
        self.status().map_or("", |m| m.text.as_str())
    }

    /// Recent messages, oldest first
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
