//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackVector};
use colored::{ColoredString, Colorize};

/// Guesses the server allows per game
pub const MAX_GUESSES: u32 = 6;

/// Create a progress bar string for `value` out of `max`
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) * width) / max
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar of guesses used so far, from the server's current guess number
#[must_use]
pub fn guess_progress_bar(guess_number: u32, width: usize) -> String {
    let used = guess_number.saturating_sub(1) as usize;
    create_progress_bar(used, MAX_GUESSES as usize, width)
}

/// A letter on its feedback colour, like a Wordle tile
#[must_use]
pub fn colored_tile(letter: char, feedback: Feedback) -> ColoredString {
    let (r, g, b) = feedback.rgb();
    format!(" {letter} ").white().bold().on_truecolor(r, g, b)
}

/// Guess letters rendered as coloured tiles
#[must_use]
pub fn colored_guess(guess: &str, feedback: &FeedbackVector) -> String {
    guess
        .chars()
        .zip(feedback.iter())
        .map(|(letter, f)| colored_tile(letter.to_ascii_uppercase(), f).to_string())
        .collect()
}
