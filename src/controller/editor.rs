//! Feedback editor
//!
//! Binds the guess text and one clickable cell per letter to a `FeedbackVector`.
//! The text decides which letter sits in a cell; clicks decide its colour. Removing a
//! letter always resets that cell to Absent so no colour outlives its letter.

use crate::core::{Feedback, FeedbackVector};
use thiserror::Error;
use tracing::debug;

/// Why a cell click was refused
///
/// The `Display` text is the prompt shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("Enter a {0}-letter guess first.")]
    GuessIncomplete(usize),
    #[error("No feedback cell at position {0}")]
    NoSuchCell(usize),
}

/// One rendered cell: the letter above it (if typed) and its feedback colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub feedback: Feedback,
}

/// Text input plus feedback cells for the current guess attempt
#[derive(Debug, Clone)]
pub struct FeedbackEditor {
    guess_length: usize,
    text: String,
    feedback: FeedbackVector,
}

impl FeedbackEditor {
    /// Create an editor with every cell Absent and no text
    #[must_use]
    pub fn new(guess_length: usize) -> Self {
        Self {
            guess_length,
            text: String::new(),
            feedback: FeedbackVector::new(guess_length),
        }
    }

    /// Start a fresh attempt: clear the text and reset every cell to Absent
    pub fn initialize(&mut self) {
        self.text.clear();
        self.feedback = FeedbackVector::new(self.guess_length);
    }

    #[inline]
    #[must_use]
    pub fn guess_length(&self) -> usize {
        self.guess_length
    }

    /// Current guess text (uppercase)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &FeedbackVector {
        &self.feedback
    }

    /// True when the text holds exactly `guess_length` letters
    #[must_use]
    pub fn has_full_guess(&self) -> bool {
        self.text.chars().count() == self.guess_length
            && self.text.chars().all(|c| c.is_ascii_alphabetic())
    }

    /// Cycle the feedback of one cell
    ///
    /// # Errors
    ///
    /// Returns `EditError::GuessIncomplete` unless the text holds a full guess, and
    /// `EditError::NoSuchCell` for an index past the last cell. Nothing changes on error.
    pub fn on_cell_click(&mut self, index: usize) -> Result<Feedback, EditError> {
        if !self.has_full_guess() {
            return Err(EditError::GuessIncomplete(self.guess_length));
        }

        let value = self
            .feedback
            .cycle(index)
            .ok_or(EditError::NoSuchCell(index))?;
        debug!(index, feedback = %value, "cell cycled");
        Ok(value)
    }

    /// Synchronize with new raw text from the input field
    ///
    /// Uppercases and truncates the text, then resets the feedback of every cell
    /// that no longer has a letter. Cells that keep a letter keep their colour.
    pub fn on_text_input(&mut self, raw: &str) {
        self.text = raw
            .chars()
            .flat_map(char::to_uppercase)
            .take(self.guess_length)
            .collect();

        let letters = self.text.chars().count();
        for index in letters..self.guess_length {
            self.feedback.clear_slot(index);
        }
    }

    /// Append one typed character
    pub fn push_letter(&mut self, ch: char) {
        let mut raw = self.text.clone();
        raw.push(ch);
        self.on_text_input(&raw);
    }

    /// Delete the last character
    pub fn pop_letter(&mut self) {
        let mut raw = self.text.clone();
        raw.pop();
        self.on_text_input(&raw);
    }

    /// Cells in order, each with its letter and feedback
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let mut letters = self.text.chars();
        self.feedback.iter().map(move |feedback| Cell {
            letter: letters.next(),
            feedback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with(text: &str) -> FeedbackEditor {
        let mut editor = FeedbackEditor::new(5);
        editor.on_text_input(text);
        editor
    }

    #[test]
    fn initialize_produces_absent_vector() {
        let mut editor = editor_with("crane");
        editor.on_cell_click(0).unwrap();
        editor.on_cell_click(3).unwrap();

        editor.initialize();
        assert_eq!(editor.text(), "");
        assert_eq!(editor.feedback().len(), 5);
        assert_eq!(editor.feedback().encode(), "XXXXX");
    }

    #[test]
    fn three_clicks_restore_value() {
        let mut editor = editor_with("crane");
        for index in 0..5 {
            let before = editor.feedback().get(index).unwrap();
            let mut seen = vec![before];
            for _ in 0..3 {
                seen.push(editor.on_cell_click(index).unwrap());
            }
            assert_eq!(seen[3], before);
            seen.sort_by_key(|f| f.symbol());
            seen.dedup();
            assert_eq!(seen.len(), 3);
        }
    }

    #[test]
    fn click_cycle_order() {
        let mut editor = editor_with("crane");
        assert_eq!(editor.on_cell_click(2), Ok(Feedback::Correct));
        assert_eq!(editor.on_cell_click(2), Ok(Feedback::Present));
        assert_eq!(editor.on_cell_click(2), Ok(Feedback::Absent));
    }

    #[test]
    fn click_rejected_without_full_guess() {
        for text in ["", "c", "cran"] {
            let mut editor = editor_with(text);
            let before = editor.feedback().clone();
            let err = editor.on_cell_click(0).unwrap_err();
            assert_eq!(err, EditError::GuessIncomplete(5));
            assert_eq!(err.to_string(), "Enter a 5-letter guess first.");
            assert_eq!(editor.feedback(), &before);
        }
    }

    #[test]
    fn click_rejected_with_non_letters() {
        let mut editor = editor_with("cr4ne");
        assert!(editor.on_cell_click(0).is_err());
        assert_eq!(editor.feedback().encode(), "XXXXX");
    }

    #[test]
    fn click_out_of_range() {
        let mut editor = editor_with("crane");
        assert_eq!(editor.on_cell_click(5), Err(EditError::NoSuchCell(5)));
        assert_eq!(editor.feedback().encode(), "XXXXX");
    }

    #[test]
    fn text_is_uppercased_and_truncated() {
        let editor = editor_with("craneS");
        assert_eq!(editor.text(), "CRANE");
    }

    #[test]
    fn shortening_clears_removed_slots() {
        let mut editor = editor_with("crane");
        for index in 0..5 {
            editor.on_cell_click(index).unwrap();
        }
        editor.on_cell_click(4).unwrap();
        assert_eq!(editor.feedback().encode(), "GGGGY");

        editor.on_text_input("cra");
        assert_eq!(editor.feedback().encode(), "GGGXX");

        editor.on_text_input("");
        assert_eq!(editor.feedback().encode(), "XXXXX");
    }

    #[test]
    fn retained_letters_keep_feedback() {
        let mut editor = editor_with("crane");
        editor.on_cell_click(1).unwrap();
        editor.on_cell_click(1).unwrap();

        // Replacing a letter without shortening keeps every colour
        editor.on_text_input("CRONE");
        assert_eq!(editor.feedback().encode(), "XYXXX");
    }

    #[test]
    fn push_and_pop_letters() {
        let mut editor = FeedbackEditor::new(5);
        for ch in "slates".chars() {
            editor.push_letter(ch);
        }
        assert_eq!(editor.text(), "SLATE");

        editor.on_cell_click(4).unwrap();
        editor.pop_letter();
        assert_eq!(editor.text(), "SLAT");
        assert_eq!(editor.feedback().get(4), Some(Feedback::Absent));

        editor.push_letter('e');
        assert_eq!(editor.feedback().get(4), Some(Feedback::Absent));
    }

    #[test]
    fn cells_pair_letters_with_feedback() {
        let mut editor = editor_with("ab");
        let cells: Vec<Cell> = editor.cells().collect();
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[0].letter, Some('A'));
        assert_eq!(cells[1].letter, Some('B'));
        assert_eq!(cells[2].letter, None);

        editor.on_text_input("abcde");
        editor.on_cell_click(1).unwrap();
        let cells: Vec<Cell> = editor.cells().collect();
        assert_eq!(cells[1].feedback, Feedback::Correct);
    }
}
