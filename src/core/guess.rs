//! Guess attempt validation
//!
//! A `GuessAttempt` pairs the literal guess text with its feedback at the moment of
//! submission. Construction is the only validation point before a guess goes on the wire.

use super::feedback::FeedbackVector;
use crate::protocol::GuessRequest;
use thiserror::Error;

/// Error type for malformed guess attempts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Guess must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Guess must contain only letters")]
    InvalidCharacters,
    #[error("Feedback must have {expected} slots, got {actual}")]
    FeedbackLength { expected: usize, actual: usize },
}

/// A validated guess ready for submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessAttempt {
    guess: String,
    feedback: FeedbackVector,
}

impl GuessAttempt {
    /// Validate a guess and its feedback
    ///
    /// # Errors
    /// Returns `GuessError` if:
    /// - The guess is not exactly `guess_length` characters
    /// - The guess contains anything but ASCII letters
    /// - The feedback vector length differs from `guess_length`
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{FeedbackVector, GuessAttempt};
    ///
    /// let attempt = GuessAttempt::new("CRANE", FeedbackVector::new(5), 5).unwrap();
    /// assert_eq!(attempt.guess(), "crane");
    ///
    /// assert!(GuessAttempt::new("abc", FeedbackVector::new(5), 5).is_err());
    /// ```
    pub fn new(
        guess: &str,
        feedback: FeedbackVector,
        guess_length: usize,
    ) -> Result<Self, GuessError> {
        let actual = guess.chars().count();
        if actual != guess_length {
            return Err(GuessError::InvalidLength {
                expected: guess_length,
                actual,
            });
        }

        if !guess.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GuessError::InvalidCharacters);
        }

        if feedback.len() != guess_length {
            return Err(GuessError::FeedbackLength {
                expected: guess_length,
                actual: feedback.len(),
            });
        }

        Ok(Self {
            guess: guess.to_ascii_lowercase(),
            feedback,
        })
    }

    /// The guess, lowercased
    #[inline]
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// Wire request for this attempt
    #[must_use]
    pub fn to_request(&self) -> GuessRequest {
        GuessRequest {
            guess: self.guess.clone(),
            feedback: self.feedback.encode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_guess_is_lowercased() {
        let attempt = GuessAttempt::new("CrAnE", FeedbackVector::new(5), 5).unwrap();
        assert_eq!(attempt.guess(), "crane");
        assert_eq!(attempt.to_request().feedback, "XXXXX");
    }

    #[test]
    fn invalid_length() {
        assert_eq!(
            GuessAttempt::new("abc", FeedbackVector::new(5), 5),
            Err(GuessError::InvalidLength {
                expected: 5,
                actual: 3
            })
        );
        assert!(matches!(
            GuessAttempt::new("", FeedbackVector::new(5), 5),
            Err(GuessError::InvalidLength { actual: 0, .. })
        ));
        assert!(matches!(
            GuessAttempt::new("cranes", FeedbackVector::new(5), 5),
            Err(GuessError::InvalidLength { actual: 6, .. })
        ));
    }

    #[test]
    fn invalid_characters() {
        assert_eq!(
            GuessAttempt::new("cran3", FeedbackVector::new(5), 5),
            Err(GuessError::InvalidCharacters)
        );
        assert!(GuessAttempt::new("cr ne", FeedbackVector::new(5), 5).is_err());
        assert!(GuessAttempt::new("crané", FeedbackVector::new(5), 5).is_err());
    }

    #[test]
    fn feedback_length_must_match() {
        assert_eq!(
            GuessAttempt::new("crane", FeedbackVector::new(4), 5),
            Err(GuessError::FeedbackLength {
                expected: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn request_encoding() {
        let feedback: FeedbackVector = "GYXXG".parse().unwrap();
        let request = GuessAttempt::new("CRANE", feedback, 5)
            .unwrap()
            .to_request();
        assert_eq!(request.guess, "crane");
        assert_eq!(request.feedback, "GYXXG");
    }
}
