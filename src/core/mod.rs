//! Core domain types for the guess/feedback protocol
//!
//! This module contains the fundamental value types with no I/O.
//! All types here are pure and testable.

mod feedback;
mod guess;

pub use feedback::{Feedback, FeedbackVector, GUESS_LENGTH};
pub use guess::{GuessAttempt, GuessError};
