//! Terminal output formatting
//!
//! Display utilities for line mode.

pub mod display;
pub mod formatters;

pub use display::{print_game_state, print_message};
