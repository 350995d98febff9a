//! Wordle Helper Client
//!
//! Terminal client for the Wordle helper server. The player types each guess, marks
//! every letter green/yellow/gray, and the server answers with its next suggestion and
//! the remaining candidates.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_helper::client::HttpGameClient;
//! use wordle_helper::config::ClientConfig;
//! use wordle_helper::controller::GameController;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ClientConfig::new("http://127.0.0.1:5000")?;
//! let api = HttpGameClient::new(&config)?;
//! let mut game = GameController::new(&config);
//!
//! game.set_text("crane");
//! game.click_cell(0); // C is green
//! let state = game.submit(&api).await;
//! println!("{state:?}: {}", game.display().status_text());
//! # Ok(())
//! # }
//! ```

// Core domain types
pub mod core;

// Wire protocol
pub mod protocol;

// HTTP transport
pub mod client;

// Client configuration
pub mod config;

// Feedback editor and turn/session controllers
pub mod controller;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
