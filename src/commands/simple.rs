//! Simple interactive CLI mode
//!
//! Line-based client without TUI. Feedback is typed as a G/Y/X string and applied
//! to the cells by cycling them, exactly as clicks would.

use crate::client::GameApi;
use crate::config::ClientConfig;
use crate::controller::{GameController, MessageStyle};
use crate::core::FeedbackVector;
use crate::output::formatters::colored_guess;
use crate::output::{print_game_state, print_message};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub async fn run_simple<A: GameApi + ?Sized>(config: &ClientConfig, api: &A) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Wordle Helper - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Server: {}", config.server_url);
    println!("Enter each guess, then its feedback:\n");
    println!("  - G for green (correct position)");
    println!("  - Y for yellow (wrong position)");
    println!("  - X for gray (not in word)\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'exclude' to toggle excluding past words\n");

    let mut game = GameController::new(config);
    print_game_state(game.display());

    loop {
        let prompt = if game.can_submit() {
            "Guess (or command)"
        } else {
            "Game finished - 'new' or 'quit'"
        };
        let input = get_user_input(prompt)?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.request_reset();
                if confirm(&mut game)? {
                    with_spinner("Resetting game...", game.confirm_reset(api)).await;
                    report(&game);
                    print_game_state(game.display());
                }
                continue;
            }
            "exclude" | "e" => {
                game.toggle_exclude_past_words();
                report(&game);
                continue;
            }
            _ if refuse_finished(&mut game) => {
                report(&game);
                continue;
            }
            _ => {}
        }

        game.set_text(&input);
        if game.editor().has_full_guess() {
            let Some(feedback) = read_feedback(game.editor().guess_length())? else {
                continue;
            };
            if !apply_feedback(&mut game, &feedback) {
                report(&game);
                continue;
            }
            println!(
                "\n  {}  {}",
                colored_guess(game.editor().text(), game.editor().feedback()),
                feedback.to_emoji()
            );
        }

        // A malformed guess is refused locally with a message and no round trip
        let state = with_spinner("Processing...", game.submit(api)).await;
        report(&game);
        if !state.is_terminal() {
            print_game_state(game.display());
        }
    }
}

/// Cycle each cell until it shows the wanted feedback
///
/// Returns false if the editor refused a click.
fn apply_feedback(game: &mut GameController, target: &FeedbackVector) -> bool {
    for (index, wanted) in target.iter().enumerate() {
        // At most two clicks reach any value of the three-cycle
        for _ in 0..2 {
            if game.editor().feedback().get(index) == Some(wanted) {
                break;
            }
            if game.click_cell(index).is_none() {
                return false;
            }
        }
    }
    game.editor().feedback() == target
}

/// Show the finished notice when the game takes no more guesses
fn refuse_finished(game: &mut GameController) -> bool {
    if game.can_submit() {
        return false;
    }
    game.show_message(
        "Game finished. Type 'new' for a new game.",
        MessageStyle::Info,
    );
    true
}

fn read_feedback(guess_length: usize) -> Result<Option<FeedbackVector>> {
    loop {
        let input = get_user_input("Feedback (G/Y/X, blank to cancel)")?;
        if input.is_empty() {
            return Ok(None);
        }
        match input.parse::<FeedbackVector>() {
            Ok(feedback) if feedback.len() == guess_length => return Ok(Some(feedback)),
            Ok(feedback) => println!(
                "❌ Feedback needs {guess_length} symbols, got {}\n",
                feedback.len()
            ),
            Err(e) => println!("❌ {e}\n"),
        }
    }
}

fn confirm(game: &mut GameController) -> Result<bool> {
    let answer = get_user_input("Are you sure you want to start a new game? (yes/no)")?;
    if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
        Ok(true)
    } else {
        game.cancel_reset();
        report(game);
        Ok(false)
    }
}

fn report(game: &GameController) {
    if let Some(message) = game.display().status() {
        print_message(message);
    }
}

/// Show a spinner while a round trip runs
async fn with_spinner<F: std::future::Future>(message: &'static str, work: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));

    let output = work.await;
    spinner.finish_and_clear();
    output
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
