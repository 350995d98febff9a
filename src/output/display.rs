//! Line-mode printing of the display state

use super::formatters::guess_progress_bar;
use crate::controller::{GameDisplayState, Message, MessageStyle};
use colored::Colorize;

/// Sample words printed per game state
const SAMPLE_LIMIT: usize = 12;

/// Print the server-derived game state
pub fn print_game_state(display: &GameDisplayState) {
    println!("{}", "─".repeat(60).cyan());

    let suggested = display.suggested_guess.as_deref().unwrap_or("-");
    println!(
        "📊 Suggested guess: {}",
        suggested.to_uppercase().bright_yellow().bold()
    );

    if let Some(number) = display.guess_number {
        println!("   Guess:      {number} [{}]", guess_progress_bar(number, 12));
    }
    if let Some(count) = display.possible_words_count {
        println!("   Candidates: {count}");
    }
    if !display.possible_words_sample.is_empty() {
        let shown: Vec<String> = display
            .possible_words_sample
            .iter()
            .take(SAMPLE_LIMIT)
            .map(|w| w.to_uppercase())
            .collect();
        let more = display
            .possible_words_sample
            .len()
            .saturating_sub(SAMPLE_LIMIT);
        if more > 0 {
            println!("   Sample:     {} (+{more} more)", shown.join(" "));
        } else {
            println!("   Sample:     {}", shown.join(" "));
        }
    }

    if let Some(ref known) = display.known_letters {
        println!("   Known:      {}", known.green());
    }
    if let Some(ref present) = display.present_letters {
        println!("   Present:    {}", present.yellow());
    }
    if let Some(ref absent) = display.absent_letters {
        println!("   Absent:     {}", absent.bright_black());
    }

    let exclude = if display.exclude_past_words { "on" } else { "off" };
    if display.word_list_info.is_empty() {
        println!("   Exclude past words: {exclude}");
    } else {
        println!(
            "   Exclude past words: {exclude} | {}",
            display.word_list_info.cyan()
        );
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print one status message in its style
pub fn print_message(message: &Message) {
    match message.style {
        MessageStyle::Info => println!("{}", message.text),
        MessageStyle::Success => println!("✅ {}", message.text.green().bold()),
        MessageStyle::Error => println!("❌ {}", message.text.red()),
    }
}
