//! Wordle Helper - CLI
//!
//! TUI and line-mode clients for the Wordle helper server.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use wordle_helper::{
    client::HttpGameClient,
    commands::run_simple,
    config::{ClientConfig, DEFAULT_SERVER_URL, DEFAULT_TIMEOUT_SECS, InitialState},
    interactive::{App, run_tui},
    logging::{self, LogTarget},
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Play Wordle with suggestions from a helper server",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Helper server base URL
    #[arg(short, long, global = true, env = "WORDLE_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Request timeout in seconds
    #[arg(short, long, global = true, env = "WORDLE_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Initial state of the exclude-past-words setting, as rendered by the server
    #[arg(long, global = true, default_value_t = true, action = clap::ArgAction::Set)]
    exclude_past_words: bool,

    /// Initial word list description, as rendered by the server
    #[arg(long, global = true, default_value = "")]
    word_list_info: String,

    /// Append logs to this file (the TUI logs nowhere else)
    #[arg(long, global = true, env = "WORDLE_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

impl Cli {
    fn config(&self) -> Result<ClientConfig> {
        Ok(ClientConfig::new(&self.server)?
            .with_timeout(Duration::from_secs(self.timeout))
            .with_initial_state(InitialState {
                exclude_past_words: self.exclude_past_words,
                word_list_info: self.word_list_info.clone(),
            })
            .with_log_file(self.log_file.clone()))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    logging::init(LogTarget::for_host(
        config.log_file.as_deref(),
        command == Commands::Play,
    ))?;
    info!(server = %config.server_url, "starting client");

    let api = HttpGameClient::new(&config)?;

    match command {
        Commands::Play => run_tui(App::new(&config), &api).await,
        Commands::Simple => run_simple(&config, &api).await,
    }
}
