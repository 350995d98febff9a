//! Client configuration
//!
//! Collected from the command line (with environment fallbacks) in `main.rs`.

use crate::core::GUESS_LENGTH;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Default helper server address (Flask's development default)
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000/";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Values the server rendered into the page before the client started
///
/// The client accepts these as given; it never fetches them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialState {
    pub exclude_past_words: bool,
    pub word_list_info: String,
}

impl Default for InitialState {
    fn default() -> Self {
        Self {
            exclude_past_words: true,
            word_list_info: String::new(),
        }
    }
}

/// Everything the client needs to start
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_url: Url,
    pub timeout: Duration,
    pub guess_length: usize,
    pub initial: InitialState,
    pub log_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Build a config for the given server address
    ///
    /// The URL is normalized to end with `/` so endpoint paths join under any
    /// path prefix the server is mounted at.
    ///
    /// # Errors
    ///
    /// Returns an error if `server` is not an absolute http(s) URL.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::config::ClientConfig;
    ///
    /// let config = ClientConfig::new("http://localhost:5000/wordle").unwrap();
    /// assert_eq!(config.server_url.as_str(), "http://localhost:5000/wordle/");
    /// ```
    pub fn new(server: &str) -> anyhow::Result<Self> {
        Ok(Self {
            server_url: normalize_server_url(server)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            guess_length: GUESS_LENGTH,
            initial: InitialState::default(),
            log_file: None,
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_initial_state(mut self, initial: InitialState) -> Self {
        self.initial = initial;
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        self.log_file = log_file;
        self
    }
}

fn normalize_server_url(server: &str) -> anyhow::Result<Url> {
    let mut url = Url::parse(server.trim())
        .map_err(|e| anyhow::anyhow!("Invalid server URL '{server}': {e}"))?;

    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("Server URL must use http or https, got '{}'", url.scheme());
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
