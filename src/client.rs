//! Transport to the helper server
//!
//! `GameApi` is the seam the controllers talk through; `HttpGameClient` is the
//! reqwest implementation used by the binary.

use crate::config::ClientConfig;
use crate::protocol::{GameResponse, GuessRequest, RESET_GAME_PATH, ResetRequest, SUBMIT_GUESS_PATH};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// Failure to complete a round trip
///
/// Server-reported errors are not transport errors; they arrive as a
/// `GameResponse` with `error` set.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON in response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Round trips the controllers can issue
#[async_trait]
pub trait GameApi: Send + Sync {
    /// `POST /submit_guess`
    async fn submit_guess(&self, request: &GuessRequest) -> Result<GameResponse, TransportError>;

    /// `POST /reset_game`
    async fn reset_game(&self, request: &ResetRequest) -> Result<GameResponse, TransportError>;
}

/// HTTP+JSON client for the helper server
#[derive(Debug, Clone)]
pub struct HttpGameClient {
    client: Client,
    base_url: Url,
}

impl HttpGameClient {
    /// Create a client from configuration
    ///
    /// The server keeps the game in a cookie-backed session, so the client holds
    /// a cookie store and replays the session cookie on every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .cookie_store(true)
            .build()?;
        Ok(Self {
            client,
            base_url: config.server_url.clone(),
        })
    }

    /// Server base URL
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of an endpoint under the base URL
    ///
    /// # Errors
    ///
    /// Returns an error if `path` cannot be joined onto the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        Ok(self.base_url.join(path)?)
    }

    async fn post<T: Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<GameResponse, TransportError> {
        let url = self.endpoint(path)?;
        debug!(%url, "POST");

        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        let parsed = decode_response(status.as_u16(), &text);
        if let Err(ref e) = parsed {
            warn!(path, %status, error = %e, "undecodable response");
        }
        parsed
    }
}

#[async_trait]
impl GameApi for HttpGameClient {
    async fn submit_guess(&self, request: &GuessRequest) -> Result<GameResponse, TransportError> {
        self.post(SUBMIT_GUESS_PATH, request).await
    }

    async fn reset_game(&self, request: &ResetRequest) -> Result<GameResponse, TransportError> {
        self.post(RESET_GAME_PATH, request).await
    }
}

/// Parse a response body regardless of HTTP status
///
/// The server reports domain errors in the JSON body, sometimes with a non-2xx
/// status, so only an unparseable body is a transport failure.
///
/// # Errors
///
/// Returns `TransportError::Decode` if the body is not a JSON response object.
pub fn decode_response(status: u16, body: &str) -> Result<GameResponse, TransportError> {
    serde_json::from_str(body).map_err(|source| TransportError::Decode { status, source })
}
