//! In-memory `GameApi` for controller tests

use crate::client::{GameApi, TransportError};
use crate::protocol::{GameResponse, GuessRequest, ResetRequest};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

enum Scripted {
    Response(GameResponse),
    Failure,
}

impl Scripted {
    fn into_outcome(self) -> Result<GameResponse, TransportError> {
        match self {
            Self::Response(response) => Ok(response),
            Self::Failure => Err(failure()),
        }
    }
}

fn failure() -> TransportError {
    let source = serde_json::from_str::<GameResponse>("<html>Bad Gateway</html>")
        .expect_err("HTML is not JSON");
    TransportError::Decode {
        status: 502,
        source,
    }
}

/// Records every request and replays scripted outcomes in order
///
/// With nothing scripted, a call answers with an empty success response.
#[derive(Default)]
pub(crate) struct FakeServer {
    guess_outcomes: Mutex<VecDeque<Scripted>>,
    reset_outcomes: Mutex<VecDeque<Scripted>>,
    guess_requests: Mutex<Vec<GuessRequest>>,
    reset_requests: Mutex<Vec<ResetRequest>>,
}

impl FakeServer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_guess_response(&self, response: GameResponse) {
        self.guess_outcomes
            .lock()
            .unwrap()
            .push_back(Scripted::Response(response));
    }

    pub(crate) fn push_guess_failure(&self) {
        self.guess_outcomes
            .lock()
            .unwrap()
            .push_back(Scripted::Failure);
    }

    pub(crate) fn push_reset_response(&self, response: GameResponse) {
        self.reset_outcomes
            .lock()
            .unwrap()
            .push_back(Scripted::Response(response));
    }

    pub(crate) fn push_reset_failure(&self) {
        self.reset_outcomes
            .lock()
            .unwrap()
            .push_back(Scripted::Failure);
    }

    pub(crate) fn guess_requests(&self) -> Vec<GuessRequest> {
        self.guess_requests.lock().unwrap().clone()
    }

    pub(crate) fn reset_requests(&self) -> Vec<ResetRequest> {
        self.reset_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GameApi for FakeServer {
    async fn submit_guess(&self, request: &GuessRequest) -> Result<GameResponse, TransportError> {
        self.guess_requests.lock().unwrap().push(request.clone());
        let next = self.guess_outcomes.lock().unwrap().pop_front();
        next.map_or_else(|| Ok(GameResponse::default()), Scripted::into_outcome)
    }

    async fn reset_game(&self, request: &ResetRequest) -> Result<GameResponse, TransportError> {
        self.reset_requests.lock().unwrap().push(*request);
        let next = self.reset_outcomes.lock().unwrap().pop_front();
        next.map_or_else(|| Ok(GameResponse::default()), Scripted::into_outcome)
    }
}
