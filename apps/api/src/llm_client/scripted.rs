//! In-process `ChatCompletion` backend for tests. Replays a fixed outcome and
//! records every request it receives.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{ChatCompletion, CompletionRequest, LlmError};

enum Outcome {
    Reply(String),
    Status(u16),
    Empty,
}

pub struct ScriptedCompletion {
    outcome: Outcome,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedCompletion {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with(Outcome::Reply(text.into()))
    }

    pub fn failing(status: u16) -> Self {
        Self::with(Outcome::Status(status))
    }

    pub fn empty() -> Self {
        Self::with(Outcome::Empty)
    }

    fn with(outcome: Outcome) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatCompletion for ScriptedCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.outcome {
            Outcome::Reply(text) => Ok(text.clone()),
            Outcome::Status(status) => Err(LlmError::Api {
                status: *status,
                message: "scripted failure".to_string(),
            }),
            Outcome::Empty => Err(LlmError::EmptyContent),
        }
    }
}
