use std::collections::VecDeque;

use async_trait::async_trait;
use casement_common::TransportError;

use super::Transport;

/// In-memory transport that answers from a queue of canned replies and
/// records every request it receives.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: VecDeque<Result<String, TransportError>>,
    requests: Vec<String>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn reply(mut self, text: impl Into<String>) -> Self {
        self.push_reply(text);
        self
    }

    /// Queue a failed call.
    pub fn fail(mut self) -> Self {
        self.push_failure(TransportError::Closed);
        self
    }

    pub fn push_reply(&mut self, text: impl Into<String>) {
        self.replies.push_back(Ok(text.into()));
    }

    pub fn push_failure(&mut self, error: TransportError) {
        self.replies.push_back(Err(error));
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> &[String] {
        &self.requests
    }

    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn call(&mut self, request: String) -> Result<String, TransportError> {
        self.requests.push(request);
        self.replies
            .pop_front()
            .unwrap_or(Err(TransportError::Exhausted))
    }
}
