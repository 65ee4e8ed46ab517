//! Scripted in-memory [`Gateway`] for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::Value;

use super::gateway::{ApiError, ApiRequest, Gateway};

/// Replays queued responses in order and records every request it receives.
#[derive(Debug, Default)]
pub(crate) struct ScriptedGateway {
    responses: RefCell<VecDeque<Result<Value, ApiError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedGateway {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, response: Result<Value, ApiError>) -> Self {
        self.responses.borrow_mut().push_back(response);
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl Gateway for ScriptedGateway {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_owned())))
    }
}
