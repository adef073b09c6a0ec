use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::Transport;
use crate::error::TransportError;
use crate::models::Session;

/// Canned outcome for one URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Json(Value),
    /// The body could not be parsed as JSON (e.g. an HTML page).
    Unparsable(String),
    Status(u16),
    NotFound,
}

/// One request seen by the mock.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub session_token: Option<String>,
}

/// Mock implementation of Transport for testing
///
/// Responses are keyed by exact URL and every request is recorded. URLs with
/// no registered response answer with HTTP 500.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, url: &str, response: MockResponse) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
        self
    }

    pub fn with_json(self, url: &str, body: Value) -> Self {
        self.with_response(url, MockResponse::Json(body))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str, session: Option<&Session>) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            session_token: session.map(|s| s.token().to_string()),
        });

        let response = self.responses.lock().unwrap().get(url).cloned();
        match response {
            Some(MockResponse::Json(body)) => Ok(body),
            Some(MockResponse::Unparsable(reason)) => Err(TransportError::UnparsableBody {
                url: url.to_string(),
                reason,
            }),
            Some(MockResponse::Status(status)) => Err(TransportError::Status {
                url: url.to_string(),
                status,
            }),
            Some(MockResponse::NotFound) => Err(TransportError::NotFound {
                url: url.to_string(),
            }),
            None => Err(TransportError::Status {
                url: url.to_string(),
                status: 500,
            }),
        }
    }
}
