//! In-memory transport that replays scripted responses.
//!
//! Lets accessor tests run without a network: queue the bodies (or failures)
//! the remote API should return, run the operation, then inspect which
//! requests were made.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use super::{ApiError, Transport};

/// A request observed by [`ScriptedTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// `GET` or `POST`.
    pub method: &'static str,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RecordedRequest {
    /// Value of a query parameter, if it was sent.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Transport that answers requests from a FIFO script.
///
/// Once the script runs dry every further request fails with a 500.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Value, ApiError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body.
    #[must_use]
    pub fn respond(self, body: Value) -> Self {
        self.push(Ok(body));
        self
    }

    /// Queue a non-success HTTP status.
    #[must_use]
    pub fn fail(self, status: u16) -> Self {
        self.push(Err(ApiError::Status {
            status,
            message: format!("scripted failure {status}"),
        }));
        self
    }

    /// Requests made so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, response: Result<Value, ApiError>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
    }

    fn next(&self, request: RecordedRequest) -> Result<Value, ApiError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| {
                Err(ApiError::Status {
                    status: 500,
                    message: "no scripted response left".to_string(),
                })
            })
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, ApiError> {
        self.next(RecordedRequest {
            method: "GET",
            path: path.to_string(),
            query: query.to_vec(),
            body: None,
        })
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.next(RecordedRequest {
            method: "POST",
            path: path.to_string(),
            query: Vec::new(),
            body: Some(body.clone()),
        })
    }
}
