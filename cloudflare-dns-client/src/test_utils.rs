//! In-memory transport for unit tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::request::ApiRequest;
use crate::services::BaseService;
use crate::transport::{ApiResponse, Transport};

/// Replays queued responses and records every request it receives.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queues a `200` response with `body`.
    pub fn push_body(&self, body: &str) {
        self.push(Ok(ApiResponse {
            status: 200,
            body: body.to_string(),
        }));
    }

    pub fn push(&self, response: Result<ApiResponse>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::transport("no mock response queued")))
    }
}

pub(crate) fn test_config() -> Config {
    Config::new("user@example.com", "0123456789abcdef", "", false).unwrap()
}

pub(crate) fn base_with(transport: &Arc<MockTransport>) -> BaseService {
    BaseService::new(Arc::new(test_config()), transport.clone())
}

/// `{"success": true, "errors": [], "messages": [], "result": <result>}`
pub(crate) fn ok_envelope(result: &serde_json::Value) -> String {
    serde_json::json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": result,
    })
    .to_string()
}

/// A failed envelope carrying a single error entry.
pub(crate) fn error_envelope(code: u64, message: &str) -> String {
    serde_json::json!({
        "success": false,
        "errors": [{ "code": code, "message": message }],
        "messages": [],
        "result": null,
    })
    .to_string()
}
