use std::fmt;
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::envelope::{decode_page_with_context, decode_with_context};
use crate::error::{ClientError, Result};
use crate::mapping::ErrorContext;
use crate::request::{ApiRequest, build_request};
use crate::transport::{ApiResponse, Transport};
use crate::types::Page;

/// Configuration plus transport, shared by every service.
#[derive(Clone)]
pub(crate) struct BaseService {
    config: Arc<Config>,
    transport: Arc<dyn Transport>,
}

impl BaseService {
    pub fn new(config: Arc<Config>, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn request(&self, method: Method, path: &str, body: Option<String>) -> ApiRequest {
        build_request(&self.config, method, path, body)
    }

    /// Sends a request and decodes the envelope's `result` into `T`.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        context: ErrorContext,
    ) -> Result<T> {
        let response = self.send(method, path, body).await?;
        decode_with_context(&response.body, context).inspect_err(log_api_error)
    }

    /// Like [`call`](Self::call) for list endpoints, keeping pagination info.
    pub async fn call_page<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        context: ErrorContext,
    ) -> Result<Page<T>> {
        let response = self.send(method, path, None).await?;
        decode_page_with_context(&response.body, context).inspect_err(log_api_error)
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<ApiResponse> {
        let request = self.request(method, path, body);
        self.transport.execute(request).await
    }
}

impl fmt::Debug for BaseService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn log_api_error(e: &ClientError) {
    if e.is_expected() {
        log::warn!("API error: {e}");
    } else {
        log::error!("API error: {e}");
    }
}
