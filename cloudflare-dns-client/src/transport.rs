//! HTTP transport
//!
//! [`Transport`] is the seam between request building and the network. The default
//! [`HttpTransport`] wraps a `reqwest::Client`; tests and embedders can plug in their own.
//!
//! Transport failures never reach the envelope decoder:
//! - send errors become [`ClientError::Timeout`] or [`ClientError::Transport`]
//! - HTTP 429 becomes [`ClientError::RateLimited`]
//! - HTTP 502/503/504 become [`ClientError::Transport`]
//!
//! Any other status is handed back with its body; Cloudflare reports 4xx failures
//! inside the envelope. Nothing is retried.

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use reqwest::header::RETRY_AFTER;

use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::request::ApiRequest;
use crate::utils::log_sanitizer::truncate_for_log;

/// A raw HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    /// Full body; the underlying connection is released once this is read.
    pub body: String,
}

/// Executes a prepared request.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds the underlying client with the configured timeouts and TLS policy.
    ///
    /// # Errors
    ///
    /// [`ClientError::Configuration`] if the TLS backend cannot be initialised, or if
    /// `insecure_skip_verify` is set in a build without a TLS feature.
    pub fn new(config: &Config) -> Result<Self> {
        let builder = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout());
        let builder = apply_tls_policy(builder, config.insecure_skip_verify())?;

        let client = builder.build().map_err(|e| ClientError::Configuration {
            detail: format!("Failed to create HTTP client: {e}"),
        })?;

        Ok(Self { client })
    }

    /// Wraps an existing client, e.g. one shared with the rest of an application.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[cfg(any(feature = "native-tls", feature = "rustls"))]
#[allow(clippy::unnecessary_wraps)]
fn apply_tls_policy(builder: ClientBuilder, insecure_skip_verify: bool) -> Result<ClientBuilder> {
    if insecure_skip_verify {
        log::warn!("TLS certificate verification is disabled");
    }
    Ok(builder.danger_accept_invalid_certs(insecure_skip_verify))
}

/// Without a TLS backend only plain-HTTP endpoints work; there is nothing to skip.
#[cfg(not(any(feature = "native-tls", feature = "rustls")))]
fn apply_tls_policy(builder: ClientBuilder, insecure_skip_verify: bool) -> Result<ClientBuilder> {
    if insecure_skip_verify {
        return Err(ClientError::Configuration {
            detail: "insecure_skip_verify requires the `native-tls` or `rustls` feature"
                .to_string(),
        });
    }
    Ok(builder)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let ApiRequest {
            method,
            url,
            headers,
            body,
        } = request;

        log::debug!("{method} {url}");

        let mut builder = self.client.request(method, &url).headers(headers);
        if let Some(body) = body {
            log::debug!("Request Body: {}", truncate_for_log(&body));
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ClientError::transport(e)
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        // read before the body consumes the response
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        if status == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ClientError::RateLimited {
                retry_after,
                raw_message: Some(body).filter(|b| !b.is_empty()),
            });
        }

        if matches!(status, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Server error (HTTP {status})");
            return Err(ClientError::transport(format!("HTTP {status}: {body}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::transport(format!("Failed to read response body: {e}")))?;

        log::debug!("Response Body: {}", truncate_for_log(&body));

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn builds_with_default_config() {
        let config = Config::new("user@example.com", "key", "", false).unwrap();
        assert!(HttpTransport::new(&config).is_ok());
    }

    #[cfg(not(any(feature = "native-tls", feature = "rustls")))]
    #[test]
    fn insecure_without_tls_backend_is_rejected() {
        let config = Config::new("user@example.com", "key", "", true).unwrap();
        assert!(matches!(
            HttpTransport::new(&config),
            Err(ClientError::Configuration { .. })
        ));
    }

    #[cfg(any(feature = "native-tls", feature = "rustls"))]
    #[test]
    fn builds_insecure_with_custom_timeouts() {
        let config = Config::new("user@example.com", "key", "", true)
            .unwrap()
            .with_timeouts(Duration::from_secs(1), Duration::from_secs(2));
        assert!(HttpTransport::new(&config).is_ok());
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        let config = Config::new("user@example.com", "key", "", false)
            .unwrap()
            .with_timeouts(Duration::from_secs(2), Duration::from_secs(2));
        let transport = HttpTransport::new(&config).unwrap();

        // port 9 (discard) on localhost is essentially never listening
        let request = ApiRequest {
            method: reqwest::Method::GET,
            url: "http://127.0.0.1:9/zones/".to_string(),
            headers: config.headers().clone(),
            body: None,
        };
        let result = transport.execute(request).await;
        assert!(matches!(
            result,
            Err(ClientError::Transport { .. } | ClientError::Timeout { .. })
        ));
    }
}
