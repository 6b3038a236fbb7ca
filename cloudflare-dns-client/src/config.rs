//! Client configuration

use std::fmt;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::error::{ClientError, Result};
use crate::utils::log_sanitizer::mask_secret;

/// Cloudflare v4 API base URL.
pub const API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";
/// Content type used when none is given at construction time.
pub const CONTENT_TYPE_APPLICATION_JSON: &str = "application/json";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const AUTH_EMAIL_HEADER: &str = "x-auth-email";
const AUTH_KEY_HEADER: &str = "x-auth-key";

/// Credentials and transport settings shared by every service.
///
/// A `Config` is immutable once built: the three authentication headers are validated
/// and rendered up front, so building a request never fails. Share it behind an `Arc`
/// (the [`CloudflareClient`](crate::CloudflareClient) does this for you).
#[derive(Clone)]
pub struct Config {
    email: String,
    key: String,
    content_type: String,
    insecure_skip_verify: bool,
    base_url: String,
    connect_timeout: Duration,
    request_timeout: Duration,
    headers: HeaderMap,
}

impl Config {
    /// Builds a configuration from an account email and global API key.
    ///
    /// An empty `content_type` falls back to `application/json`.
    ///
    /// `insecure_skip_verify` disables TLS certificate validation. It exists for
    /// self-signed or test endpoints only and should never be enabled against the
    /// public API.
    ///
    /// # Errors
    ///
    /// [`ClientError::Configuration`] if `email` or `key` is empty, or if any value
    /// cannot be used as an HTTP header.
    pub fn new(
        email: impl Into<String>,
        key: impl Into<String>,
        content_type: impl Into<String>,
        insecure_skip_verify: bool,
    ) -> Result<Self> {
        let email = email.into();
        let key = key.into();
        let mut content_type = content_type.into();

        if email.is_empty() {
            return Err(config_error("email must not be empty"));
        }
        if key.is_empty() {
            return Err(config_error("key must not be empty"));
        }
        if content_type.is_empty() {
            content_type = CONTENT_TYPE_APPLICATION_JSON.to_string();
        }

        let headers = auth_headers(&email, &key, &content_type)?;

        Ok(Self {
            email,
            key,
            content_type,
            insecure_skip_verify,
            base_url: API_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            headers,
        })
    }

    /// Points the client at another API root (a proxy or a mock server).
    ///
    /// A trailing slash is stripped so paths can be appended verbatim.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Overrides the transport's connect and total request timeouts.
    #[must_use]
    pub fn with_timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }

    /// Account email sent as `X-Auth-Email`.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Global API key sent as `X-Auth-Key`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// `Content-Type` sent with every request.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Whether TLS certificate validation is disabled.
    pub fn insecure_skip_verify(&self) -> bool {
        self.insecure_skip_verify
    }

    /// API root, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// TCP/TLS connect timeout.
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Total timeout for one request, body included.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Identity, secret and content-type headers attached to every request.
    pub(crate) fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("email", &self.email)
            .field("key", &mask_secret(&self.key))
            .field("content_type", &self.content_type)
            .field("insecure_skip_verify", &self.insecure_skip_verify)
            .field("base_url", &self.base_url)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

fn auth_headers(email: &str, key: &str, content_type: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::with_capacity(3);

    headers.insert(AUTH_EMAIL_HEADER, header_value("email", email)?);

    let mut key_value = header_value("key", key)?;
    key_value.set_sensitive(true);
    headers.insert(AUTH_KEY_HEADER, key_value);

    headers.insert(CONTENT_TYPE, header_value("content type", content_type)?);

    Ok(headers)
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| config_error(format!("{field} is not a valid header value: {e}")))
}

fn config_error(detail: impl Into<String>) -> ClientError {
    ClientError::Configuration {
        detail: detail.into(),
    }
}
