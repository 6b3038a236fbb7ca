//! Response envelope decoding
//!
//! Every endpoint answers with the same wrapper:
//!
//! ```json
//! {"success": true, "errors": [], "messages": [], "result": ..., "result_info": {...}}
//! ```
//!
//! Decoding is two-step. The wrapper is parsed first with `result` kept as raw JSON;
//! only when `success` is `true` is that raw payload decoded again into the type the
//! caller asked for. A failed envelope never reaches the second step.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

use crate::error::{ClientError, Result};
use crate::mapping::{ErrorContext, RawApiError, map_api_error};
use crate::types::{Page, ResultInfo};
use crate::utils::log_sanitizer::truncate_for_log;

/// The outer response wrapper with an undecoded `result`.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    /// Whether the API accepted the request.
    #[serde(default)]
    pub success: bool,
    /// Opaque error list, `[{"code": ..., "message": ...}]` in practice.
    #[serde(default)]
    pub errors: serde_json::Value,
    /// Opaque informational messages.
    #[serde(default)]
    pub messages: serde_json::Value,
    /// Raw payload; its shape depends on the endpoint.
    #[serde(default)]
    pub result: Option<Box<RawValue>>,
    /// Pagination info on list endpoints.
    #[serde(default)]
    pub result_info: Option<ResultInfo>,
}

impl Envelope {
    /// Parses the wrapper only.
    ///
    /// # Errors
    ///
    /// [`ClientError::TransportDecode`] if `body` is not a JSON object of this shape.
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| {
            log::error!("Envelope parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(body));
            ClientError::TransportDecode {
                detail: e.to_string(),
            }
        })
    }

    /// Decodes the raw `result` into `T`, or maps `errors` when `success` is `false`.
    fn into_result<T: DeserializeOwned>(self, context: ErrorContext) -> Result<T> {
        if !self.success {
            let raw = RawApiError::from_errors(&self.errors);
            return Err(map_api_error(raw, context));
        }

        let payload = self.result.as_deref().map_or("null", RawValue::get);
        serde_json::from_str(payload).map_err(|e| {
            log::error!("Result decode failed: {e}");
            log::error!("Raw result: {}", truncate_for_log(payload));
            ClientError::ResultShape {
                detail: e.to_string(),
            }
        })
    }
}

/// Decodes a response body into `T`.
///
/// `T` may be a single resource or a `Vec` of them.
///
/// # Errors
///
/// - [`ClientError::TransportDecode`]: `body` is not an envelope
/// - an API error variant: the envelope reports `success = false`
/// - [`ClientError::ResultShape`]: `result` does not fit `T`
///
/// ```
/// use cloudflare_dns_client::{Zone, envelope};
///
/// let body = r#"{"success":true,"result":[{"id":"z1","name":"example.com"}]}"#;
/// let zones: Vec<Zone> = envelope::decode(body).unwrap();
/// assert_eq!(zones[0].name, "example.com");
/// ```
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    decode_with_context(body, ErrorContext::default())
}

/// Like [`decode`] for list endpoints, keeping `result_info`.
pub fn decode_page<T: DeserializeOwned>(body: &str) -> Result<Page<T>> {
    decode_page_with_context(body, ErrorContext::default())
}

pub(crate) fn decode_with_context<T: DeserializeOwned>(
    body: &str,
    context: ErrorContext,
) -> Result<T> {
    Envelope::parse(body)?.into_result(context)
}

pub(crate) fn decode_page_with_context<T: DeserializeOwned>(
    body: &str,
    context: ErrorContext,
) -> Result<Page<T>> {
    let mut envelope = Envelope::parse(body)?;
    let result_info = envelope.result_info.take().unwrap_or_default();
    let items = envelope.into_result(context)?;
    Ok(Page { items, result_info })
}
