use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for every client operation.
///
/// Variants fall into three groups:
///
/// - **Local**: [`Configuration`](Self::Configuration) and
///   [`Serialization`](Self::Serialization) fail before anything is sent.
/// - **Transport**: [`Transport`](Self::Transport), [`Timeout`](Self::Timeout) and
///   [`RateLimited`](Self::RateLimited) mean no usable response body was received.
/// - **Response**: [`TransportDecode`](Self::TransportDecode) and
///   [`ResultShape`](Self::ResultShape) cover bodies that could not be decoded; the
///   remaining variants are mapped from the `errors` list of an envelope whose
///   `success` flag was `false`.
///
/// Nothing is retried internally. All variants are serializable for structured
/// error reporting.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// Email or key was empty, or the HTTP client could not be constructed.
    #[error("Invalid configuration: {detail}")]
    Configuration {
        /// What was rejected.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution, connection refused, TLS failure).
    #[error("Network error: {detail}")]
    Transport {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API answered with HTTP 429.
    #[error("Rate limited{}", retry_suffix(.retry_after))]
    RateLimited {
        /// Suggested wait in seconds, from the `Retry-After` header.
        retry_after: Option<u64>,
        /// Raw response body, if any.
        raw_message: Option<String>,
    },

    /// The response body is not a valid response envelope.
    #[error("Malformed response envelope: {detail}")]
    TransportDecode {
        /// Parser error.
        detail: String,
    },

    /// The envelope decoded but its `result` does not match the requested shape.
    #[error("Unexpected result shape: {detail}")]
    ResultShape {
        /// Parser error.
        detail: String,
    },

    /// A request body could not be serialized.
    #[error("Serialization error: {detail}")]
    Serialization {
        /// Serializer error.
        detail: String,
    },

    /// The API rejected the email/key pair.
    #[error("Invalid credentials{}", message_suffix(.raw_message))]
    InvalidCredentials {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter was rejected (bad TTL, malformed content, ...).
    #[error("Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        /// Name of the offending field.
        param: String,
        /// Message from the API.
        detail: String,
    },

    /// A DNS record with the same settings already exists.
    #[error("Record '{record_name}' already exists")]
    RecordExists {
        /// Name of the conflicting record.
        record_name: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The referenced DNS record does not exist.
    #[error("Record '{record_id}' not found")]
    RecordNotFound {
        /// ID of the missing record.
        record_id: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The zone's record quota is exhausted.
    #[error("Quota exceeded{}", message_suffix(.raw_message))]
    QuotaExceeded {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The referenced zone does not exist or could not be routed.
    #[error("Zone '{zone_id}' not found{}", message_suffix(.raw_message))]
    ZoneNotFound {
        /// ID of the zone from the request path.
        zone_id: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// An envelope with `success = false` whose error code is not mapped above.
    #[error("API error{}: {raw_message}", code_suffix(.raw_code))]
    Api {
        /// Raw error code, if the envelope carried one.
        raw_code: Option<String>,
        /// Raw error message.
        raw_message: String,
    },
}

impl ClientError {
    /// 是否为预期行为（调用方输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::InvalidParameter { .. }
                | Self::RecordExists { .. }
                | Self::RecordNotFound { .. }
                | Self::QuotaExceeded { .. }
                | Self::ZoneNotFound { .. }
        )
    }

    pub(crate) fn transport(detail: impl ToString) -> Self {
        Self::Transport {
            detail: detail.to_string(),
        }
    }
}

fn message_suffix(raw_message: &Option<String>) -> String {
    raw_message
        .as_deref()
        .map(|msg| format!(": {msg}"))
        .unwrap_or_default()
}

fn retry_suffix(retry_after: &Option<u64>) -> String {
    retry_after
        .map(|secs| format!(" (retry after {secs}s)"))
        .unwrap_or_default()
}

fn code_suffix(raw_code: &Option<String>) -> String {
    raw_code
        .as_deref()
        .map(|code| format!(" {code}"))
        .unwrap_or_default()
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
