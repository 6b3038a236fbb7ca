//! Maps `success = false` envelopes onto [`ClientError`]
//!
//! Reference: <https://api.cloudflare.com/#getting-started-responses>

use crate::error::ClientError;

/// 原始 API 错误（envelope `errors` 列表的第一项）
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawApiError {
    /// 错误码，API 以数字返回，这里统一为字符串
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    #[cfg(test)]
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }

    /// Picks the first entry of an opaque `errors` value.
    ///
    /// Entries look like `{"code": 81044, "message": "..."}`; anything else degrades
    /// to its JSON text, and an empty or missing list becomes "Unknown error".
    pub fn from_errors(errors: &serde_json::Value) -> Self {
        let Some(first) = errors.as_array().and_then(|list| list.first()) else {
            return Self::new("Unknown error");
        };

        let code = first.get("code").and_then(|code| match code {
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::String(s) => Some(s.clone()),
            _ => None,
        });
        let message = first
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| first.to_string(), str::to_string);

        Self { code, message }
    }
}

/// 错误上下文：由调用方 service 填入请求涉及的资源
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    pub zone_id: Option<String>,
    pub record_id: Option<String>,
    pub record_name: Option<String>,
}

impl ErrorContext {
    pub fn zone(zone_id: &str) -> Self {
        Self {
            zone_id: Some(zone_id.to_string()),
            ..Self::default()
        }
    }

    pub fn record(zone_id: &str, record_id: Option<&str>, record_name: Option<&str>) -> Self {
        Self {
            zone_id: Some(zone_id.to_string()),
            record_id: record_id.map(str::to_string),
            record_name: record_name.map(str::to_string),
        }
    }
}

const UNKNOWN: &str = "<unknown>";

/// 将 envelope 中的错误码映射到统一错误类型
pub(crate) fn map_api_error(raw: RawApiError, context: ErrorContext) -> ClientError {
    match raw.code.as_deref() {
        // Authentication error
        // 6003: Invalid request headers
        // 6103: Invalid format for X-Auth-Key header
        // 6111: Invalid format for Authorization header
        // 9103: Unknown X-Auth-Key or X-Auth-Email
        // 9109: Unauthorized to access requested resource
        // 10000: Authentication error
        Some("6003" | "6103" | "6111" | "9103" | "9109" | "10000") => {
            ClientError::InvalidCredentials {
                raw_message: Some(raw.message),
            }
        }

        // Invalid parameter
        // 1004: DNS Validation Error
        // 9000: Invalid or missing name
        // 9005: Content for A record is invalid
        // 9006: Content for AAAA record is invalid
        // 9009: Content for MX record must be a hostname
        // 9021: Invalid TTL
        // 9041: This DNS record cannot be proxied
        Some(code @ ("1004" | "9000" | "9005" | "9006" | "9009" | "9021" | "9041")) => {
            let param = match code {
                "9000" => "name",
                "9005" | "9006" | "9009" => "content",
                "9021" => "ttl",
                "9041" => "proxied",
                _ => "general",
            };
            ClientError::InvalidParameter {
                param: param.to_string(),
                detail: raw.message,
            }
        }

        // 81053..=81058: record already exists (A/AAAA/CNAME/NS conflicts, duplicates)
        Some("81053" | "81054" | "81055" | "81056" | "81057" | "81058") => {
            ClientError::RecordExists {
                record_name: context.record_name.unwrap_or_else(|| UNKNOWN.to_string()),
                raw_message: Some(raw.message),
            }
        }

        // 81044: Record does not exist
        Some("81044") => ClientError::RecordNotFound {
            record_id: context.record_id.unwrap_or_else(|| UNKNOWN.to_string()),
            raw_message: Some(raw.message),
        },

        // 81045: The record quota has been exceeded
        Some("81045") => ClientError::QuotaExceeded {
            raw_message: Some(raw.message),
        },

        // 1001: Invalid zone identifier
        // 7000: No route for that URI
        // 7003: Could not route to /path, perhaps your object identifier is invalid?
        Some("1001" | "7000" | "7003") => ClientError::ZoneNotFound {
            zone_id: context.zone_id.unwrap_or_else(|| UNKNOWN.to_string()),
            raw_message: Some(raw.message),
        },

        _ => ClientError::Api {
            raw_code: raw.code,
            raw_message: raw.message,
        },
    }
}
