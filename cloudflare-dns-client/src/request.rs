//! Request construction
//!
//! Building a request is pure: it joins the base URL with a resource path and copies
//! the authentication headers prepared by [`Config`]. Nothing here touches the network.

use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::Serialize;

use crate::config::Config;
use crate::error::{ClientError, Result};

const ZONES_PATH: &str = "/zones/";
const DNS_RECORDS_PATH: &str = "/dns_records/";

/// A fully prepared HTTP request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL including any query string.
    pub url: String,
    /// Email, key and content-type headers.
    pub headers: HeaderMap,
    /// JSON body for `POST`/`PUT`.
    pub body: Option<String>,
}

/// Joins `config.base_url()` and `path` and attaches the configured headers.
pub(crate) fn build_request(
    config: &Config,
    method: Method,
    path: &str,
    body: Option<String>,
) -> ApiRequest {
    ApiRequest {
        method,
        url: format!("{}{path}", config.base_url()),
        headers: config.headers().clone(),
        body,
    }
}

/// Serializes a request body to JSON.
pub(crate) fn serialize_body<B: Serialize>(body: &B) -> Result<String> {
    serde_json::to_string(body).map_err(|e| ClientError::Serialization {
        detail: e.to_string(),
    })
}

// ============ Paths ============

/// `/zones/`
pub(crate) fn zones_path() -> String {
    ZONES_PATH.to_string()
}

/// `/zones/{zone_id}/dns_records/`
pub(crate) fn dns_records_path(zone_id: &str) -> String {
    format!("{ZONES_PATH}{zone_id}{DNS_RECORDS_PATH}")
}

/// `/zones/{zone_id}/dns_records/{record_id}`
pub(crate) fn dns_record_path(zone_id: &str, record_id: &str) -> String {
    format!("{ZONES_PATH}{zone_id}{DNS_RECORDS_PATH}{record_id}")
}

/// Appends `?query` unless `query` is empty.
pub(crate) fn with_query(path: String, query: &str) -> String {
    if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    }
}
