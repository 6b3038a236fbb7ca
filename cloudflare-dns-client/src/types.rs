use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::{datetime, nullable};

// ============ Pagination ============

/// Smallest `per_page` value the API accepts for DNS record searches.
pub const MIN_PER_PAGE: u32 = 5;
/// Exclusive upper bound for `per_page` on DNS record searches.
pub const MAX_PER_PAGE: u32 = 100;

/// Pagination block returned alongside list results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultInfo {
    /// Current page (1-indexed).
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub page: u64,
    /// Page size used by the server.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub per_page: u64,
    /// Total number of pages.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub total_pages: u64,
    /// Number of items on this page.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub count: u64,
    /// Total number of items across all pages.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub total_count: u64,
}

/// One page of a list result together with the server's pagination info.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Pagination info; all zeros when the server sent none.
    pub result_info: ResultInfo,
}

impl<T> Page<T> {
    /// Whether the server reports pages after this one.
    pub fn has_more(&self) -> bool {
        self.result_info.page < self.result_info.total_pages
    }
}

/// Optional filters for [`DnsRecordsService::search`](crate::DnsRecordsService::search).
///
/// Empty strings and zero numbers mean "not set". `per_page` values outside
/// `5..100` are dropped rather than rejected.
///
/// ```
/// use cloudflare_dns_client::RecordSearch;
///
/// let search = RecordSearch::new("A", "ww1.example.com", "", 0, 0);
/// assert_eq!(search.to_query_string(), "type=A&name=ww1.example.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSearch {
    /// Record type filter (`A`, `CNAME`, ...).
    pub record_type: String,
    /// Exact record name.
    pub name: String,
    /// Exact record content.
    pub content: String,
    /// Page number; `0` leaves paging to the server.
    pub page: u32,
    /// Page size; honoured only within `5..100`.
    pub per_page: u32,
}

impl RecordSearch {
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
        page: u32,
        per_page: u32,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            name: name.into(),
            content: content.into(),
            page,
            per_page,
        }
    }

    /// Query parameters that are actually set, in wire order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);

        if !self.record_type.is_empty() {
            pairs.push(("type", self.record_type.clone()));
        }
        if !self.name.is_empty() {
            pairs.push(("name", self.name.clone()));
        }
        if !self.content.is_empty() {
            pairs.push(("content", self.content.clone()));
        }
        if self.page > 0 {
            pairs.push(("page", self.page.to_string()));
        }
        if (MIN_PER_PAGE..MAX_PER_PAGE).contains(&self.per_page) {
            pairs.push(("per_page", self.per_page.to_string()));
        }

        pairs
    }

    /// URL-escaped `key=value` pairs joined with `&`, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

// ============ Zone ============

/// A zone (domain) as reported by the API. Never sent back to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub name: String,
    /// `full` or `partial`.
    #[serde(rename = "type", default, deserialize_with = "nullable::deserialize")]
    pub zone_type: String,
    /// `active`, `pending`, `initializing`, `moved`, ...
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub paused: bool,
    /// Seconds of development mode remaining; `0` when off.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub development_mode: i64,
    /// Name servers currently assigned by the provider.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub name_servers: Vec<String>,
    /// Name servers the zone used before moving to the provider.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub original_name_servers: Vec<String>,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(f, self)
    }
}

// ============ DNS Record ============

/// Nested `meta` object of a DNS record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMeta {
    /// Whether the provider added the record automatically during zone setup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_added: Option<bool>,
}

impl RecordMeta {
    fn is_empty(&self) -> bool {
        self.auto_added.is_none()
    }
}

/// A DNS record.
///
/// Every field is optional: a field left as `None` is omitted from the request body,
/// so an update carries only what the caller set. `Some(false)` and `Some(0)` are
/// transmitted as-is.
///
/// ```
/// use cloudflare_dns_client::DnsRecord;
///
/// let record = DnsRecord {
///     id: Some("372e67954025e0ba6aaa6d586b9e0b59".into()),
///     content: Some("203.0.113.7".into()),
///     ..Default::default()
/// };
/// assert_eq!(
///     record.to_string(),
///     r#"{"id":"372e67954025e0ba6aaa6d586b9e0b59","content":"203.0.113.7"}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Absent on creation requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Whether the record *can* be proxied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxiable: Option<bool>,
    /// Whether the record *should* be proxied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    /// Time to live in seconds; `1` means automatic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// Owning zone, lookup only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
    #[serde(default, with = "datetime", skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, with = "datetime", skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_meta"
    )]
    pub meta: Option<RecordMeta>,
}

impl DnsRecord {
    /// A creation request for `record_type name -> content`.
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            record_type: Some(record_type.into()),
            name: Some(name.into()),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// A bare reference to an existing record, as used by `delete`.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// The record id, or `""` when unset.
    pub fn id_or_empty(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for DnsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(f, self)
    }
}

/// `"meta": {}` carries nothing; keep it as `None` so it is not echoed back.
fn deserialize_meta<'de, D>(deserializer: D) -> Result<Option<RecordMeta>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let meta = Option::<RecordMeta>::deserialize(deserializer)?;
    Ok(meta.filter(|m| !m.is_empty()))
}

fn write_json<T: Serialize>(f: &mut fmt::Formatter<'_>, value: &T) -> fmt::Result {
    match serde_json::to_string(value) {
        Ok(json) => f.write_str(&json),
        Err(e) => write!(f, "{e}"),
    }
}
