//! # cloudflare-dns-client
//!
//! An async client for the Cloudflare v4 DNS API, authenticated with an account
//! email and global API key.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation and Android targets.
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cloudflare-dns-client = "0.1"
//! ```
//!
//! Or with rustls:
//!
//! ```toml
//! [dependencies]
//! cloudflare-dns-client = { version = "0.1", default-features = false, features = ["rustls"] }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cloudflare_dns_client::{CloudflareClient, Config, RecordSearch};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Build a configuration; an empty content type means application/json
//!     let config = Config::new("user@example.com", "your-global-api-key", "", false)?;
//!     let client = CloudflareClient::new(config)?;
//!
//!     // 2. List zones
//!     let zones = client.zones().get().await?;
//!     for zone in &zones {
//!         println!("{} ({})", zone.name, zone.status);
//!     }
//!
//!     // 3. Search the first zone for A records
//!     let search = RecordSearch::new("A", "", "", 0, 0);
//!     let records = client.dns_records().search(&zones[0].id, &search).await?;
//!     for record in &records {
//!         println!("{record}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Creating and Deleting Records
//!
//! ```rust,no_run
//! # use cloudflare_dns_client::*;
//! # async fn example(client: CloudflareClient, zone_id: &str) -> Result<()> {
//! let record = DnsRecord {
//!     ttl: Some(120),
//!     proxied: Some(false),
//!     ..DnsRecord::new("A", "www.example.com", "192.0.2.1")
//! };
//! let created = client.dns_records().create(zone_id, &record).await?;
//! let deleted_id = client.dns_records().delete(zone_id, &created).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError).
//! An envelope with `success = false` is always an error; its payload is never
//! returned. Common variants:
//!
//! - [`ClientError::InvalidCredentials`] — the email/key pair was rejected
//! - [`ClientError::RecordNotFound`] — DNS record not found
//! - [`ClientError::RateLimited`] — HTTP 429
//! - [`ClientError::TransportDecode`] — the body was not a response envelope
//!
//! Requests are never retried. See [`ClientError`] for the full list.

mod client;
mod config;
pub mod envelope;
mod error;
mod mapping;
mod request;
mod services;
mod transport;
mod types;
mod utils;

#[cfg(test)]
mod test_utils;

// Re-export error types
pub use error::{ClientError, Result};

pub use client::CloudflareClient;
pub use config::{API_BASE_URL, CONTENT_TYPE_APPLICATION_JSON, Config};

// Re-export services
pub use services::{DnsRecordsService, ZonesService};

// Re-export transport seam
pub use request::ApiRequest;
pub use transport::{ApiResponse, HttpTransport, Transport};

// Re-export types
pub use types::{
    DnsRecord, MAX_PER_PAGE, MIN_PER_PAGE, Page, RecordMeta, RecordSearch, ResultInfo, Zone,
};

// Re-export utils module
pub use utils::datetime;
