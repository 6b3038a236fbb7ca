use reqwest::Method;

use crate::error::Result;
use crate::mapping::ErrorContext;
use crate::request::{dns_record_path, dns_records_path, serialize_body, with_query};
use crate::types::{DnsRecord, Page, RecordSearch};

use super::BaseService;

/// DNS record operations within a zone.
///
/// Record ids are taken from the [`DnsRecord`] passed in and are not validated; an
/// unset id addresses the collection path and the API rejects the call.
#[derive(Debug, Clone)]
pub struct DnsRecordsService {
    base: BaseService,
}

impl DnsRecordsService {
    pub(crate) fn new(base: BaseService) -> Self {
        Self { base }
    }

    /// Lists the records of a zone (first page, server default size).
    ///
    /// # Errors
    ///
    /// Transport, decode, or API errors; see [`ClientError`](crate::ClientError).
    pub async fn get(&self, zone_id: &str) -> Result<Vec<DnsRecord>> {
        log::debug!("Listing records of zone {zone_id}");
        self.base
            .call(
                Method::GET,
                &dns_records_path(zone_id),
                None,
                ErrorContext::zone(zone_id),
            )
            .await
    }

    /// Lists the records matching every non-empty filter in `search`.
    pub async fn search(&self, zone_id: &str, search: &RecordSearch) -> Result<Vec<DnsRecord>> {
        let path = with_query(dns_records_path(zone_id), &search.to_query_string());
        self.base
            .call(Method::GET, &path, None, search_context(zone_id, search))
            .await
    }

    /// Like [`search`](Self::search), keeping the server's pagination info.
    pub async fn search_page(
        &self,
        zone_id: &str,
        search: &RecordSearch,
    ) -> Result<Page<DnsRecord>> {
        let path = with_query(dns_records_path(zone_id), &search.to_query_string());
        self.base
            .call_page(Method::GET, &path, search_context(zone_id, search))
            .await
    }

    /// Creates `record` and returns it as stored by the server.
    pub async fn create(&self, zone_id: &str, record: &DnsRecord) -> Result<DnsRecord> {
        log::info!(
            "Creating {} record {} in zone {zone_id}",
            record.record_type.as_deref().unwrap_or("?"),
            record.name.as_deref().unwrap_or("?"),
        );
        let body = serialize_body(record)?;
        self.base
            .call(
                Method::POST,
                &dns_records_path(zone_id),
                Some(body),
                record_context(zone_id, record),
            )
            .await
    }

    /// Replaces the record addressed by `record.id`. Only the fields set on `record`
    /// are sent.
    pub async fn update(&self, zone_id: &str, record: &DnsRecord) -> Result<DnsRecord> {
        log::info!("Updating record {} in zone {zone_id}", record.id_or_empty());
        let body = serialize_body(record)?;
        self.base
            .call(
                Method::PUT,
                &dns_record_path(zone_id, record.id_or_empty()),
                Some(body),
                record_context(zone_id, record),
            )
            .await
    }

    /// Deletes the record addressed by `record.id` and returns that id.
    ///
    /// The returned id is the caller's, not the one echoed in the response.
    pub async fn delete(&self, zone_id: &str, record: &DnsRecord) -> Result<String> {
        let id = record.id_or_empty();
        log::info!("Deleting record {id} in zone {zone_id}");
        let _: DnsRecord = self
            .base
            .call(
                Method::DELETE,
                &dns_record_path(zone_id, id),
                None,
                record_context(zone_id, record),
            )
            .await?;
        Ok(id.to_string())
    }
}

fn record_context(zone_id: &str, record: &DnsRecord) -> ErrorContext {
    ErrorContext::record(zone_id, record.id.as_deref(), record.name.as_deref())
}

fn search_context(zone_id: &str, search: &RecordSearch) -> ErrorContext {
    let name = Some(search.name.as_str()).filter(|n| !n.is_empty());
    ErrorContext::record(zone_id, None, name)
}
