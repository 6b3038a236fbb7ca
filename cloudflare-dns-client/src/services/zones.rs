use reqwest::Method;

use crate::error::Result;
use crate::mapping::ErrorContext;
use crate::request::{with_query, zones_path};
use crate::types::{Page, Zone};

use super::BaseService;

/// Zone (domain) listing.
#[derive(Debug, Clone)]
pub struct ZonesService {
    base: BaseService,
}

impl ZonesService {
    pub(crate) fn new(base: BaseService) -> Self {
        Self { base }
    }

    /// Lists the zones visible to the account (first page, server default size).
    ///
    /// # Errors
    ///
    /// Transport, decode, or API errors; see [`ClientError`](crate::ClientError).
    pub async fn get(&self) -> Result<Vec<Zone>> {
        log::debug!("Listing zones");
        self.base
            .call(Method::GET, &zones_path(), None, ErrorContext::default())
            .await
    }

    /// Fetches one page of zones along with pagination info.
    ///
    /// `page = 0` leaves the page to the server.
    pub async fn get_page(&self, page: u32) -> Result<Page<Zone>> {
        let query = if page > 0 {
            format!("page={page}")
        } else {
            String::new()
        };
        self.base
            .call_page(
                Method::GET,
                &with_query(zones_path(), &query),
                ErrorContext::default(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ClientError;
    use crate::test_utils::{MockTransport, base_with, error_envelope, ok_envelope};
    use crate::transport::ApiResponse;

    #[tokio::test]
    async fn get_lists_zones() {
        let transport = MockTransport::new();
        transport.push_body(&ok_envelope(&json!([
            {"id": "z1", "name": "example.com", "status": "active"},
            {"id": "z2", "name": "example.org", "status": "pending"}
        ])));
        let zones = ZonesService::new(base_with(&transport));

        let result = zones.get().await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, "z1");
        assert_eq!(result[0].name, "example.com");
        assert_eq!(result[1].status, "pending");

        let request = transport.last_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, "https://api.cloudflare.com/client/v4/zones/");
        assert_eq!(request.headers["x-auth-email"], "user@example.com");
        assert_eq!(request.headers["x-auth-key"], "0123456789abcdef");
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn get_minimal_envelope() {
        let transport = MockTransport::new();
        transport.push_body(r#"{"success":true,"result":[{"id":"z1","name":"example.com"}]}"#);
        let zones = ZonesService::new(base_with(&transport));

        let result = zones.get().await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "z1");
        assert_eq!(result[0].name, "example.com");
    }

    #[tokio::test]
    async fn get_zone_with_null_name_servers() {
        let transport = MockTransport::new();
        transport.push_body(&ok_envelope(&json!([
            {"id": "z1", "name": "example.com", "name_servers": ["a.ns.cloudflare.com"], "original_name_servers": null},
            {"id": "z2", "name": "example.org", "name_servers": null}
        ])));
        let zones = ZonesService::new(base_with(&transport));

        let result = zones.get().await.unwrap();

        assert_eq!(result.len(), 2);
        assert!(result[0].original_name_servers.is_empty());
        assert!(result[1].name_servers.is_empty());
    }

    #[tokio::test]
    async fn get_maps_auth_failure() {
        let transport = MockTransport::new();
        transport.push_body(&error_envelope(9103, "Unknown X-Auth-Key or X-Auth-Email"));
        let zones = ZonesService::new(base_with(&transport));

        let result = zones.get().await;
        assert!(matches!(
            result,
            Err(ClientError::InvalidCredentials { raw_message: Some(ref m) })
                if m == "Unknown X-Auth-Key or X-Auth-Email"
        ));
    }

    #[tokio::test]
    async fn get_propagates_transport_error() {
        let transport = MockTransport::new();
        transport.push(Err(ClientError::Timeout {
            detail: "deadline".to_string(),
        }));
        let zones = ZonesService::new(base_with(&transport));

        assert!(matches!(
            zones.get().await,
            Err(ClientError::Timeout { .. })
        ));
    }

    #[tokio::test]
    async fn get_rejects_non_envelope_body() {
        let transport = MockTransport::new();
        transport.push(Ok(ApiResponse {
            status: 500,
            body: "internal error".to_string(),
        }));
        let zones = ZonesService::new(base_with(&transport));

        assert!(matches!(
            zones.get().await,
            Err(ClientError::TransportDecode { .. })
        ));
    }

    #[tokio::test]
    async fn get_page_sends_page_and_keeps_info() {
        let transport = MockTransport::new();
        transport.push_body(
            &json!({
                "success": true,
                "result": [{"id": "z3", "name": "example.net"}],
                "result_info": {"page": 2, "per_page": 20, "total_pages": 2, "count": 1, "total_count": 21}
            })
            .to_string(),
        );
        let zones = ZonesService::new(base_with(&transport));

        let page = zones.get_page(2).await.unwrap();

        assert_eq!(page.items[0].name, "example.net");
        assert_eq!(page.result_info.total_count, 21);
        assert!(!page.has_more());
        assert_eq!(
            transport.last_request().url,
            "https://api.cloudflare.com/client/v4/zones/?page=2"
        );
    }

    #[tokio::test]
    async fn get_page_zero_sends_no_query() {
        let transport = MockTransport::new();
        transport.push_body(&ok_envelope(&json!([])));
        let zones = ZonesService::new(base_with(&transport));

        let page = zones.get_page(0).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(
            transport.last_request().url,
            "https://api.cloudflare.com/client/v4/zones/"
        );
    }
}
