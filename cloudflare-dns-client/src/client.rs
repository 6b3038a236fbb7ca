use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::services::{BaseService, DnsRecordsService, ZonesService};
use crate::transport::{HttpTransport, Transport};

/// Entry point bundling a [`Config`] with a transport.
///
/// Services handed out by [`zones`](Self::zones) and [`dns_records`](Self::dns_records)
/// share the same configuration and connection pool.
#[derive(Debug, Clone)]
pub struct CloudflareClient {
    base: BaseService,
}

impl CloudflareClient {
    /// Creates a client backed by [`HttpTransport`].
    ///
    /// # Errors
    ///
    /// [`ClientError::Configuration`](crate::ClientError::Configuration) if the HTTP
    /// client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client that sends every request through `transport`.
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        Self {
            base: BaseService::new(Arc::new(config), transport),
        }
    }

    /// Zone listing.
    pub fn zones(&self) -> ZonesService {
        ZonesService::new(self.base.clone())
    }

    /// DNS record operations.
    pub fn dns_records(&self) -> DnsRecordsService {
        DnsRecordsService::new(self.base.clone())
    }

    /// The configuration every request is built from.
    pub fn config(&self) -> &Config {
        self.base.config()
    }
}
