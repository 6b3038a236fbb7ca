//! API services
//!
//! Each service is a thin handle over a shared [`BaseService`]; cloning one is cheap.

mod base;
mod dns_records;
mod zones;

pub(crate) use base::BaseService;
pub use dns_records::DnsRecordsService;
pub use zones::ZonesService;
