//! Core type definitions

mod resource_data;

pub use resource_data::{AttributeValue, ResourceData};

// Re-export API types used by resource implementations
pub use incapsula_provider::{AddSiteRequest, DnsRecordEntry, DnsRecordType, SiteStatusResponse};
