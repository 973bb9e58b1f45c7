//! Resource implementations

mod site_resource;

pub use site_resource::{DnsSummary, SiteResource};
