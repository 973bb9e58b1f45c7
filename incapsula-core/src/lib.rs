//! Incapsula Core Library
//!
//! Lifecycle binding of the `incapsula_site` declarative resource:
//! - Attribute schema and configuration validation
//! - Resource state (identifier + attribute bag)
//! - Create / read / update / delete / import against the Incapsula API
//!
//! The host runtime that schedules lifecycle calls and persists state is
//! not part of this crate; it drives [`Resource`] with a [`ResourceData`]
//! per instance.
//!
//! ```rust,no_run
//! use incapsula_core::{Resource, ResourceData, SiteResource, schema};
//! use incapsula_provider::IncapsulaCredentials;
//!
//! # async fn example() -> incapsula_core::CoreResult<()> {
//! let site = SiteResource::from_credentials(IncapsulaCredentials::from_env()?)?;
//!
//! let mut data = ResourceData::new().with(schema::DOMAIN, "www.example.com");
//! site.create(&mut data).await?;
//! println!("{} -> {}", data.id(), data.get_str(schema::DNS_CNAME_RECORD_VALUE));
//!
//! site.delete(&mut data).await?;
//! assert!(!data.exists());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod schema;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{DnsSummary, SiteResource};
pub use traits::Resource;
pub use types::{AttributeValue, ResourceData};
