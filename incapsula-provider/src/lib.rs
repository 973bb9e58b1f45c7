//! # incapsula-provider
//!
//! Client for the Incapsula (Imperva Cloud WAF) site provisioning API.
//!
//! Covers the calls needed to manage the lifecycle of a site:
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | [`SiteApi::add_site`] | `POST /sites/add` |
//! | [`SiteApi::site_status`] | `POST /sites/status` |
//! | [`SiteApi::delete_site`] | `POST /sites/delete` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use incapsula_provider::{create_site_api, AddSiteRequest, IncapsulaCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // INCAPSULA_API_ID / INCAPSULA_API_KEY / INCAPSULA_BASE_URL
//!     let api = create_site_api(IncapsulaCredentials::from_env()?)?;
//!
//!     let added = api.add_site(&AddSiteRequest::new("www.example.com")).await?;
//!     let status = api.site_status("www.example.com", added.site_id).await?;
//!     for entry in &status.dns {
//!         println!("{} {} -> {:?}", entry.dns_record_name, entry.set_type_to, entry.set_data_to);
//!     }
//!
//!     api.delete_site("www.example.com", added.site_id).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ProviderError>`](ProviderError). A
//! response whose `res` code is non-zero is mapped onto a structured variant:
//!
//! - [`ProviderError::InvalidCredentials`] — `res` 9411
//! - [`ProviderError::SiteNotFound`] — `res` 9403
//! - [`ProviderError::AccountNotFound`] — `res` 9413
//! - [`ProviderError::Unknown`] — anything unmapped, with the raw code and message
//!
//! Requests are sent once; there is no automatic retry. A non-2xx HTTP
//! status is always an error, even when the body is JSON.

mod client;
mod error;
mod factory;
mod http_client;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};

pub use factory::create_site_api;

// Internal traits (error mapping) are not exported
pub use traits::SiteApi;

pub use client::{IncapsulaClient, IncapsulaClientBuilder};

pub use types::{
    AddSiteRequest, ApiStatus, CredentialValidationError, DEFAULT_BASE_URL, DnsRecordEntry,
    DnsRecordType, ENV_API_ID, ENV_API_KEY, ENV_BASE_URL, IncapsulaCredentials, SiteAddResponse,
    SiteStatusResponse,
};

pub use utils::{datetime, log_sanitizer};
