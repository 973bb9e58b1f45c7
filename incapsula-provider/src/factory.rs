//! Client factory functions.

use std::sync::Arc;

use crate::client::IncapsulaClient;
use crate::error::{ProviderError, Result};
use crate::traits::SiteApi;
use crate::types::IncapsulaCredentials;

/// Creates a [`SiteApi`] instance from the given credentials.
///
/// Credentials are validated locally first; nothing is sent to the API.
/// The returned client is wrapped in `Arc<dyn SiteApi>` for easy sharing
/// across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use incapsula_provider::{create_site_api, IncapsulaCredentials};
///
/// let api = create_site_api(IncapsulaCredentials::new("12345", "your-key")).unwrap();
/// ```
pub fn create_site_api(credentials: IncapsulaCredentials) -> Result<Arc<dyn SiteApi>> {
    credentials
        .validate()
        .map_err(|e| ProviderError::InvalidCredentials {
            raw_message: Some(e.to_string()),
        })?;
    Ok(Arc::new(IncapsulaClient::new(credentials)?))
}
