//! Incapsula 站点 API 客户端

mod api;
mod error;
mod http;

use std::time::Duration;

use reqwest::Client;

use crate::error::{ProviderError, Result};
use crate::types::IncapsulaCredentials;

pub(crate) const ENDPOINT_ADD_SITE: &str = "/sites/add";
pub(crate) const ENDPOINT_SITE_STATUS: &str = "/sites/status";
pub(crate) const ENDPOINT_DELETE_SITE: &str = "/sites/delete";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
fn create_http_client() -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| ProviderError::NetworkError {
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// Incapsula API 客户端
pub struct IncapsulaClient {
    pub(crate) client: Client,
    pub(crate) credentials: IncapsulaCredentials,
}

/// `IncapsulaClient` Builder
pub struct IncapsulaClientBuilder {
    credentials: IncapsulaCredentials,
}

impl IncapsulaClientBuilder {
    fn new(credentials: IncapsulaCredentials) -> Self {
        Self { credentials }
    }

    /// Override the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.credentials.base_url = Some(base_url.into());
        self
    }

    pub fn build(self) -> Result<IncapsulaClient> {
        Ok(IncapsulaClient {
            client: create_http_client()?,
            credentials: self.credentials,
        })
    }
}

impl IncapsulaClient {
    pub fn new(credentials: IncapsulaCredentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    pub fn builder(credentials: IncapsulaCredentials) -> IncapsulaClientBuilder {
        IncapsulaClientBuilder::new(credentials)
    }

    pub(crate) fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.credentials.base_url())
    }
}
