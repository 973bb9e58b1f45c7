//! 测试辅助模块
//!
//! 提供内存版 `SiteApi` mock 和 DNS 条目工厂方法。

use std::collections::HashMap;

use async_trait::async_trait;
use incapsula_provider::{
    AddSiteRequest, DnsRecordEntry, ProviderError, SiteAddResponse, SiteApi, SiteStatusResponse,
};
use tokio::sync::RwLock;

// ===== DNS entry factories =====

pub fn cname_entry(name: &str, values: &[&str]) -> DnsRecordEntry {
    DnsRecordEntry {
        dns_record_name: name.to_string(),
        set_type_to: "CNAME".to_string(),
        set_data_to: values.iter().map(ToString::to_string).collect(),
    }
}

pub fn a_entry(name: &str, values: &[&str]) -> DnsRecordEntry {
    DnsRecordEntry {
        dns_record_name: name.to_string(),
        set_type_to: "A".to_string(),
        set_data_to: values.iter().map(ToString::to_string).collect(),
    }
}

// ===== MockSiteApi =====

/// In-memory stand-in for the Incapsula site API.
///
/// Site ids are handed out from 1. Domains are stored lowercased, the way
/// the API canonicalizes them. Every call is recorded by name before it is
/// served, including calls failed through [`fail_next`](Self::fail_next).
pub struct MockSiteApi {
    sites: RwLock<HashMap<u64, SiteStatusResponse>>,
    next_id: RwLock<u64>,
    dns: Vec<DnsRecordEntry>,
    creation_date: Option<i64>,
    calls: RwLock<Vec<&'static str>>,
    last_add_request: RwLock<Option<AddSiteRequest>>,
    /// 如果 Some，下一次调用返回此错误
    fail_next: RwLock<Option<ProviderError>>,
}

impl MockSiteApi {
    pub const CREATION_DATE: i64 = 1_372_573_200_000;

    pub fn new() -> Self {
        Self {
            sites: RwLock::new(HashMap::new()),
            next_id: RwLock::new(1),
            dns: Vec::new(),
            creation_date: Some(Self::CREATION_DATE),
            calls: RwLock::new(Vec::new()),
            last_add_request: RwLock::new(None),
            fail_next: RwLock::new(None),
        }
    }

    /// DNS instructions returned for every site.
    pub fn with_dns(mut self, dns: Vec<DnsRecordEntry>) -> Self {
        self.dns = dns;
        self
    }

    /// Creation date reported by site status; `None` mimics a `null` field.
    pub fn with_creation_date(mut self, creation_date: Option<i64>) -> Self {
        self.creation_date = creation_date;
        self
    }

    pub async fn fail_next(&self, err: ProviderError) {
        *self.fail_next.write().await = Some(err);
    }

    /// Insert a site directly, without recording a call.
    pub async fn seed_site(&self, domain: &str) -> u64 {
        let mut next_id = self.next_id.write().await;
        let site_id = *next_id;
        *next_id += 1;

        self.sites.write().await.insert(
            site_id,
            SiteStatusResponse {
                site_id,
                domain: domain.to_lowercase(),
                site_creation_date: self.creation_date,
                status: "pending-dns-changes".to_string(),
                dns: self.dns.clone(),
                ..Default::default()
            },
        );
        site_id
    }

    pub async fn calls(&self) -> Vec<&'static str> {
        self.calls.read().await.clone()
    }

    pub async fn last_add_request(&self) -> Option<AddSiteRequest> {
        self.last_add_request.read().await.clone()
    }

    pub async fn site_count(&self) -> usize {
        self.sites.read().await.len()
    }

    async fn begin(&self, call: &'static str) -> Result<(), ProviderError> {
        self.calls.write().await.push(call);
        match self.fail_next.write().await.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn not_found(site_id: u64) -> ProviderError {
        ProviderError::SiteNotFound {
            site_id: site_id.to_string(),
            raw_message: Some("Unknown/unauthorized site_id".to_string()),
        }
    }
}

#[async_trait]
impl SiteApi for MockSiteApi {
    async fn add_site(&self, req: &AddSiteRequest) -> Result<SiteAddResponse, ProviderError> {
        self.begin("add_site").await?;
        *self.last_add_request.write().await = Some(req.clone());

        let site_id = self.seed_site(&req.domain).await;
        Ok(SiteAddResponse {
            site_id,
            status: Some("pending-dns-changes".to_string()),
            domain: Some(req.domain.to_lowercase()),
        })
    }

    async fn site_status(
        &self,
        _domain: &str,
        site_id: u64,
    ) -> Result<SiteStatusResponse, ProviderError> {
        self.begin("site_status").await?;
        self.sites
            .read()
            .await
            .get(&site_id)
            .cloned()
            .ok_or_else(|| Self::not_found(site_id))
    }

    async fn delete_site(&self, _domain: &str, site_id: u64) -> Result<(), ProviderError> {
        self.begin("delete_site").await?;
        self.sites
            .write()
            .await
            .remove(&site_id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(site_id))
    }
}
