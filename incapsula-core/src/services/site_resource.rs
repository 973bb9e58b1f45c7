//! `incapsula_site` 资源生命周期

use std::sync::Arc;

use async_trait::async_trait;
use incapsula_provider::{IncapsulaCredentials, ProviderError, SiteApi, create_site_api};

use crate::error::{CoreError, CoreResult};
use crate::schema::{
    ACCOUNT_ID, DNS_A_RECORD_NAME, DNS_A_RECORD_VALUE, DNS_CNAME_RECORD_NAME,
    DNS_CNAME_RECORD_VALUE, DOMAIN, FORCE_SSL, LOG_LEVEL, LOGS_ACCOUNT_ID, REF_ID,
    SEND_SITE_SETUP_EMAILS, SITE_CREATION_DATE, SITE_IP, AttributeSchema, site_schema,
    validate_config,
};
use crate::traits::Resource;
use crate::types::{AddSiteRequest, DnsRecordEntry, DnsRecordType, ResourceData};

/// DNS instructions surfaced as computed attributes.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DnsSummary {
    /// Name and first value of the first CNAME entry that has data.
    pub cname: Option<(String, String)>,
    /// Name of the last A entry.
    pub a_record_name: Option<String>,
    /// Values of every A entry, in response order.
    pub a_record_values: Vec<String>,
}

impl DnsSummary {
    pub fn from_entries(entries: &[DnsRecordEntry]) -> Self {
        let mut summary = Self::default();
        for entry in entries {
            match entry.record_type() {
                DnsRecordType::Cname => {
                    if summary.cname.is_none()
                        && let Some(value) = entry.set_data_to.first()
                    {
                        summary.cname = Some((entry.dns_record_name.clone(), value.clone()));
                    }
                }
                DnsRecordType::A => {
                    summary.a_record_name = Some(entry.dns_record_name.clone());
                    summary
                        .a_record_values
                        .extend(entry.set_data_to.iter().cloned());
                }
                _ => {}
            }
        }
        summary
    }
}

/// `incapsula_site` 资源
pub struct SiteResource {
    api: Arc<dyn SiteApi>,
}

impl SiteResource {
    pub const TYPE_NAME: &'static str = "incapsula_site";

    #[must_use]
    pub fn new(api: Arc<dyn SiteApi>) -> Self {
        Self { api }
    }

    /// Build a resource backed by a live API client.
    pub fn from_credentials(credentials: IncapsulaCredentials) -> CoreResult<Self> {
        credentials.validate()?;
        Ok(Self::new(create_site_api(credentials)?))
    }

    fn site_id(data: &ResourceData) -> CoreResult<u64> {
        data.id()
            .parse::<u64>()
            .map_err(|_| CoreError::InvalidId(data.id().to_string()))
    }

    fn add_site_request(data: &ResourceData) -> AddSiteRequest {
        AddSiteRequest {
            domain: data.get_str(DOMAIN).to_string(),
            account_id: data.get_opt_str(ACCOUNT_ID),
            ref_id: data.get_opt_str(REF_ID),
            send_site_setup_emails: data.get_opt_str(SEND_SITE_SETUP_EMAILS),
            site_ip: data.get_opt_str(SITE_IP),
            force_ssl: data.get_opt_str(FORCE_SSL),
            log_level: data.get_opt_str(LOG_LEVEL),
            logs_account_id: data.get_opt_str(LOGS_ACCOUNT_ID),
        }
    }

    /// 记录失败日志后原样返回错误
    fn api_failure(action: &str, domain: &str, e: ProviderError) -> CoreError {
        if e.is_expected() {
            log::warn!("Could not {action} Incapsula site for domain: {domain}, {e}");
        } else {
            log::error!("Could not {action} Incapsula site for domain: {domain}, {e}");
        }
        CoreError::Provider(e)
    }
}

#[async_trait]
impl Resource for SiteResource {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn schema(&self) -> Vec<AttributeSchema> {
        site_schema()
    }

    async fn create(&self, data: &mut ResourceData) -> CoreResult<()> {
        validate_config(&self.schema(), data)?;

        let request = Self::add_site_request(data);
        log::info!("Creating Incapsula site for domain: {}", request.domain);

        let added = self
            .api
            .add_site(&request)
            .await
            .map_err(|e| Self::api_failure("create", &request.domain, e))?;

        data.set_id(added.site_id.to_string());

        log::info!(
            "Created Incapsula site for domain: {} (id {})",
            request.domain,
            added.site_id
        );

        self.read(data).await
    }

    async fn read(&self, data: &mut ResourceData) -> CoreResult<()> {
        let domain = data.get_str(DOMAIN).to_string();
        let site_id = Self::site_id(data)?;

        log::info!("Reading Incapsula site for domain: {domain}");

        let status = self
            .api
            .site_status(&domain, site_id)
            .await
            .map_err(|e| Self::api_failure("read", &domain, e))?;

        if let Some(created) = status.site_creation_date {
            data.set(SITE_CREATION_DATE, created);
        }
        data.set(DOMAIN, status.domain.as_str());

        let dns = DnsSummary::from_entries(&status.dns);
        if let Some((name, value)) = dns.cname {
            data.set(DNS_CNAME_RECORD_NAME, name);
            data.set(DNS_CNAME_RECORD_VALUE, value);
        }
        if let Some(name) = dns.a_record_name {
            data.set(DNS_A_RECORD_NAME, name);
        }
        data.set(DNS_A_RECORD_VALUE, dns.a_record_values);

        log::info!("Read Incapsula site for domain: {domain}");

        Ok(())
    }

    async fn update(&self, data: &mut ResourceData) -> CoreResult<()> {
        // The API offers no in-place site update; declared changes are kept
        // locally only.
        log::debug!(
            "Update of Incapsula site for domain {} is a no-op",
            data.get_str(DOMAIN)
        );
        Ok(())
    }

    async fn delete(&self, data: &mut ResourceData) -> CoreResult<()> {
        let domain = data.get_str(DOMAIN).to_string();
        let site_id = Self::site_id(data)?;

        log::info!("Deleting Incapsula site for domain: {domain}");

        self.api
            .delete_site(&domain, site_id)
            .await
            .map_err(|e| Self::api_failure("delete", &domain, e))?;

        data.set_id("");

        log::info!("Deleted Incapsula site for domain: {domain}");

        Ok(())
    }
}
