//! Incapsula `SiteApi` trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{ErrorContext, SiteApi};
use crate::types::{AddSiteRequest, SiteAddResponse, SiteStatusResponse};

use super::{ENDPOINT_ADD_SITE, ENDPOINT_DELETE_SITE, ENDPOINT_SITE_STATUS, IncapsulaClient};

/// 删除接口只返回 `res`/`res_message`
#[derive(serde::Deserialize)]
struct EmptyResponse {}

#[async_trait]
impl SiteApi for IncapsulaClient {
    async fn add_site(&self, req: &AddSiteRequest) -> Result<SiteAddResponse> {
        log::debug!("[incapsula] Adding site for domain: {}", req.domain);

        let ctx = ErrorContext {
            domain: Some(req.domain.clone()),
            site_id: None,
            account_id: req.account_id.clone(),
        };

        self.post_form(ENDPOINT_ADD_SITE, req.form_params(), ctx)
            .await
    }

    async fn site_status(&self, domain: &str, site_id: u64) -> Result<SiteStatusResponse> {
        log::debug!("[incapsula] Getting site status for domain: {domain} (id {site_id})");

        let ctx = ErrorContext {
            domain: Some(domain.to_string()),
            site_id: Some(site_id.to_string()),
            account_id: None,
        };

        self.post_form(
            ENDPOINT_SITE_STATUS,
            vec![("site_id", site_id.to_string())],
            ctx,
        )
        .await
    }

    async fn delete_site(&self, domain: &str, site_id: u64) -> Result<()> {
        log::debug!("[incapsula] Deleting site for domain: {domain} (id {site_id})");

        let ctx = ErrorContext {
            domain: Some(domain.to_string()),
            site_id: Some(site_id.to_string()),
            account_id: None,
        };

        let _: EmptyResponse = self
            .post_form(
                ENDPOINT_DELETE_SITE,
                vec![("site_id", site_id.to_string())],
                ctx,
            )
            .await?;
        Ok(())
    }
}
