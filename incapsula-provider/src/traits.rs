use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{AddSiteRequest, SiteAddResponse, SiteStatusResponse};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// `res` 码（0 以外）
    pub code: Option<String>,
    /// 原始 `res_message`
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 域名（仅用于日志和错误信息）
    pub domain: Option<String>,
    /// 站点 ID（用于 `SiteNotFound`）
    pub site_id: Option<String>,
    /// 账户 ID（用于 `AccountNotFound`）
    pub account_id: Option<String>,
}

/// 错误映射 Trait（内部使用）
/// 将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Incapsula 站点 API
///
/// The three remote operations the site resource lifecycle depends on.
/// `domain` is carried only for logging and error context; the API keys
/// sites by numeric id.
#[async_trait]
pub trait SiteApi: Send + Sync {
    /// 添加站点，返回新站点 ID
    async fn add_site(&self, req: &AddSiteRequest) -> Result<SiteAddResponse>;

    /// 查询站点状态（包括 DNS 配置指引）
    async fn site_status(&self, domain: &str, site_id: u64) -> Result<SiteStatusResponse>;

    /// 删除站点
    async fn delete_site(&self, domain: &str, site_id: u64) -> Result<()>;
}
