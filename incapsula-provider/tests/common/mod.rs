//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use incapsula_provider::{IncapsulaCredentials, SiteApi, create_site_api};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试站点域名（`TEST_DOMAIN` 的子域名）
pub fn generate_test_site_domain(base: &str) -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("test-{}.{base}", &uuid.to_string()[..8])
}

/// 测试上下文 - 封装 API 客户端和测试域名
pub struct TestContext {
    pub api: Arc<dyn SiteApi>,
    pub base_domain: String,
}

impl TestContext {
    pub fn from_env() -> Option<Self> {
        let credentials = IncapsulaCredentials::from_env().ok()?;
        let base_domain = env::var("TEST_DOMAIN").ok()?;
        let api = create_site_api(credentials).ok()?;

        Some(Self { api, base_domain })
    }

    /// 清理测试站点
    pub async fn cleanup_site(&self, domain: &str, site_id: u64) {
        let _ = self.api.delete_site(domain, site_id).await;
    }
}
