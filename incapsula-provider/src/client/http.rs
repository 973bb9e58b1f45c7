//! Incapsula HTTP 请求方法

use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::types::ApiStatus;
use crate::utils::log_sanitizer::truncate_for_log;

use super::IncapsulaClient;

impl IncapsulaClient {
    /// 执行表单 POST 请求
    ///
    /// 所有接口都是 `application/x-www-form-urlencoded` POST，
    /// 鉴权参数 `api_id`/`api_key` 随表单发送。
    ///
    /// 成功条件：HTTP 2xx 且 `res == 0`。非零 `res` 按错误码映射，
    /// 其余非 2xx 响应一律视为 HTTP 错误，2xx 但缺少 `res` 视为解析错误。
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Vec<(&'static str, String)>,
        ctx: ErrorContext,
    ) -> Result<T> {
        let url = self.endpoint_url(endpoint);

        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        log::debug!("[incapsula] POST {url} params={keys:?}");

        let mut form = Vec::with_capacity(params.len() + 2);
        form.push(("api_id", self.credentials.api_id.clone()));
        form.push(("api_key", self.credentials.api_key.clone()));
        form.extend(params);

        let request = self.client.post(&url).form(&form);

        let (status, response_text) = HttpUtils::execute_request(request, "POST", endpoint).await?;
        let success = (200..300).contains(&status);

        // 非 JSON 的错误响应（网关/鉴权页面等）
        let api_status: ApiStatus = match serde_json::from_str(&response_text) {
            Ok(s) => s,
            Err(_) if !success => {
                return Err(self.http_error(status, &response_text, endpoint, ctx));
            }
            Err(e) => {
                log::error!(
                    "[incapsula] JSON parse failed: {e}, raw response: {}",
                    truncate_for_log(&response_text)
                );
                return Err(self.parse_error(e));
            }
        };

        if let Some(code) = api_status.res.filter(|code| *code != 0) {
            log::error!("[incapsula] API error: {code} - {}", api_status.res_message);
            return Err(self.map_error(
                RawApiError::with_code(code.to_string(), api_status.res_message),
                ctx,
            ));
        }

        if !success {
            return Err(self.http_error(status, &response_text, endpoint, ctx));
        }

        if api_status.res.is_none() {
            log::error!(
                "[incapsula] No res code in response from {endpoint}: {}",
                truncate_for_log(&response_text)
            );
            return Err(self.parse_error(format!("missing res code in response from {endpoint}")));
        }

        HttpUtils::parse_json(&response_text)
    }

    /// 非 2xx 且不带业务错误码的响应
    fn http_error(
        &self,
        status: u16,
        body: &str,
        endpoint: &str,
        ctx: ErrorContext,
    ) -> ProviderError {
        log::error!(
            "[incapsula] HTTP {status} from {endpoint}: {}",
            truncate_for_log(body)
        );
        self.map_error(
            RawApiError::new(format!("HTTP {status}: {}", truncate_for_log(body))),
            ctx,
        )
    }
}
