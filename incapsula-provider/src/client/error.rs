//! Incapsula 错误映射

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::IncapsulaClient;

/// Incapsula `res` code mapping
/// Reference: <https://docs.imperva.com/bundle/cloud-application-security/page/api/api.htm>
impl ProviderErrorMapper for IncapsulaClient {
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // 9411: Authentication parameters missing or incorrect
            Some("9411") => ProviderError::InvalidCredentials {
                raw_message: Some(raw.message),
            },

            // 9403: Unknown/unauthorized site_id
            Some("9403") => ProviderError::SiteNotFound {
                site_id: context.site_id.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            // 9413: Unknown/unauthorized account_id
            Some("9413") => ProviderError::AccountNotFound {
                account_id: context
                    .account_id
                    .unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            // 2: Invalid input
            Some("2") => ProviderError::InvalidParameter {
                param: "request".to_string(),
                detail: raw.message,
            },

            // 3: Operation not allowed
            // 9414: Feature not permitted
            // 9415: Operation not allowed
            Some("3" | "9414" | "9415") => ProviderError::PermissionDenied {
                raw_message: Some(raw.message),
            },

            // 1: Unexpected error, and anything not listed above
            _ => {
                log::debug!(
                    "[incapsula] Unmapped res code {:?} for domain {}",
                    raw.code,
                    context.domain.as_deref().unwrap_or("<unknown>")
                );
                self.unknown_error(raw)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IncapsulaCredentials;

    fn client() -> IncapsulaClient {
        IncapsulaClient::new(IncapsulaCredentials::new("1", "k")).unwrap()
    }

    fn ctx() -> ErrorContext {
        ErrorContext::default()
    }

    fn ctx_with_site() -> ErrorContext {
        ErrorContext {
            domain: Some("www.example.com".to_string()),
            site_id: Some("12345".to_string()),
            account_id: Some("42".to_string()),
        }
    }

    #[test]
    fn auth_error_9411() {
        let err = client().map_error(
            RawApiError::with_code("9411", "Authentication missing or invalid"),
            ctx(),
        );
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn site_not_found_9403_uses_context() {
        let err = client().map_error(
            RawApiError::with_code("9403", "Unknown/unauthorized site_id"),
            ctx_with_site(),
        );
        assert!(
            matches!(err, ProviderError::SiteNotFound { ref site_id, .. } if site_id == "12345"),
            "expected SiteNotFound, got {err:?}"
        );
    }

    #[test]
    fn site_not_found_without_context() {
        let err = client().map_error(RawApiError::with_code("9403", "unknown"), ctx());
        assert!(
            matches!(err, ProviderError::SiteNotFound { ref site_id, .. } if site_id == "<unknown>"),
            "expected SiteNotFound, got {err:?}"
        );
    }

    #[test]
    fn account_not_found_9413() {
        let err = client().map_error(
            RawApiError::with_code("9413", "Unknown/unauthorized account_id"),
            ctx_with_site(),
        );
        assert!(
            matches!(err, ProviderError::AccountNotFound { ref account_id, .. } if account_id == "42"),
            "expected AccountNotFound, got {err:?}"
        );
    }

    #[test]
    fn invalid_input_2() {
        let err = client().map_error(RawApiError::with_code("2", "Invalid input"), ctx_with_site());
        assert!(
            matches!(err, ProviderError::InvalidParameter { ref param, ref detail } if param == "request" && detail == "Invalid input"),
            "expected InvalidParameter, got {err:?}"
        );
    }

    #[test]
    fn permission_codes() {
        for code in ["3", "9414", "9415"] {
            let err = client().map_error(RawApiError::with_code(code, "denied"), ctx());
            assert!(
                matches!(err, ProviderError::PermissionDenied { .. }),
                "expected PermissionDenied for code '{code}', got {err:?}"
            );
        }
    }

    #[test]
    fn unexpected_error_falls_back_to_unknown() {
        let err = client().map_error(RawApiError::with_code("1", "Unexpected error"), ctx());
        assert!(
            matches!(err, ProviderError::Unknown { ref raw_code, ref raw_message } if raw_code.as_deref() == Some("1") && raw_message == "Unexpected error"),
            "expected Unknown, got {err:?}"
        );
    }

    #[test]
    fn uncoded_error_falls_back_to_unknown() {
        let err = client().map_error(RawApiError::new("HTTP 401: Unauthorized"), ctx());
        assert!(
            matches!(err, ProviderError::Unknown { raw_code: None, .. }),
            "expected Unknown, got {err:?}"
        );
    }
}
