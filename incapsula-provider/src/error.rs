use serde::{Deserialize, Serialize};

/// Unified error type for all Incapsula API operations.
///
/// All variants are serializable for structured error reporting.
///
/// Requests are sent once; transient failures ([`NetworkError`](Self::NetworkError),
/// [`Timeout`](Self::Timeout), [`RateLimited`](Self::RateLimited)) are returned
/// to the caller as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    RateLimited {
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The `api_id`/`api_key` pair was rejected.
    InvalidCredentials {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The site id is unknown or not visible to the authenticated account.
    SiteNotFound {
        /// Site id that was not found.
        site_id: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The account id is unknown or not visible to the authenticated account.
    AccountNotFound {
        /// Account id that was not found.
        account_id: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter is invalid.
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The authenticated account may not perform the requested operation.
    PermissionDenied {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the API response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// An unrecognized error from the API.
    ///
    /// Catch-all for `res` codes not mapped to a specific variant.
    Unknown {
        /// Raw `res` code from the API, if available.
        raw_code: Option<String>,
        /// Raw `res_message` from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::SiteNotFound { .. }
                | Self::AccountNotFound { .. }
                | Self::InvalidParameter { .. }
                | Self::PermissionDenied { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "[incapsula] Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "[incapsula] Request timeout: {detail}"),
            Self::RateLimited { retry_after, .. } => {
                if let Some(secs) = retry_after {
                    write!(f, "[incapsula] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[incapsula] Rate limited")
                }
            }
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "[incapsula] Invalid credentials: {msg}")
                } else {
                    write!(f, "[incapsula] Invalid credentials")
                }
            }
            Self::SiteNotFound {
                site_id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[incapsula] Site '{site_id}' not found: {msg}")
                } else {
                    write!(f, "[incapsula] Site '{site_id}' not found")
                }
            }
            Self::AccountNotFound { account_id, .. } => {
                write!(f, "[incapsula] Account '{account_id}' not found")
            }
            Self::InvalidParameter { param, detail } => {
                write!(f, "[incapsula] Invalid parameter '{param}': {detail}")
            }
            Self::PermissionDenied { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "[incapsula] Permission denied: {msg}")
                } else {
                    write!(f, "[incapsula] Permission denied")
                }
            }
            Self::ParseError { detail } => write!(f, "[incapsula] Parse error: {detail}"),
            Self::SerializationError { detail } => {
                write!(f, "[incapsula] Serialization error: {detail}")
            }
            Self::Unknown {
                raw_code,
                raw_message,
            } => {
                if let Some(code) = raw_code {
                    write!(f, "[incapsula] {raw_message} (res={code})")
                } else {
                    write!(f, "[incapsula] {raw_message}")
                }
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
