use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::log_sanitizer::mask_secret;
use crate::utils::{datetime, res_code};

/// Default base URL of the Incapsula provisioning API.
pub const DEFAULT_BASE_URL: &str = "https://my.incapsula.com/api/prov/v1";

// ============ Credential Types ============

/// Environment variable holding the API id.
pub const ENV_API_ID: &str = "INCAPSULA_API_ID";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "INCAPSULA_API_KEY";
/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "INCAPSULA_BASE_URL";

/// Validation error for Incapsula credentials.
///
/// Returned when credential fields are missing, empty, or have an invalid format.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required credential field is missing entirely.
    MissingField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field has an invalid format.
    InvalidFormat {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
        /// Description of what's wrong with the format.
        reason: String,
    },
}

impl CredentialValidationError {
    /// Machine-readable key of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field, .. }
            | Self::EmptyField { field, .. }
            | Self::InvalidFormat { field, .. } => field,
        }
    }
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label, .. } => write!(f, "Missing required field: {label}"),
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
            Self::InvalidFormat { label, reason, .. } => write!(f, "{label}: {reason}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Credentials and endpoint for the Incapsula API.
///
/// ```json
/// { "api_id": "12345", "api_key": "...", "base_url": null }
/// ```
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncapsulaCredentials {
    /// API id of the API client.
    pub api_id: String,
    /// API key of the API client.
    pub api_key: String,
    /// Overrides [`DEFAULT_BASE_URL`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl std::fmt::Debug for IncapsulaCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IncapsulaCredentials")
            .field("api_id", &self.api_id)
            .field("api_key", &mask_secret(&self.api_key))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl IncapsulaCredentials {
    pub fn new(api_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_id: api_id.into(),
            api_key: api_key.into(),
            base_url: None,
        }
    }

    /// Construct credentials from a `HashMap`, validating required fields.
    ///
    /// Keys: `apiId`, `apiKey`, and optionally `baseUrl`.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, CredentialValidationError> {
        let creds = Self {
            api_id: Self::get_required_field(map, "apiId", "API ID")?,
            api_key: Self::get_required_field(map, "apiKey", "API Key")?,
            base_url: map
                .get("baseUrl")
                .filter(|v| !v.trim().is_empty())
                .cloned(),
        };
        creds.validate()?;
        Ok(creds)
    }

    /// Read credentials from `INCAPSULA_API_ID`, `INCAPSULA_API_KEY`
    /// and the optional `INCAPSULA_BASE_URL`.
    pub fn from_env() -> Result<Self, CredentialValidationError> {
        let map: HashMap<String, String> = [
            ("apiId", ENV_API_ID),
            ("apiKey", ENV_API_KEY),
            ("baseUrl", ENV_BASE_URL),
        ]
        .into_iter()
        .filter_map(|(key, var)| std::env::var(var).ok().map(|v| (key.to_string(), v)))
        .collect();

        Self::from_map(&map)
    }

    /// Convert credentials to a `HashMap` for flat key-value storage.
    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map: HashMap<String, String> = [
            ("apiId".to_string(), self.api_id.clone()),
            ("apiKey".to_string(), self.api_key.clone()),
        ]
        .into();
        if let Some(ref base_url) = self.base_url {
            map.insert("baseUrl".to_string(), base_url.clone());
        }
        map
    }

    /// Check field contents without contacting the API.
    pub fn validate(&self) -> Result<(), CredentialValidationError> {
        if self.api_id.trim().is_empty() {
            return Err(CredentialValidationError::EmptyField {
                field: "apiId".to_string(),
                label: "API ID".to_string(),
            });
        }
        if self.api_key.trim().is_empty() {
            return Err(CredentialValidationError::EmptyField {
                field: "apiKey".to_string(),
                label: "API Key".to_string(),
            });
        }
        if let Some(ref base_url) = self.base_url
            && !(base_url.starts_with("https://") || base_url.starts_with("http://"))
        {
            return Err(CredentialValidationError::InvalidFormat {
                field: "baseUrl".to_string(),
                label: "Base URL".to_string(),
                reason: format!("'{base_url}' is not an http(s) URL"),
            });
        }
        Ok(())
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    /// Obtain required fields from `HashMap` and verify that it is not empty
    fn get_required_field(
        map: &HashMap<String, String>,
        key: &str,
        label: &str,
    ) -> Result<String, CredentialValidationError> {
        match map.get(key) {
            None => Err(CredentialValidationError::MissingField {
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) if v.trim().is_empty() => Err(CredentialValidationError::EmptyField {
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) => Ok(v.clone()),
        }
    }
}

// ============ Site Types ============

/// Parameters of the add-site call.
///
/// Optional values that are `None` or empty are left out of the request,
/// so the API applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddSiteRequest {
    /// Domain name of the site, e.g. `www.example.com`.
    pub domain: String,
    /// Account to operate on. Defaults to the API client's account.
    pub account_id: Option<String>,
    /// Customer specific identifier for this operation.
    pub ref_id: Option<String>,
    /// `"false"` suppresses DNS/SSL setup emails to end users.
    pub send_site_setup_emails: Option<String>,
    /// Manually set web server IP/CNAME.
    pub site_ip: Option<String>,
    /// `"true"` forces SSL support for manually configured sites.
    pub force_ssl: Option<String>,
    /// Log level for the site.
    pub log_level: Option<String>,
    /// Account that collects logs (Logs Integration SKU).
    pub logs_account_id: Option<String>,
}

impl AddSiteRequest {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Default::default()
        }
    }

    /// Form parameters in the order the API documents them, credentials excluded.
    pub fn form_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("domain", self.domain.clone())];
        let optional = [
            ("account_id", &self.account_id),
            ("ref_id", &self.ref_id),
            ("send_site_setup_emails", &self.send_site_setup_emails),
            ("site_ip", &self.site_ip),
            ("force_ssl", &self.force_ssl),
            ("log_level", &self.log_level),
            ("logs_account_id", &self.logs_account_id),
        ];
        for (key, value) in optional {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                params.push((key, v.to_string()));
            }
        }
        params
    }
}

/// `res`/`res_message` envelope shared by every API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiStatus {
    /// 0 on success; `None` when the body carries no usable `res`.
    #[serde(default, deserialize_with = "res_code::deserialize")]
    pub res: Option<i64>,
    #[serde(default)]
    pub res_message: String,
}

/// Response of the add-site call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteAddResponse {
    pub site_id: u64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
}

/// DNS record type named by a [`DnsRecordEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsRecordType {
    A,
    Aaaa,
    Cname,
    Txt,
    Other(String),
}

impl DnsRecordType {
    pub fn parse(value: &str) -> Self {
        match value.to_uppercase().as_str() {
            "A" => Self::A,
            "AAAA" => Self::Aaaa,
            "CNAME" => Self::Cname,
            "TXT" => Self::Txt,
            _ => Self::Other(value.to_string()),
        }
    }
}

/// One DNS instruction from the site status response: point
/// `dns_record_name` at `set_data_to` using record type `set_type_to`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecordEntry {
    #[serde(default)]
    pub dns_record_name: String,
    #[serde(default)]
    pub set_type_to: String,
    #[serde(default)]
    pub set_data_to: Vec<String>,
}

impl DnsRecordEntry {
    pub fn record_type(&self) -> DnsRecordType {
        DnsRecordType::parse(&self.set_type_to)
    }
}

/// Response of the site status call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteStatusResponse {
    pub site_id: u64,
    #[serde(default)]
    pub domain: String,
    /// Creation date in milliseconds since the Unix epoch.
    #[serde(default)]
    pub site_creation_date: Option<i64>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub account_id: Option<u64>,
    #[serde(default)]
    pub ips: Vec<String>,
    #[serde(default)]
    pub dns: Vec<DnsRecordEntry>,
}

impl SiteStatusResponse {
    /// Creation date as a timestamp, if the API returned a usable value.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.site_creation_date
            .and_then(datetime::parse_unix_timestamp)
    }
}
