//! Attribute schema of the site resource

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::types::{AttributeValue, ResourceData};

pub const DOMAIN: &str = "domain";
pub const ACCOUNT_ID: &str = "account_id";
pub const REF_ID: &str = "ref_id";
pub const SEND_SITE_SETUP_EMAILS: &str = "send_site_setup_emails";
pub const SITE_IP: &str = "site_ip";
pub const FORCE_SSL: &str = "force_ssl";
pub const LOG_LEVEL: &str = "log_level";
pub const LOGS_ACCOUNT_ID: &str = "logs_account_id";
pub const SITE_CREATION_DATE: &str = "site_creation_date";
pub const DNS_CNAME_RECORD_NAME: &str = "dns_cname_record_name";
pub const DNS_CNAME_RECORD_VALUE: &str = "dns_cname_record_value";
pub const DNS_A_RECORD_NAME: &str = "dns_a_record_name";
pub const DNS_A_RECORD_VALUE: &str = "dns_a_record_value";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Int,
    List,
}

impl AttributeType {
    fn matches(self, value: &AttributeValue) -> bool {
        matches!(
            (self, value),
            (Self::String, AttributeValue::String(_))
                | (Self::Int, AttributeValue::Int(_))
                | (Self::List, AttributeValue::List(_))
        )
    }
}

/// Who supplies an attribute's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeMode {
    /// Must be supplied by configuration.
    Required,
    /// May be supplied by configuration.
    Optional,
    /// Filled in from the API; never configured.
    Computed,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSchema {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    pub mode: AttributeMode,
    /// A change to this attribute cannot be applied in place.
    pub force_new: bool,
}

impl AttributeSchema {
    const fn new(
        name: &'static str,
        attr_type: AttributeType,
        mode: AttributeMode,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            attr_type,
            mode,
            force_new: false,
        }
    }

    const fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }
}

/// Attribute schema of the `incapsula_site` resource.
pub fn site_schema() -> Vec<AttributeSchema> {
    use AttributeMode::{Computed, Optional, Required};
    use AttributeType::{Int, List, String};

    vec![
        AttributeSchema::new(
            DOMAIN,
            String,
            Required,
            "The domain name of the site. For example: www.example.com, hello.example.com, example.com.",
        )
        .force_new(),
        AttributeSchema::new(
            ACCOUNT_ID,
            String,
            Optional,
            "Numeric identifier of the account to operate on. Defaults to the account of the API credentials.",
        ),
        AttributeSchema::new(
            REF_ID,
            String,
            Optional,
            "Customer specific identifier for this operation.",
        ),
        AttributeSchema::new(
            SEND_SITE_SETUP_EMAILS,
            String,
            Optional,
            "If false, end users will not get emails about the add site process such as DNS instructions and SSL setup.",
        ),
        AttributeSchema::new(
            SITE_IP,
            String,
            Optional,
            "Manually set the web server IP/CNAME.",
        ),
        AttributeSchema::new(
            FORCE_SSL,
            String,
            Optional,
            "If true, manually set the site to support SSL. Only for sites with manually configured IP/CNAME and for specific accounts.",
        ),
        AttributeSchema::new(
            LOG_LEVEL,
            String,
            Optional,
            "Available only for customers that purchased the Logs Integration SKU. One of full, security, none, default.",
        ),
        AttributeSchema::new(
            LOGS_ACCOUNT_ID,
            String,
            Optional,
            "Numeric identifier of the account that purchased the logs integration SKU and which collects the logs.",
        ),
        AttributeSchema::new(
            SITE_CREATION_DATE,
            Int,
            Computed,
            "Numeric representation of the site creation date.",
        ),
        AttributeSchema::new(
            DNS_CNAME_RECORD_NAME,
            String,
            Computed,
            "CNAME record name.",
        ),
        AttributeSchema::new(
            DNS_CNAME_RECORD_VALUE,
            String,
            Computed,
            "CNAME record value.",
        ),
        AttributeSchema::new(DNS_A_RECORD_NAME, String, Computed, "A record name."),
        AttributeSchema::new(DNS_A_RECORD_VALUE, List, Computed, "A record value."),
    ]
}

/// Check configuration input against `schema`.
///
/// Required attributes must be present and non-empty, every attribute must
/// be known and of the declared type, and computed attributes must not be
/// supplied.
pub fn validate_config(schema: &[AttributeSchema], data: &ResourceData) -> CoreResult<()> {
    for attr in schema.iter().filter(|a| a.mode == AttributeMode::Required) {
        match data.get(attr.name) {
            None => return Err(CoreError::MissingAttribute(attr.name.to_string())),
            Some(AttributeValue::String(s)) if s.trim().is_empty() => {
                return Err(CoreError::MissingAttribute(attr.name.to_string()));
            }
            Some(_) => {}
        }
    }

    for (name, value) in data.attributes() {
        let Some(attr) = schema.iter().find(|a| a.name == name) else {
            return Err(CoreError::ValidationError(format!(
                "unknown attribute '{name}'"
            )));
        };
        if attr.mode == AttributeMode::Computed {
            return Err(CoreError::ValidationError(format!(
                "attribute '{name}' is computed and cannot be set"
            )));
        }
        if !attr.attr_type.matches(value) {
            return Err(CoreError::ValidationError(format!(
                "attribute '{name}' must be of type {:?}",
                attr.attr_type
            )));
        }
    }

    Ok(())
}

/// Names of `force_new` attributes whose value differs between `old` and `new`.
///
/// A non-empty result means the change has to be applied by delete + create.
pub fn requires_replacement(
    schema: &[AttributeSchema],
    old: &ResourceData,
    new: &ResourceData,
) -> Vec<&'static str> {
    schema
        .iter()
        .filter(|a| a.force_new && old.get(a.name) != new.get(a.name))
        .map(|a| a.name)
        .collect()
}
