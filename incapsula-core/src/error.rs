//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use incapsula_provider::{CredentialValidationError, ProviderError};

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Resource data failed schema validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A required attribute is absent from the resource data
    #[error("Missing required attribute: {0}")]
    MissingAttribute(String),

    /// The resource identifier is not a numeric site id
    #[error("Invalid site id: '{0}'")]
    InvalidId(String),

    /// Credential validation errors
    #[error("{0}")]
    CredentialValidation(CredentialValidationError),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// API error, passed through unchanged
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationError(_)
            | Self::MissingAttribute(_)
            | Self::InvalidId(_)
            | Self::CredentialValidation(_) => true,
            Self::Provider(e) => e.is_expected(),
            Self::SerializationError(_) => false,
        }
    }

    /// The underlying API error, if this failure came from the remote API.
    pub fn as_provider_error(&self) -> Option<&ProviderError> {
        match self {
            Self::Provider(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CredentialValidationError> for CoreError {
    fn from(e: CredentialValidationError) -> Self {
        Self::CredentialValidation(e)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_verbatim() {
        let inner = ProviderError::SiteNotFound {
            site_id: "9".to_string(),
            raw_message: Some("Unknown/unauthorized site_id".to_string()),
        };
        let expected = inner.to_string();
        let e = CoreError::from(inner);
        assert_eq!(e.to_string(), expected);
        assert!(e.is_expected());
        assert!(matches!(
            e.as_provider_error(),
            Some(ProviderError::SiteNotFound { .. })
        ));
    }

    #[test]
    fn network_errors_are_unexpected() {
        let e = CoreError::from(ProviderError::NetworkError {
            detail: "reset".to_string(),
        });
        assert!(!e.is_expected());
    }

    #[test]
    fn invalid_id_display() {
        assert_eq!(
            CoreError::InvalidId("abc".to_string()).to_string(),
            "Invalid site id: 'abc'"
        );
        assert!(CoreError::InvalidId(String::new()).as_provider_error().is_none());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_string(&CoreError::MissingAttribute("domain".to_string()))
            .unwrap();
        assert_eq!(json, r#"{"code":"MissingAttribute","details":"domain"}"#);
    }
}
