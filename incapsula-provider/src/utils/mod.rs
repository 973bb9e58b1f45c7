//! Utility modules.

/// Unix timestamp helpers for API date fields.
pub mod datetime;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;

/// Lenient deserialization of the API `res` code.
pub(crate) mod res_code;
