//! State of a single resource instance

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single attribute value.
///
/// Serialized untagged, so persisted state reads as plain JSON
/// (`"x"`, `42`, `["a", "b"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Int(i64),
    String(String),
    List(Vec<String>),
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

/// Identifier plus attribute bag of one resource instance.
///
/// An empty identifier means the resource does not exist remotely
/// (never created, or removed by delete).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceData {
    #[serde(default)]
    id: String,
    #[serde(default)]
    attributes: BTreeMap<String, AttributeValue>,
}

impl ResourceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set`.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<AttributeValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Whether the resource is tracked as existing remotely.
    pub fn exists(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// String value of `name`; empty when unset or not a string.
    pub fn get_str(&self, name: &str) -> &str {
        match self.attributes.get(name) {
            Some(AttributeValue::String(s)) => s,
            _ => "",
        }
    }

    /// String value of `name`, `None` when unset or empty.
    pub fn get_opt_str(&self, name: &str) -> Option<String> {
        Some(self.get_str(name))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.attributes.get(name) {
            Some(AttributeValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// List value of `name`; empty when unset or not a list.
    pub fn get_list(&self, name: &str) -> &[String] {
        match self.attributes.get(name) {
            Some(AttributeValue::List(v)) => v,
            _ => &[],
        }
    }

    pub fn set(&mut self, name: &str, value: impl Into<AttributeValue>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        self.attributes.remove(name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize to the JSON form a host persists between runs.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_resource_does_not_exist() {
        let data = ResourceData::new();
        assert!(!data.exists());
        assert_eq!(data.id(), "");
    }

    #[test]
    fn set_id_and_clear() {
        let mut data = ResourceData::new();
        data.set_id("123");
        assert!(data.exists());
        data.set_id("");
        assert!(!data.exists());
    }

    #[test]
    fn typed_getters() {
        let data = ResourceData::new()
            .with("domain", "www.example.com")
            .with("site_creation_date", 1_372_573_200_000_i64)
            .with("dns_a_record_value", vec!["192.0.2.1".to_string()]);

        assert_eq!(data.get_str("domain"), "www.example.com");
        assert_eq!(data.get_int("site_creation_date"), Some(1_372_573_200_000));
        assert_eq!(data.get_list("dns_a_record_value"), ["192.0.2.1"]);
    }

    #[test]
    fn missing_or_mistyped_values_read_as_zero() {
        let data = ResourceData::new().with("domain", 5_i64);
        assert_eq!(data.get_str("domain"), "");
        assert_eq!(data.get_str("ref_id"), "");
        assert!(data.get_int("ref_id").is_none());
        assert!(data.get_list("dns_a_record_value").is_empty());
    }

    #[test]
    fn empty_string_is_not_an_option() {
        let data = ResourceData::new().with("ref_id", "").with("site_ip", "1.2.3.4");
        assert_eq!(data.get_opt_str("ref_id"), None);
        assert_eq!(data.get_opt_str("site_ip").as_deref(), Some("1.2.3.4"));
    }

    #[test]
    fn json_state_is_plain() {
        let mut data = ResourceData::new()
            .with("domain", "example.com")
            .with("site_creation_date", 10_i64)
            .with("dns_a_record_value", vec!["a".to_string(), "b".to_string()]);
        data.set_id("7");

        let json = data.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"id":"7","attributes":{"dns_a_record_value":["a","b"],"domain":"example.com","site_creation_date":10}}"#
        );
        assert_eq!(ResourceData::from_json(&json).unwrap(), data);
    }
}
