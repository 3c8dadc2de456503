//! Identification of the audited organization.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Free-form client details.
///
/// Only `sector` and `org_type` influence computation, as benchmark keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub org_type: String,
    pub size: String,
    pub sector: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl ClientInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_type(mut self, org_type: impl Into<String>) -> Self {
        self.org_type = org_type.into();
        self
    }

    #[must_use]
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = sector.into();
        self
    }

    /// Whether the record identifies a client at all.
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_name() {
        let client = ClientInfo::named("Mairie").with_type("Ministère");
        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["type"], "Ministère");
        assert!(json.get("logo").is_none());
    }

    #[test]
    fn test_partial_record_deserializes() {
        let client: ClientInfo = serde_json::from_str(r#"{"name":"Agence"}"#).unwrap();
        assert_eq!(client.name, "Agence");
        assert!(client.sector.is_empty());
        assert!(client.has_name());
        assert!(!ClientInfo::named("  ").has_name());
    }
}
