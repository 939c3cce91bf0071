//! Form configuration blob
//!
//! The form schema is owned by a remote configuration service and treated as
//! an opaque JSON document on this side; this module only gives it a typed
//! shape. Callers fetch the blob (with a locally cached fallback), parse it
//! here, and hand the field list to the form engine.

use crate::error::Result;
use crate::field::FieldDefinition;
use serde::{Deserialize, Serialize};

/// The form schema as delivered by the configuration service
///
/// Wire shape: `{ "fields": [ ... ] }`. Unknown top-level keys are ignored
/// so the configuration service can evolve without breaking older clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormConfiguration {
    /// All form fields (system and custom), in no particular order
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl FormConfiguration {
    /// Create a configuration from a field list
    pub fn new(fields: Vec<FieldDefinition>) -> Self {
        FormConfiguration { fields }
    }

    /// Parse a configuration blob
    ///
    /// Returns `Error::Config` on malformed JSON; callers fall back to their
    /// cached copy in that case.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize back to the wire shape (used by the local cache)
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldType;

    #[test]
    fn test_from_json() {
        let json = r#"{
            "fields": [
                { "id": "system-title", "type": "text", "label": "Title", "order": 1, "required": true },
                { "id": "system-description", "type": "textarea", "label": "Description", "order": 2 }
            ]
        }"#;

        let config = FormConfiguration::from_json(json).unwrap();
        assert_eq!(config.fields.len(), 2);
        assert_eq!(config.fields[0].id, "system-title");
        assert_eq!(config.fields[1].field_type, FieldType::Textarea);
    }

    #[test]
    fn test_from_json_ignores_unknown_keys() {
        let config =
            FormConfiguration::from_json(r#"{"fields": [], "version": 4, "name": "default"}"#)
                .unwrap();
        assert!(config.fields.is_empty());
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(FormConfiguration::from_json("{not json").is_err());
        assert!(FormConfiguration::from_json(r#"{"fields": [{"id": "a"}]}"#).is_err());
    }

    #[test]
    fn test_round_trip() {
        let config = FormConfiguration::new(vec![FieldDefinition::new(
            "system-category",
            FieldType::Category,
        )
        .with_order(3)
        .with_options(vec!["General".into(), "Hardware".into()])]);

        let json = config.to_json().unwrap();
        let back = FormConfiguration::from_json(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_missing_fields_key_defaults_empty() {
        let config = FormConfiguration::from_json("{}").unwrap();
        assert!(config.fields.is_empty());
    }
}
