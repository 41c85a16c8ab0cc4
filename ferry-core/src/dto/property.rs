//! Property creation requests

use serde::{Deserialize, Serialize};

use crate::domain::pipeline::PropertyType;

/// Request to create an environment property on a pipeline
///
/// `enum` and `value` are serialized only when present; the service
/// rejects an `enum` key on anything but single_select properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_select_serializes_enum() {
        let req = CreateProperty {
            name: "STAGE".to_string(),
            property_type: PropertyType::SingleSelect,
            value: Some("dev".to_string()),
            enum_values: Some(vec!["dev".to_string(), "prod".to_string()]),
        };

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "name": "STAGE",
                "type": "single_select",
                "value": "dev",
                "enum": ["dev", "prod"],
            })
        );
    }

    #[test]
    fn test_enum_key_is_absent_when_unset() {
        let req = CreateProperty {
            name: "ENV".to_string(),
            property_type: PropertyType::Text,
            value: Some("prod".to_string()),
            enum_values: None,
        };
        let body = serde_json::to_value(&req).unwrap();

        assert!(body.get("enum").is_none());
        assert_eq!(body, json!({"name": "ENV", "type": "text", "value": "prod"}));
    }

    #[test]
    fn test_value_key_is_absent_when_unset() {
        let req = CreateProperty {
            name: "API_TOKEN".to_string(),
            property_type: PropertyType::Secure,
            value: None,
            enum_values: None,
        };
        let body = serde_json::to_value(&req).unwrap();

        assert!(body.get("value").is_none());
    }
}
