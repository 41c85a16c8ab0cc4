//! Toolchain domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named collection of tool integrations scoped to a resource group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toolchain {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub resource_group_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A tool integration instance inside a toolchain
///
/// A delivery pipeline is a tool whose `tool_type_id` is `"pipeline"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub tool_type_id: String,
    #[serde(default)]
    pub parameters: Option<ToolParameters>,
}

/// Tool parameters; `name` carries the human-facing pipeline name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolParameters {
    #[serde(default)]
    pub name: Option<String>,
}

impl Tool {
    /// Human-facing name, empty when the tool carries no name parameter.
    pub fn display_name(&self) -> String {
        self.parameters
            .as_ref()
            .and_then(|p| p.name.clone())
            .unwrap_or_default()
    }

    pub fn is_pipeline(&self) -> bool {
        self.tool_type_id == "pipeline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_empty() {
        let tool = Tool {
            id: "tool-1".to_string(),
            tool_type_id: "pipeline".to_string(),
            parameters: None,
        };

        assert_eq!(tool.display_name(), "");
    }

    #[test]
    fn test_is_pipeline() {
        let tool = Tool {
            id: "tool-1".to_string(),
            tool_type_id: "slack".to_string(),
            parameters: None,
        };

        assert!(!tool.is_pipeline());
    }
}
