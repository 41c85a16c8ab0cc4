//! Definition creation requests

use serde::{Deserialize, Serialize};

use crate::domain::pipeline::PipelineDefinition;

/// Request to create a trigger source definition on a pipeline
///
/// Carries only the fields the service accepts on create; the source
/// record's id stays behind and the service assigns a fresh one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDefinition {
    pub source: CreateDefinitionSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDefinitionSource {
    #[serde(rename = "type")]
    pub source_type: String,
    pub properties: CreateSourceProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSourceProperties {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    pub path: String,
}

impl From<&PipelineDefinition> for CreateDefinition {
    fn from(definition: &PipelineDefinition) -> Self {
        let properties = &definition.source.properties;
        Self {
            source: CreateDefinitionSource {
                source_type: definition.source.source_type.clone(),
                properties: CreateSourceProperties {
                    url: properties.url.clone(),
                    branch: properties.branch.clone(),
                    path: properties.path.clone(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pipeline::{DefinitionSource, SourceProperties};
    use serde_json::json;

    fn definition(branch: Option<&str>) -> PipelineDefinition {
        PipelineDefinition {
            id: "def-1".to_string(),
            source: DefinitionSource {
                source_type: "git".to_string(),
                properties: SourceProperties {
                    url: "https://git.example/repo".to_string(),
                    branch: branch.map(String::from),
                    path: "pipeline.yaml".to_string(),
                },
            },
        }
    }

    #[test]
    fn test_request_carries_exactly_the_source_coordinates() {
        let req = CreateDefinition::from(&definition(Some("main")));
        let body = serde_json::to_value(&req).unwrap();

        // No id, no extra keys: the whole body is the source coordinates.
        assert_eq!(
            body,
            json!({
                "source": {
                    "type": "git",
                    "properties": {
                        "url": "https://git.example/repo",
                        "branch": "main",
                        "path": "pipeline.yaml",
                    }
                }
            })
        );
    }

    #[test]
    fn test_branch_is_omitted_when_absent() {
        let req = CreateDefinition::from(&definition(None));
        let body = serde_json::to_value(&req).unwrap();

        assert!(body["source"]["properties"].get("branch").is_none());
    }
}
