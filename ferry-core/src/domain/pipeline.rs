//! Pipeline configuration domain types

use serde::{Deserialize, Serialize};

/// A git-backed trigger source definition attached to a pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineDefinition {
    pub id: String,
    pub source: DefinitionSource,
}

/// Where a definition's trigger files live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionSource {
    #[serde(rename = "type")]
    pub source_type: String,
    pub properties: SourceProperties,
}

/// Repository coordinates of a definition source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceProperties {
    pub url: String,
    #[serde(default)]
    pub branch: Option<String>,
    pub path: String,
}

/// An environment property exposed to pipeline runs
///
/// `value` may be absent on the wire (secure properties are listed without
/// one) and `enum` is present only for single_select properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(rename = "enum", default)]
    pub enum_values: Option<Vec<String>>,
}

/// Property kinds the delivery-pipeline service supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Appconfig,
    File,
    Integration,
    Secure,
    SingleSelect,
    Text,
}
