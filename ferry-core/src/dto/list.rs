//! Wire envelopes for list responses
//!
//! Every list endpoint wraps its collection in a keyed object; these
//! envelopes unwrap to the domain records.

use serde::{Deserialize, Serialize};

use crate::domain::pipeline::{PipelineDefinition, PipelineProperty};
use crate::domain::resource::ResourceGroup;
use crate::domain::toolchain::{Tool, Toolchain};

/// Resource group listing envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceGroupList {
    pub resources: Vec<ResourceGroup>,
}

/// Toolchain listing envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolchainList {
    pub toolchains: Vec<Toolchain>,
}

/// Tool listing envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolList {
    pub tools: Vec<Tool>,
}

/// Definition listing envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionList {
    pub definitions: Vec<PipelineDefinition>,
}

/// Property listing envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyList {
    pub properties: Vec<PipelineProperty>,
}
