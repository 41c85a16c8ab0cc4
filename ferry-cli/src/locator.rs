//! Resource location
//!
//! Narrows the account's resource space down to a source/target pipeline
//! pair: resource group, then toolchain, then two distinct pipeline tools.

use anyhow::{Context, Result};
use colored::*;
use ferry_client::CatalogApi;
use ferry_core::domain::resource::ResourceGroup;
use ferry_core::domain::toolchain::{Tool, Toolchain};

use crate::prompt::{Column, LineInput, choose};

const RESOURCE_GROUP_COLUMNS: &[Column<ResourceGroup>] = &[
    Column {
        header: "Name",
        value: |group: &ResourceGroup| group.name.clone(),
    },
    Column {
        header: "ID",
        value: |group: &ResourceGroup| group.id.clone(),
    },
];

const TOOLCHAIN_COLUMNS: &[Column<Toolchain>] = &[
    Column {
        header: "Name",
        value: |toolchain: &Toolchain| toolchain.name.clone(),
    },
    Column {
        header: "ID",
        value: |toolchain: &Toolchain| toolchain.id.clone(),
    },
    Column {
        header: "Location",
        value: |toolchain: &Toolchain| toolchain.location.clone(),
    },
];

const PIPELINE_COLUMNS: &[Column<Tool>] = &[
    Column {
        header: "Name",
        value: |tool: &Tool| tool.display_name(),
    },
    Column {
        header: "ID",
        value: |tool: &Tool| tool.id.clone(),
    },
    Column {
        header: "Type",
        value: |tool: &Tool| tool.tool_type_id.clone(),
    },
];

/// Resolve the account the connected credential belongs to.
pub async fn resolve_account(api: &impl CatalogApi) -> Result<String> {
    api.account_id()
        .await
        .context("Failed to resolve the account for this credential")
}

/// List the account's resource groups and let the operator pick one.
pub async fn select_resource_group(
    api: &impl CatalogApi,
    account_id: &str,
    input: &mut dyn LineInput,
) -> Result<ResourceGroup> {
    let groups = api
        .list_resource_groups(account_id)
        .await
        .context("Failed to list resource groups")?;

    choose(&groups, RESOURCE_GROUP_COLUMNS, "Choose a resource group:", input)
}

/// List the resource group's toolchains and let the operator pick one.
pub async fn select_toolchain(
    api: &impl CatalogApi,
    resource_group_id: &str,
    input: &mut dyn LineInput,
) -> Result<Toolchain> {
    let toolchains = api
        .list_toolchains(resource_group_id)
        .await
        .context("Failed to list toolchains")?;

    choose(&toolchains, TOOLCHAIN_COLUMNS, "Choose a toolchain:", input)
}

/// Tools in the toolchain that are delivery pipelines.
///
/// An empty result is a valid outcome; the selection step that follows
/// decides whether it is fatal.
pub async fn pipeline_tools(api: &impl CatalogApi, toolchain_id: &str) -> Result<Vec<Tool>> {
    let tools = api
        .list_tools(toolchain_id)
        .await
        .context("Failed to list toolchain tools")?;

    Ok(tools.into_iter().filter(|tool| tool.is_pipeline()).collect())
}

/// Pick the source and target pipelines from the same candidate set.
///
/// The target prompt repeats, table and all, until the operator picks a
/// pipeline whose id differs from the source's.
pub fn select_distinct_pair(pipelines: &[Tool], input: &mut dyn LineInput) -> Result<(Tool, Tool)> {
    let source = choose(
        pipelines,
        PIPELINE_COLUMNS,
        "Choose the source delivery pipeline (copy from):",
        input,
    )?;

    loop {
        let target = choose(
            pipelines,
            PIPELINE_COLUMNS,
            "Choose the target delivery pipeline (copy to):",
            input,
        )?;

        if target.id == source.id {
            eprintln!(
                "{}",
                "The target pipeline must be different from the source pipeline.".yellow()
            );
            continue;
        }

        return Ok((source, target));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedInput;
    use async_trait::async_trait;
    use ferry_core::domain::toolchain::ToolParameters;

    struct FakeCatalog {
        groups: Vec<ResourceGroup>,
        tools: Vec<Tool>,
    }

    #[async_trait]
    impl CatalogApi for FakeCatalog {
        async fn account_id(&self) -> ferry_client::Result<String> {
            Ok("acct-1".to_string())
        }

        async fn list_resource_groups(
            &self,
            _account_id: &str,
        ) -> ferry_client::Result<Vec<ResourceGroup>> {
            Ok(self.groups.clone())
        }

        async fn list_toolchains(
            &self,
            _resource_group_id: &str,
        ) -> ferry_client::Result<Vec<Toolchain>> {
            Ok(vec![])
        }

        async fn list_tools(&self, _toolchain_id: &str) -> ferry_client::Result<Vec<Tool>> {
            Ok(self.tools.clone())
        }
    }

    fn pipeline(id: &str, name: &str) -> Tool {
        Tool {
            id: id.to_string(),
            tool_type_id: "pipeline".to_string(),
            parameters: Some(ToolParameters {
                name: Some(name.to_string()),
            }),
        }
    }

    #[tokio::test]
    async fn test_select_resource_group_uses_operator_index() {
        let api = FakeCatalog {
            groups: vec![
                ResourceGroup {
                    id: "rg-1".to_string(),
                    name: "default".to_string(),
                },
                ResourceGroup {
                    id: "rg-2".to_string(),
                    name: "staging".to_string(),
                },
            ],
            tools: vec![],
        };
        let mut input = ScriptedInput::new(["2"]);

        let group = select_resource_group(&api, "acct-1", &mut input).await.unwrap();
        assert_eq!(group.id, "rg-2");
    }

    #[tokio::test]
    async fn test_pipeline_tools_filters_non_pipelines() {
        let api = FakeCatalog {
            groups: vec![],
            tools: vec![
                pipeline("tool-1", "build"),
                Tool {
                    id: "tool-2".to_string(),
                    tool_type_id: "slack".to_string(),
                    parameters: None,
                },
            ],
        };

        let pipelines = pipeline_tools(&api, "tc-1").await.unwrap();
        assert_eq!(pipelines.len(), 1);
        assert_eq!(pipelines[0].id, "tool-1");
    }

    #[test]
    fn test_distinct_pair_rejects_same_pipeline_until_it_differs() {
        let pipelines = vec![
            pipeline("p-1", "build"),
            pipeline("p-2", "deploy"),
            pipeline("p-3", "nightly"),
        ];

        // Picks 1 as the source, then 1 again (rejected), then 2.
        let mut input = ScriptedInput::new(["1", "1", "2"]);
        let (source, target) = select_distinct_pair(&pipelines, &mut input).unwrap();

        assert_eq!(source.id, "p-1");
        assert_eq!(target.id, "p-2");
    }

    #[test]
    fn test_distinct_pair_fails_with_no_pipelines() {
        let mut input = ScriptedInput::new(["1"]);
        assert!(select_distinct_pair(&[], &mut input).is_err());
    }
}
