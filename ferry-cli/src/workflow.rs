//! Workflow orchestration
//!
//! Drives the whole run: resolve the account, narrow down to a distinct
//! source/target pipeline pair, then copy definitions and properties.
//! Strictly forward, no resume; a fatal error at any step unwinds the run,
//! and item-level failures surface only in the returned summary.

use std::time::Duration;

use anyhow::Result;
use colored::*;
use ferry_client::{CatalogApi, PipelineConfigApi};
use tracing::info;

use crate::locator;
use crate::prompt::LineInput;
use crate::replicate::{self, ReplicationResult};

/// Per-record outcomes of a completed run
#[derive(Debug)]
pub struct RunSummary {
    pub definitions: Vec<ReplicationResult>,
    pub properties: Vec<ReplicationResult>,
}

impl RunSummary {
    /// Records that need manual follow-up on the target pipeline.
    pub fn failures(&self) -> impl Iterator<Item = &ReplicationResult> {
        self.definitions
            .iter()
            .chain(self.properties.iter())
            .filter(|result| !result.is_copied())
    }
}

/// Run the interactive copy workflow end to end.
pub async fn run<A>(api: &A, input: &mut dyn LineInput, throttle: Duration) -> Result<RunSummary>
where
    A: CatalogApi + PipelineConfigApi,
{
    let account_id = locator::resolve_account(api).await?;
    info!("Resolved account {}", account_id);

    let group = locator::select_resource_group(api, &account_id, input).await?;
    info!("Using resource group {} ({})", group.name, group.id);

    let toolchain = locator::select_toolchain(api, &group.id, input).await?;
    info!("Using toolchain {} ({})", toolchain.name, toolchain.id);

    let pipelines = locator::pipeline_tools(api, &toolchain.id).await?;
    let (source, target) = locator::select_distinct_pair(&pipelines, input)?;
    info!("Copying pipeline {} -> {}", source.id, target.id);

    println!();
    println!("{}", "Copying definitions...".bold());
    let definitions = replicate::copy_definitions(api, &source.id, &target.id, throttle).await?;

    println!();
    println!("{}", "Copying environment properties...".bold());
    let properties = replicate::copy_properties(api, &source.id, &target.id, throttle).await?;

    Ok(RunSummary {
        definitions,
        properties,
    })
}
