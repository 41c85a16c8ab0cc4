//! Replication passes
//!
//! Copies trigger definitions and environment properties from the source
//! pipeline to the target, one create call per record. A failed record is
//! reported and the batch moves on; every create call is followed by a
//! fixed pause to stay under the remote API's rate limit.

use std::time::Duration;

use anyhow::{Context, Result};
use colored::*;
use ferry_client::PipelineConfigApi;
use ferry_core::domain::pipeline::{PipelineProperty, PropertyType};
use ferry_core::dto::definition::CreateDefinition;
use ferry_core::dto::property::CreateProperty;
use tracing::debug;

/// Outcome of one copied record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplicationOutcome {
    Copied,
    Failed(String),
}

/// Per-record report entry, keyed by definition path or property name
#[derive(Debug, Clone)]
pub struct ReplicationResult {
    pub item: String,
    pub outcome: ReplicationOutcome,
}

impl ReplicationResult {
    pub fn is_copied(&self) -> bool {
        self.outcome == ReplicationOutcome::Copied
    }
}

/// Copy every trigger source definition from `source_id` to `target_id`.
///
/// Failing to read the source list is fatal; a failed create only marks
/// that record and the batch continues.
pub async fn copy_definitions(
    api: &impl PipelineConfigApi,
    source_id: &str,
    target_id: &str,
    throttle: Duration,
) -> Result<Vec<ReplicationResult>> {
    let definitions = api
        .list_definitions(source_id)
        .await
        .context("Failed to list source pipeline definitions")?;

    debug!("Copying {} definition(s)", definitions.len());
    let mut results = Vec::with_capacity(definitions.len());

    for definition in &definitions {
        let path = definition.source.properties.path.clone();
        let req = CreateDefinition::from(definition);

        let outcome = match api.create_definition(target_id, req).await {
            Ok(created) if !created.id.is_empty() => ReplicationOutcome::Copied,
            Ok(_) => ReplicationOutcome::Failed("no id in create response".to_string()),
            Err(e) => ReplicationOutcome::Failed(e.to_string()),
        };

        report_item(&path, &outcome);
        results.push(ReplicationResult { item: path, outcome });

        tokio::time::sleep(throttle).await;
    }

    Ok(results)
}

/// Copy every environment property from `source_id` to `target_id`.
///
/// Same contract as [`copy_definitions`], keyed by property name.
pub async fn copy_properties(
    api: &impl PipelineConfigApi,
    source_id: &str,
    target_id: &str,
    throttle: Duration,
) -> Result<Vec<ReplicationResult>> {
    let properties = api
        .list_properties(source_id)
        .await
        .context("Failed to list source pipeline properties")?;

    debug!("Copying {} property(ies)", properties.len());
    let mut results = Vec::with_capacity(properties.len());

    for property in &properties {
        let name = property.name.clone();

        let req = match property_request(property) {
            Ok(req) => req,
            Err(reason) => {
                // Nothing was sent, so no throttle pause either.
                let outcome = ReplicationOutcome::Failed(reason);
                report_item(&name, &outcome);
                results.push(ReplicationResult { item: name, outcome });
                continue;
            }
        };

        let outcome = match api.create_property(target_id, req).await {
            Ok(created) if !created.name.is_empty() => ReplicationOutcome::Copied,
            Ok(_) => ReplicationOutcome::Failed("no name in create response".to_string()),
            Err(e) => ReplicationOutcome::Failed(e.to_string()),
        };

        report_item(&name, &outcome);
        results.push(ReplicationResult { item: name, outcome });

        tokio::time::sleep(throttle).await;
    }

    Ok(results)
}

/// Build the create request for one property.
///
/// `enum` travels only for single_select properties; the service rejects
/// it elsewhere. A single_select source without its enum list cannot be
/// re-created faithfully and fails the record.
fn property_request(property: &PipelineProperty) -> std::result::Result<CreateProperty, String> {
    let enum_values = match property.property_type {
        PropertyType::SingleSelect => match &property.enum_values {
            Some(values) => Some(values.clone()),
            None => return Err("single_select property has no enum values".to_string()),
        },
        _ => None,
    };

    Ok(CreateProperty {
        name: property.name.clone(),
        property_type: property.property_type,
        value: property.value.clone(),
        enum_values,
    })
}

fn report_item(item: &str, outcome: &ReplicationOutcome) {
    match outcome {
        ReplicationOutcome::Copied => println!("  {} {} copied", "✓".green(), item),
        ReplicationOutcome::Failed(reason) => {
            println!("  {} {} failed: {}", "✗".red(), item, reason)
        }
    }
}
