//! Delivery-pipeline configuration endpoints
//!
//! [`PipelineConfigApi`] covers reading a pipeline's trigger definitions
//! and environment properties and re-creating them on another pipeline.
//! Creates are write-once: the service assigns fresh ids and this client
//! never updates or deletes existing records.

use async_trait::async_trait;
use ferry_core::domain::pipeline::{PipelineDefinition, PipelineProperty};
use ferry_core::dto::definition::CreateDefinition;
use ferry_core::dto::list::{DefinitionList, PropertyList};
use ferry_core::dto::property::CreateProperty;
use tracing::debug;

use crate::CdClient;
use crate::error::Result;

/// Read/write operations on a pipeline's configuration
#[async_trait]
pub trait PipelineConfigApi: Send + Sync {
    /// List a pipeline's trigger source definitions
    async fn list_definitions(&self, pipeline_id: &str) -> Result<Vec<PipelineDefinition>>;

    /// Create a definition on a pipeline
    ///
    /// The returned record carries the id the service assigned.
    async fn create_definition(
        &self,
        pipeline_id: &str,
        req: CreateDefinition,
    ) -> Result<PipelineDefinition>;

    /// List a pipeline's environment properties
    async fn list_properties(&self, pipeline_id: &str) -> Result<Vec<PipelineProperty>>;

    /// Create an environment property on a pipeline
    async fn create_property(
        &self,
        pipeline_id: &str,
        req: CreateProperty,
    ) -> Result<PipelineProperty>;
}

#[async_trait]
impl PipelineConfigApi for CdClient {
    async fn list_definitions(&self, pipeline_id: &str) -> Result<Vec<PipelineDefinition>> {
        let url = format!(
            "{}/tekton_pipelines/{}/definitions",
            self.endpoints.pipeline_url, pipeline_id
        );
        debug!("GET {}", url);

        let response = self.client.get(&url).bearer_auth(&self.token).send().await?;

        let list: DefinitionList = self.handle_response(response).await?;
        Ok(list.definitions)
    }

    async fn create_definition(
        &self,
        pipeline_id: &str,
        req: CreateDefinition,
    ) -> Result<PipelineDefinition> {
        let url = format!(
            "{}/tekton_pipelines/{}/definitions",
            self.endpoints.pipeline_url, pipeline_id
        );
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn list_properties(&self, pipeline_id: &str) -> Result<Vec<PipelineProperty>> {
        let url = format!(
            "{}/tekton_pipelines/{}/properties",
            self.endpoints.pipeline_url, pipeline_id
        );
        debug!("GET {}", url);

        let response = self.client.get(&url).bearer_auth(&self.token).send().await?;

        let list: PropertyList = self.handle_response(response).await?;
        Ok(list.properties)
    }

    async fn create_property(
        &self,
        pipeline_id: &str,
        req: CreateProperty,
    ) -> Result<PipelineProperty> {
        let url = format!(
            "{}/tekton_pipelines/{}/properties",
            self.endpoints.pipeline_url, pipeline_id
        );
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&req)
            .send()
            .await?;

        self.handle_response(response).await
    }
}
