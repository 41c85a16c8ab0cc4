//! Catalog queries: account identity, resource groups, toolchains, tools
//!
//! [`CatalogApi`] mirrors the listing operations the selection workflow
//! needs, so the interactive flow can run against an in-memory fake in
//! tests instead of live services.

use async_trait::async_trait;
use ferry_core::domain::resource::ResourceGroup;
use ferry_core::domain::toolchain::{Tool, Toolchain};
use ferry_core::dto::list::{ResourceGroupList, ToolList, ToolchainList};
use tracing::debug;

use crate::CdClient;
use crate::error::Result;

/// Read-side operations for locating a pipeline inside an account
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Resolve the account the connected credential belongs to
    async fn account_id(&self) -> Result<String>;

    /// List the resource groups visible in an account
    async fn list_resource_groups(&self, account_id: &str) -> Result<Vec<ResourceGroup>>;

    /// List the toolchains inside a resource group
    async fn list_toolchains(&self, resource_group_id: &str) -> Result<Vec<Toolchain>>;

    /// List the tool integrations inside a toolchain
    async fn list_tools(&self, toolchain_id: &str) -> Result<Vec<Tool>>;
}

#[async_trait]
impl CatalogApi for CdClient {
    async fn account_id(&self) -> Result<String> {
        let details = self.api_key_details().await?;
        Ok(details.account_id)
    }

    async fn list_resource_groups(&self, account_id: &str) -> Result<Vec<ResourceGroup>> {
        let url = format!(
            "{}/v2/resource_groups",
            self.endpoints.resource_controller_url
        );
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("account_id", account_id)])
            .send()
            .await?;

        let list: ResourceGroupList = self.handle_response(response).await?;
        Ok(list.resources)
    }

    async fn list_toolchains(&self, resource_group_id: &str) -> Result<Vec<Toolchain>> {
        let url = format!("{}/toolchains", self.endpoints.toolchain_url);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("resource_group_id", resource_group_id)])
            .send()
            .await?;

        let list: ToolchainList = self.handle_response(response).await?;
        Ok(list.toolchains)
    }

    async fn list_tools(&self, toolchain_id: &str) -> Result<Vec<Tool>> {
        let url = format!("{}/toolchains/{}/tools", self.endpoints.toolchain_url, toolchain_id);
        debug!("GET {}", url);

        let response = self.client.get(&url).bearer_auth(&self.token).send().await?;

        let list: ToolList = self.handle_response(response).await?;
        Ok(list.tools)
    }
}
