//! Registry trait for fetching upstream tag metadata

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::UpstreamTag;

/// Trait for fetching the tag listing of an image repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the tags of a repository from the registry
    ///
    /// # Arguments
    /// * `repository` - The image repository (e.g., "bitnami/postgresql")
    ///
    /// # Returns
    /// * `Ok(Vec<UpstreamTag>)` - Tags in the order the registry listed them
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_tags(&self, repository: &str) -> Result<Vec<UpstreamTag>, RegistryError>;
}
