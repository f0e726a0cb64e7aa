//! Docker Hub tag listing API implementation

use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::UpstreamTag;
use serde::Deserialize;
use tracing::{debug, warn};

/// Response from the Docker Hub tags endpoint
#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    results: Vec<UpstreamTag>,
}

/// Registry implementation for the Docker Hub v2 repositories API
///
/// Only the first page is requested.
pub struct DockerHubRegistry {
    client: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl DockerHubRegistry {
    /// Creates a new DockerHubRegistry with a custom base URL
    pub fn new(base_url: &str, page_size: u32) -> Result<Self, RegistryError> {
        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("wal2json-updater/", env!("CARGO_PKG_VERSION")))
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size,
        })
    }
}

#[async_trait::async_trait]
impl Registry for DockerHubRegistry {
    async fn fetch_tags(&self, repository: &str) -> Result<Vec<UpstreamTag>, RegistryError> {
        let url = format!(
            "{}/v2/repositories/{}/tags/?page_size={}",
            self.base_url, repository, self.page_size
        );
        debug!("Fetching tags from {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(repository.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(RegistryError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("Docker Hub returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body: TagsResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse Docker Hub tags response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        debug!("Fetched {} tags for {}", body.results.len(), repository);

        Ok(body.results)
    }
}
