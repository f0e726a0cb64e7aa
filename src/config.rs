use serde::Deserialize;
use std::path::Path;

use thiserror::Error;

/// Image the derived alias tags are published under
pub const DEFAULT_IMAGE_NAME: &str = "betaboon/bitnami-postgresql-wal2json";

/// Default base URL for the Docker Hub API
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.hub.docker.com";

/// Upstream PostgreSQL image repository
pub const DEFAULT_UPSTREAM_REPOSITORY: &str = "bitnami/postgresql";

/// Number of tags requested from the registry (a single page)
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Pinned wal2json release
pub const DEFAULT_WAL2JSON_VERSION: &str = "2.5";

/// Upstream git tag of the pinned wal2json release
pub const DEFAULT_WAL2JSON_TAG: &str = "wal2json_2_5";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Invalid {
        path: String,
        source: serde_json::Error,
    },
}

/// Updater configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdaterConfig {
    pub image_name: String,
    pub registry: RegistryConfig,
    pub wal2json: Wal2JsonConfig,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            image_name: DEFAULT_IMAGE_NAME.to_string(),
            registry: RegistryConfig::default(),
            wal2json: Wal2JsonConfig::default(),
        }
    }
}

/// Upstream registry configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryConfig {
    pub base_url: String,
    pub repository: String,
    pub page_size: u32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REGISTRY_URL.to_string(),
            repository: DEFAULT_UPSTREAM_REPOSITORY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Pinned wal2json release tracked by the manifest
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Wal2JsonConfig {
    pub version: String,
    pub upstream_tag: String,
}

impl Default for Wal2JsonConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_WAL2JSON_VERSION.to_string(),
            upstream_tag: DEFAULT_WAL2JSON_TAG.to_string(),
        }
    }
}

impl UpdaterConfig {
    /// Load configuration from a JSON file, defaulting any missing field
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Invalid {
            path: path.display().to_string(),
            source,
        })
    }
}
