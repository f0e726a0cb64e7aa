//! JSON persistence of the manifest

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::manifest::error::StoreError;
use crate::manifest::types::Manifest;

const INDENT: &[u8] = b"    ";

/// Load the persisted manifest
///
/// A missing file is the first run and yields `Ok(None)`.
pub fn load(path: &Path) -> Result<Option<Manifest>, StoreError> {
    if !path.is_file() {
        info!("No manifest at {}, starting fresh", path.display());
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let manifest = serde_json::from_str(&content).map_err(|source| StoreError::Invalid {
        path: path.display().to_string(),
        source,
    })?;

    debug!("Loaded manifest from {}", path.display());
    Ok(Some(manifest))
}

/// Encode a manifest as 4-space indented JSON
pub fn encode(manifest: &Manifest) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    manifest
        .serialize(&mut serializer)
        .map_err(StoreError::Encode)?;

    Ok(buf)
}

/// Save the manifest
///
/// The JSON is written to a temporary file next to `path` and renamed over
/// it, so a failed write leaves the previous manifest intact.
pub fn save(path: &Path, manifest: &Manifest) -> Result<(), StoreError> {
    let json = encode(manifest)?;
    let io_error = |source| StoreError::Io {
        path: path.display().to_string(),
        source,
    };

    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = NamedTempFile::new_in(directory).map_err(io_error)?;
    file.write_all(&json).map_err(io_error)?;
    file.as_file().sync_all().map_err(io_error)?;
    file.persist(path).map_err(|e| io_error(e.error))?;

    info!("Saved manifest to {}", path.display());
    Ok(())
}
