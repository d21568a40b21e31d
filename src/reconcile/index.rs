use crate::error::ReconcileError;
use crate::reconcile::paths::{Location, PathSplitter};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Maps a sidecar's declared original name to where that sidecar sits
/// relative to the sidecar root.
pub type Index = BTreeMap<String, Location>;

/// Exact match, case-sensitive. `.yaml` sidecars are not a thing in the
/// indexed tree.
const SIDECAR_EXT: &str = "yml";

#[derive(Debug, Deserialize)]
struct SidecarDescriptor {
    /// Capture-time filename without extension. Absent field reads as
    /// empty, which means the entry is skipped rather than rejected.
    #[serde(rename = "OriginalName", default)]
    original_name: String,
}

/// Walk `sidecar_root` and build the original-name lookup. The walk is
/// lexical by file name, so a duplicated `OriginalName` resolves to the
/// last descriptor in path order on every platform.
///
/// Any read or decode failure aborts the whole build; there is no partial
/// index to fall back on.
pub fn build_index(sidecar_root: &Path) -> Result<Index> {
    let splitter = PathSplitter::new(sidecar_root)?;
    let mut index = Index::new();

    for entry in WalkDir::new(sidecar_root).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("failed to walk {}", sidecar_root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(SIDECAR_EXT) {
            continue;
        }
        log::debug!("sidecar found {}", path.display());

        let location = splitter.split(path)?;
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let descriptor: SidecarDescriptor =
            serde_yaml::from_str(&raw).map_err(|source| ReconcileError::SidecarParse {
                path: path.to_path_buf(),
                source,
            })?;

        if descriptor.original_name.is_empty() {
            log::trace!("{} has no OriginalName, skipping", path.display());
            continue;
        }
        log::trace!("index {:?} -> {:?}", descriptor.original_name, location);
        index.insert(descriptor.original_name, location);
    }

    Ok(index)
}
