use crate::error::ReconcileError;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Where a file sits relative to a root: its directory plus its basename
/// with the extension stripped. Used both as the index value and to compute
/// move destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub dir: PathBuf,
    pub base: String,
}

/// Splits paths under one fixed root into relative [`Location`]s.
pub struct PathSplitter {
    root: PathBuf,
}

impl PathSplitter {
    pub fn new(root: &Path) -> Result<Self> {
        let root = fs::canonicalize(root)
            .with_context(|| format!("failed to resolve root {}", root.display()))?;
        Ok(Self { root })
    }

    /// Fails with [`ReconcileError::PathOutsideRoot`] when the resolved
    /// `path` does not sit under the resolved root.
    pub fn split(&self, path: &Path) -> Result<Location> {
        let abs = fs::canonicalize(path)
            .with_context(|| format!("failed to resolve {}", path.display()))?;
        let rel = abs
            .strip_prefix(&self.root)
            .map_err(|_| ReconcileError::PathOutsideRoot {
                path: abs.clone(),
                root: self.root.clone(),
            })?;
        let name = rel
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("{} has no usable file name", rel.display()))?;
        let (base, _) = split_ext(name);
        Ok(Location {
            dir: rel.parent().map(Path::to_path_buf).unwrap_or_default(),
            base: base.to_string(),
        })
    }
}

/// Split a file name at its last dot. The extension keeps the dot and is
/// empty when the name carries none, so stripping is idempotent: a base
/// with no remaining dot splits into itself plus an empty extension.
pub fn split_ext(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}
