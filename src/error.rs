use std::path::PathBuf;
use thiserror::Error;

/// Failures the reconcile passes distinguish beyond plain I/O. Every one of
/// these aborts the whole run; skips are ordinary outcomes, not errors.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("path {} is not under root {}", path.display(), root.display())]
    PathOutsideRoot { path: PathBuf, root: PathBuf },
    #[error("sidecar {} is not valid YAML: {source}", path.display())]
    SidecarParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("metadata record {} is not valid JSON: {source}", path.display())]
    RecordParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
