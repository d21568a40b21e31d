use crate::error::ReconcileError;
use crate::reconcile::index::Index;
use crate::reconcile::paths::split_ext;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use walkdir::WalkDir;

/// What happened to one metadata record. Skips are successful outcomes;
/// only I/O and parse failures are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelocateOutcome {
    Moved,
    SkippedNoMatch,
    SkippedExists,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelocateSummary {
    pub moved: usize,
    pub skipped_no_match: usize,
    pub skipped_exists: usize,
}

impl RelocateSummary {
    fn record(&mut self, outcome: RelocateOutcome) {
        match outcome {
            RelocateOutcome::Moved => self.moved += 1,
            RelocateOutcome::SkippedNoMatch => self.skipped_no_match += 1,
            RelocateOutcome::SkippedExists => self.skipped_exists += 1,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PhotoRecord {
    /// Source media filename, extension included. A record without a title
    /// decodes as empty and never matches the index.
    #[serde(default)]
    title: String,
}

/// Walk `import_root` and move every `.json` record whose title matches an
/// indexed original name into `original_root`, next to where the sidecar
/// layout says the media file lives. First failure aborts the walk;
/// already-moved files stay moved.
pub fn relocate(import_root: &Path, index: &Index, original_root: &Path) -> Result<RelocateSummary> {
    let mut summary = RelocateSummary::default();

    for entry in WalkDir::new(import_root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk {}", import_root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        log::debug!("json found {}", path.display());
        summary.record(relocate_one(path, index, original_root)?);
    }

    log::info!(
        "moved {}, no match {}, destination taken {}",
        summary.moved,
        summary.skipped_no_match,
        summary.skipped_exists
    );
    Ok(summary)
}

/// Relocate a single record, reporting which way it went.
pub fn relocate_one(path: &Path, index: &Index, original_root: &Path) -> Result<RelocateOutcome> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let record: PhotoRecord =
        serde_json::from_str(&raw).map_err(|source| ReconcileError::RecordParse {
            path: path.to_path_buf(),
            source,
        })?;

    let (base, _) = split_ext(&record.title);
    log::trace!("title {:?}, base {:?}", record.title, base);

    let Some(location) = index.get(base) else {
        log::trace!("no sidecar indexed for {:?}", base);
        return Ok(RelocateOutcome::SkippedNoMatch);
    };

    let dest = original_root
        .join(&location.dir)
        .join(format!("{}.json", location.base));
    if dest.exists() {
        log::debug!("destination {} already exists, skipping", dest.display());
        return Ok(RelocateOutcome::SkippedExists);
    }

    move_file(path, &dest)?;
    log::debug!("moved {} -> {}", path.display(), dest.display());
    Ok(RelocateOutcome::Moved)
}

fn move_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::CrossesDevices => {
            fs::copy(from, to).with_context(|| {
                format!("failed to copy {} to {}", from.display(), to.display())
            })?;
            fs::remove_file(from)
                .with_context(|| format!("failed to remove {}", from.display()))?;
            Ok(())
        }
        Err(err) => Err(err).with_context(|| {
            format!("failed to move {} to {}", from.display(), to.display())
        }),
    }
}
