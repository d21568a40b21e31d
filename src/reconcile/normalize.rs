use crate::reconcile::paths::split_ext;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Longest second extension (dot included) still treated as a real media
/// format extension. Anything longer reads as a dotted identifier, which
/// must not be stripped. `.heic`, `.jpeg` and `.json` all fit; stamps like
/// `.20200516_132742` do not.
const MAX_SECOND_EXT_LEN: usize = 9;

/// What happened to one `.json` file during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeOutcome {
    Renamed,
    WouldRename,
    SkippedNoSecondExt,
    SkippedExtTooLong,
    SkippedExists,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub renamed: usize,
    pub would_rename: usize,
    pub skipped_no_second_ext: usize,
    pub skipped_ext_too_long: usize,
    pub skipped_exists: usize,
}

impl NormalizeSummary {
    fn record(&mut self, outcome: NormalizeOutcome) {
        match outcome {
            NormalizeOutcome::Renamed => self.renamed += 1,
            NormalizeOutcome::WouldRename => self.would_rename += 1,
            NormalizeOutcome::SkippedNoSecondExt => self.skipped_no_second_ext += 1,
            NormalizeOutcome::SkippedExtTooLong => self.skipped_ext_too_long += 1,
            NormalizeOutcome::SkippedExists => self.skipped_exists += 1,
        }
    }
}

/// Walk `root` and strip the redundant middle extension from every
/// `name.ext.json` file, renaming it to `name.json` in place. With
/// `dry_run` set nothing on disk changes; intended renames are only
/// reported. First I/O failure aborts the walk.
pub fn normalize(root: &Path, dry_run: bool) -> Result<NormalizeSummary> {
    let mut summary = NormalizeSummary::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        log::debug!("json found {}", path.display());
        summary.record(normalize_one(path, dry_run)?);
    }

    log::info!(
        "renamed {}, dry-run {}, no second extension {}, extension too long {}, target taken {}",
        summary.renamed,
        summary.would_rename,
        summary.skipped_no_second_ext,
        summary.skipped_ext_too_long,
        summary.skipped_exists
    );
    Ok(summary)
}

/// Normalize a single file name, reporting which way it went.
pub fn normalize_one(path: &Path, dry_run: bool) -> Result<NormalizeOutcome> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("{} has no usable file name", path.display()))?;

    let (inner, json_ext) = split_ext(name);
    let (stem, second_ext) = split_ext(inner);
    if second_ext.is_empty() {
        return Ok(NormalizeOutcome::SkippedNoSecondExt);
    }
    if second_ext.len() > MAX_SECOND_EXT_LEN {
        log::trace!("second extension too long {:?} in {}", second_ext, path.display());
        return Ok(NormalizeOutcome::SkippedExtTooLong);
    }

    let target = path.with_file_name(format!("{stem}{json_ext}"));
    if target.exists() {
        log::debug!("target {} already exists, skipping", target.display());
        return Ok(NormalizeOutcome::SkippedExists);
    }

    log::debug!("rename {} -> {}", path.display(), target.display());
    if dry_run {
        return Ok(NormalizeOutcome::WouldRename);
    }
    fs::rename(path, &target).with_context(|| {
        format!("failed to rename {} to {}", path.display(), target.display())
    })?;
    Ok(NormalizeOutcome::Renamed)
}
