use crate::commands::CommandReport;
use crate::reconcile::index::build_index;
use crate::reconcile::relocate::relocate;
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct MovejsonOptions {
    pub import_dir: PathBuf,
    pub sidecar_dir: PathBuf,
    pub original_dir: PathBuf,
}

pub fn run(opts: &MovejsonOptions) -> Result<CommandReport> {
    let mut report = CommandReport::new("movejson");

    let index = build_index(&opts.sidecar_dir)?;
    report.detail(format!(
        "indexed {} original name(s) from {}",
        index.len(),
        opts.sidecar_dir.display()
    ));

    let summary = relocate(&opts.import_dir, &index, &opts.original_dir)?;
    report.detail(format!("moved {}", summary.moved));
    report.detail(format!("skipped, no match: {}", summary.skipped_no_match));
    report.detail(format!(
        "skipped, destination exists: {}",
        summary.skipped_exists
    ));

    Ok(report)
}
