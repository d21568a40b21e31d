use crate::commands::CommandReport;
use crate::reconcile::normalize::normalize;
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AlignjsonOptions {
    pub import_dir: PathBuf,
    pub dry_run: bool,
}

pub fn run(opts: &AlignjsonOptions) -> Result<CommandReport> {
    let mut report = CommandReport::new("alignjson");

    let summary = normalize(&opts.import_dir, opts.dry_run)?;
    if opts.dry_run {
        report.detail(format!("would rename {}", summary.would_rename));
    } else {
        report.detail(format!("renamed {}", summary.renamed));
    }
    report.detail(format!(
        "skipped, no second extension: {}",
        summary.skipped_no_second_ext
    ));
    report.detail(format!(
        "skipped, second extension too long: {}",
        summary.skipped_ext_too_long
    ));
    report.detail(format!("skipped, target exists: {}", summary.skipped_exists));

    Ok(report)
}
