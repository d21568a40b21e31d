use crate::commands::alignjson::{self, AlignjsonOptions};
use crate::commands::movejson::{self, MovejsonOptions};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "takeout-sidecar",
    version,
    about = "Reconcile a photo takeout with a sidecar-indexed originals tree"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Move takeout JSON metadata next to the originals their titles match.
    Movejson {
        /// Folder holding the takeout JSON records to relocate.
        #[arg(long)]
        import: PathBuf,
        /// Folder holding the YAML sidecar descriptors.
        #[arg(long)]
        sidecar: PathBuf,
        /// Originals tree mirroring the sidecar layout; destination of the moves.
        #[arg(long)]
        original: PathBuf,
    },
    /// Strip redundant second extensions from .json files, in place.
    ///
    /// Run on an extracted takeout folder prior to import.
    Alignjson {
        /// Folder tree to normalize.
        #[arg(long)]
        import: PathBuf,
        /// Report intended renames without touching anything.
        #[arg(long)]
        dry: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let report = match cli.command {
        Command::Movejson {
            import,
            sidecar,
            original,
        } => movejson::run(&MovejsonOptions {
            import_dir: import,
            sidecar_dir: sidecar,
            original_dir: original,
        })?,
        Command::Alignjson { import, dry } => alignjson::run(&AlignjsonOptions {
            import_dir: import,
            dry_run: dry,
        })?,
    };

    println!("{}", report.render());
    Ok(())
}
