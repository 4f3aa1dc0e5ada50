//! Command-line entry point for relinking a Readymag export tree.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use readymag_relink::report::ConsoleReporter;
use readymag_relink::runner::scan_and_fix;

/// Rewrite Readymag CDN URLs in an exported site to root-relative paths and
/// remove redundant snippet HTML files.
#[derive(Debug, Parser)]
#[command(name = "readymag-relink", version, about)]
struct Cli {
  /// Root directory of the exported site.
  #[arg(default_value = ".")]
  root: PathBuf,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  println!("Starting to fix Readymag CDN paths in all files...");
  let mut reporter = ConsoleReporter;
  let summary = scan_and_fix(&cli.root, &mut reporter)?;

  println!(
    "\nScan complete. Processed {} files, fixed {} files, deleted {} files, {} errors.",
    summary.processed,
    summary.fixed,
    summary.deleted,
    summary.errors.len()
  );
  println!("Please inspect your files and then commit these changes.");

  Ok(())
}
