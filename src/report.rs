//! Progress reporting seam for relink runs.

use std::path::Path;

use crate::models::{RunError, RunPhase};

/// Observer receiving per-file progress events during a run.
///
/// All methods default to doing nothing, so callers that only want the
/// returned [`crate::RunSummary`] can pass `&mut ()`.
pub trait RunObserver {
  /// A file's CDN links were rewritten and written back.
  fn file_fixed(&mut self, _path: &Path, _replacements: usize) {}

  /// A per-file failure was recorded; the run continues.
  fn file_error(&mut self, _error: &RunError) {}

  /// The rewrite pass finished and the deletion pass is starting.
  fn deletion_started(&mut self) {}

  /// A redundant snippet file was removed.
  fn file_deleted(&mut self, _path: &Path) {}
}

impl RunObserver for () {}

/// Observer printing per-file console markers and phase banners.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl RunObserver for ConsoleReporter {
  fn file_fixed(&mut self, path: &Path, _replacements: usize) {
    println!("  ✅ Fixed CDN links in: {}", path.display());
  }

  fn file_error(&mut self, error: &RunError) {
    let verb = match error.phase {
      RunPhase::Delete => "deleting",
      RunPhase::Read | RunPhase::Write => "processing",
    };
    println!(
      "  ❌ ERROR {} file {}: {}",
      verb,
      error.path.display(),
      error.message
    );
  }

  fn deletion_started(&mut self) {
    println!("\nStarting to delete redundant HTML files...");
  }

  fn file_deleted(&mut self, path: &Path) {
    println!("  🗑️ Deleted redundant file: {}", path.display());
  }
}
