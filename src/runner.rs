//! Two-phase orchestration: rewrite every candidate file, then delete the
//! redundant snippet fragments.

use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::models::{RunError, RunPhase, RunSummary};
use crate::report::RunObserver;
use crate::rewrite::CdnRewriter;
use crate::scan;

/// Rewrite CDN links under `root` and remove redundant snippet HTML files.
///
/// The tree is enumerated once. The rewrite pass visits every `.html`,
/// `.css` and `.js` file; the deletion pass then removes every `.html` file
/// under a `snippets` directory, regardless of whether the rewrite pass
/// changed it. Per-file read, write and delete failures are recorded in the
/// returned summary and reported through `observer`; they never abort the
/// run. The only hard failure is an unreadable root directory.
pub fn scan_and_fix(root: &Path, observer: &mut dyn RunObserver) -> Result<RunSummary> {
  let rewriter = CdnRewriter::new();
  let files = scan::enumerate_files(root)?;
  let mut summary = RunSummary::default();

  for path in &files {
    if scan::classify(path).is_none() {
      continue;
    }
    summary.processed += 1;

    match rewrite_file(&rewriter, path) {
      Ok(Some(replacements)) => {
        summary.fixed += 1;
        observer.file_fixed(path, replacements);
      }
      Ok(None) => {}
      Err(error) => {
        observer.file_error(&error);
        summary.errors.push(error);
      }
    }
  }

  observer.deletion_started();
  for path in &files {
    if !scan::is_redundant_snippet(path) {
      continue;
    }

    match fs::remove_file(path) {
      Ok(()) => {
        summary.deleted += 1;
        observer.file_deleted(path);
      }
      Err(err) => {
        let error = RunError {
          path: path.clone(),
          phase: RunPhase::Delete,
          message: err.to_string(),
        };
        observer.file_error(&error);
        summary.errors.push(error);
      }
    }
  }

  Ok(summary)
}

/// Rewrite one file in place.
///
/// Returns `Ok(Some(count))` when substitutions were written back,
/// `Ok(None)` when the content had no matches and the file was left
/// byte-identical. The write is a whole-file overwrite; on a failed write
/// the on-disk file keeps its previous content.
fn rewrite_file(rewriter: &CdnRewriter, path: &Path) -> Result<Option<usize>, RunError> {
  let content = fs::read_to_string(path).map_err(|err| RunError {
    path: path.to_path_buf(),
    phase: RunPhase::Read,
    message: err.to_string(),
  })?;

  let (relinked, replacements) = rewriter.rewrite(&content);
  if replacements == 0 {
    return Ok(None);
  }

  fs::write(path, relinked).map_err(|err| RunError {
    path: path.to_path_buf(),
    phase: RunPhase::Write,
    message: err.to_string(),
  })?;

  Ok(Some(replacements))
}
