//! Transient entities describing one relink run.

use std::fmt;
use std::path::PathBuf;

/// Category of exported text file eligible for CDN path rewriting.
///
/// Classification is by file name suffix only; content is never sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
  /// Exported page markup (`.html`).
  Html,
  /// Stylesheet (`.css`).
  Css,
  /// Script, including the import-map bootstrap (`.js`).
  Script,
}

impl FileKind {
  /// Classify a file by name using a case-sensitive suffix match.
  pub fn from_file_name(name: &str) -> Option<Self> {
    if name.ends_with(".html") {
      Some(Self::Html)
    } else if name.ends_with(".css") {
      Some(Self::Css)
    } else if name.ends_with(".js") {
      Some(Self::Script)
    } else {
      None
    }
  }
}

/// Phase of the run during which a per-file failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
  /// Opening or decoding file content as UTF-8.
  Read,
  /// Persisting substituted content back to disk.
  Write,
  /// Removing a redundant snippet fragment.
  Delete,
}

impl fmt::Display for RunPhase {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      Self::Read => "read",
      Self::Write => "write",
      Self::Delete => "delete",
    };
    f.write_str(label)
  }
}

/// A per-file failure recorded against the run.
///
/// Errors are collected rather than propagated; a failing file is skipped
/// and the remainder of the tree is still processed.
#[derive(Debug)]
pub struct RunError {
  /// File the failure occurred on.
  pub path: PathBuf,
  /// Phase the failure occurred in.
  pub phase: RunPhase,
  /// Human readable message from the underlying I/O error.
  pub message: String,
}

impl fmt::Display for RunError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} failed for {}: {}",
      self.phase,
      self.path.display(),
      self.message
    )
  }
}

/// Aggregate counters accumulated across one [`crate::scan_and_fix`] run.
#[derive(Debug, Default)]
pub struct RunSummary {
  /// Files with a recognized kind that were considered for rewriting.
  pub processed: usize,
  /// Files whose content was substituted and written back.
  pub fixed: usize,
  /// Redundant snippet files removed after the rewrite pass.
  pub deleted: usize,
  /// Per-file failures collected across both phases.
  pub errors: Vec<RunError>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn classifies_recognized_suffixes() {
    assert_eq!(FileKind::from_file_name("index.html"), Some(FileKind::Html));
    assert_eq!(FileKind::from_file_name("style.css"), Some(FileKind::Css));
    assert_eq!(FileKind::from_file_name("app.js"), Some(FileKind::Script));
  }

  #[test]
  fn rejects_other_suffixes_and_case_variants() {
    assert_eq!(FileKind::from_file_name("photo.png"), None);
    assert_eq!(FileKind::from_file_name("INDEX.HTML"), None);
    assert_eq!(FileKind::from_file_name("notes.txt"), None);
    assert_eq!(FileKind::from_file_name("html"), None);
  }
}
