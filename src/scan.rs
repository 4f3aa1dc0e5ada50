//! Directory traversal and path-based classification of export files.
//!
//! Enumeration is separated from per-file processing so the traversal needs
//! no error handling of its own: it yields candidate paths and the runner
//! decides what to do with each.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::FileKind;

/// Directory name whose exported HTML fragments are redundant after the
/// rewrite pass.
const SNIPPETS_DIR_NAME: &str = "snippets";

/// Recursively enumerate every regular file under `root`, depth first.
///
/// Symlinks to regular files are included; symlinked directories are not
/// traversed. Fails only when the root itself cannot be read; unreadable
/// subdirectories deeper in the tree are skipped.
pub fn enumerate_files(root: &Path) -> Result<Vec<PathBuf>> {
  let entries = fs::read_dir(root)
    .with_context(|| format!("failed to read export root {}", root.display()))?;

  let mut files = Vec::new();
  collect_entries(entries, &mut files);
  Ok(files)
}

fn collect_entries(entries: fs::ReadDir, files: &mut Vec<PathBuf>) {
  for entry in entries.flatten() {
    let Ok(file_type) = entry.file_type() else {
      continue;
    };

    let path = entry.path();
    if file_type.is_dir() {
      if let Ok(children) = fs::read_dir(&path) {
        collect_entries(children, files);
      }
    } else if file_type.is_file() {
      files.push(path);
    } else if file_type.is_symlink()
      && fs::metadata(&path).is_ok_and(|meta| meta.is_file())
    {
      files.push(path);
    }
  }
}

/// Classify a path by its file name suffix.
pub fn classify(path: &Path) -> Option<FileKind> {
  let name = path.file_name()?.to_str()?;
  FileKind::from_file_name(name)
}

/// Whether a file is a redundant exported snippet fragment.
///
/// True when the file name ends in `.html` and some directory component of
/// its ancestry is literally named `snippets`. Qualification is decided
/// from the path alone, independent of the file's content or whether the
/// rewrite pass touched it.
pub fn is_redundant_snippet(path: &Path) -> bool {
  if classify(path) != Some(FileKind::Html) {
    return false;
  }

  let Some(parent) = path.parent() else {
    return false;
  };
  parent
    .components()
    .any(|component| component.as_os_str() == SNIPPETS_DIR_NAME)
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn enumerates_nested_files() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("a/b")).unwrap();
    fs::write(root.join("index.html"), "top").unwrap();
    fs::write(root.join("a/style.css"), "mid").unwrap();
    fs::write(root.join("a/b/app.js"), "deep").unwrap();

    let mut files = enumerate_files(root).unwrap();
    files.sort();

    assert_eq!(files.len(), 3);
    assert!(files.contains(&root.join("index.html")));
    assert!(files.contains(&root.join("a/b/app.js")));
  }

  #[cfg(unix)]
  #[test]
  fn follows_file_symlinks_but_not_directory_symlinks() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("real")).unwrap();
    fs::write(root.join("real/page.html"), "content").unwrap();
    symlink(root.join("real/page.html"), root.join("link.html")).unwrap();
    symlink(root.join("real"), root.join("mirror")).unwrap();

    let files = enumerate_files(root).unwrap();

    assert!(files.contains(&root.join("link.html")));
    assert!(files.contains(&root.join("real/page.html")));
    assert!(!files.iter().any(|path| path.starts_with(root.join("mirror"))));
  }

  #[test]
  fn enumerate_fails_on_missing_root() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(enumerate_files(&missing).is_err());
  }

  #[test]
  fn snippet_fragments_qualify_for_deletion() {
    assert!(is_redundant_snippet(Path::new(
      "export/snippets/fragment.html"
    )));
    assert!(is_redundant_snippet(Path::new(
      "export/snippets/nested/deeper.html"
    )));
  }

  #[test]
  fn non_snippet_html_does_not_qualify() {
    assert!(!is_redundant_snippet(Path::new("export/pages/index.html")));
  }

  #[test]
  fn non_html_under_snippets_does_not_qualify() {
    assert!(!is_redundant_snippet(Path::new("export/snippets/style.css")));
    assert!(!is_redundant_snippet(Path::new("export/snippets/app.js")));
  }

  #[test]
  fn snippets_must_be_a_whole_path_component() {
    assert!(!is_redundant_snippet(Path::new(
      "export/old-snippets/fragment.html"
    )));
    assert!(!is_redundant_snippet(Path::new(
      "export/snippets2/fragment.html"
    )));
  }

  #[test]
  fn snippets_as_file_name_does_not_qualify_siblings() {
    // The component test applies to the ancestry, not the file itself.
    assert!(!is_redundant_snippet(Path::new("export/pages/snippets.html")));
  }
}
