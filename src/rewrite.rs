//! Pure text substitution rules relinking Readymag CDN URLs.
//!
//! The rules are kept free of filesystem access so they can be tested
//! against plain strings. [`crate::runner`] applies them to file content.

use regex::{Captures, Regex};

/// Compiled rewrite rules mapping Readymag CDN URLs to root-relative paths.
pub struct CdnRewriter {
  asset_pattern: Regex,
  import_map_pattern: Regex,
}

impl CdnRewriter {
  /// Compile the rewrite patterns.
  pub fn new() -> Self {
    // Asset URLs look like https://i-p.rmcdn.net/<hash>/img/... with `c-p`
    // and `rmcdn1` variants. Only the bucket segment survives the rewrite.
    let asset_pattern = Regex::new(r"(?i)https?://[ic]-p\.rmcdn1?\.net/.*?/(img|dist|snippets)/")
      .expect("invalid CDN asset regex");
    // The import-map base entry has no bucket; the whole quoted URL
    // collapses to the site root.
    let import_map_pattern =
      Regex::new(r#""https?://st-p\.rmcdn1?\.net/[\w-]+/""#).expect("invalid import map regex");

    Self {
      asset_pattern,
      import_map_pattern,
    }
  }

  /// Apply both rewrite rules to `content`.
  ///
  /// Returns the substituted text together with the total number of
  /// replacements across both rules. A count of zero means the returned
  /// content is identical to the input and nothing needs to be written.
  pub fn rewrite(&self, content: &str) -> (String, usize) {
    let mut replacements = 0;

    let relinked = self
      .asset_pattern
      .replace_all(content, |caps: &Captures<'_>| {
        replacements += 1;
        format!("/{}/", &caps[1])
      });
    let relinked = self
      .import_map_pattern
      .replace_all(&relinked, |_: &Captures<'_>| {
        replacements += 1;
        "\"/\"".to_string()
      });

    (relinked.into_owned(), replacements)
  }
}

impl Default for CdnRewriter {
  fn default() -> Self {
    Self::new()
  }
}
