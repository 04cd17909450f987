//! # Content Transformer Module
//!
//! This module builds the new content of a file that is missing its
//! license header.

use crate::header::header_bytes;

/// Content transformation utilities for license processing.
///
/// The `ContentTransformer` places a header in front of the original bytes.
/// Nothing in the original content is altered: there is no prefix
/// extraction, separator insertion or newline normalization.
pub struct ContentTransformer {
  /// The header placed in front of the original content
  header: &'static [u8],
}

impl ContentTransformer {
  /// Creates a new ContentTransformer that prepends the given header.
  pub const fn new(header: &'static [u8]) -> Self {
    Self { header }
  }

  /// Returns `header ++ content`.
  pub fn prepend_header(&self, content: &[u8]) -> Vec<u8> {
    let mut updated = Vec::with_capacity(self.header.len() + content.len());
    updated.extend_from_slice(self.header);
    updated.extend_from_slice(content);
    updated
  }
}

impl Default for ContentTransformer {
  fn default() -> Self {
    Self::new(header_bytes())
  }
}
