//! # License Detection Module
//!
//! This module contains the interface and implementation used to decide
//! whether a file already carries a license header.
//! Detection works on raw bytes so file content never goes through a
//! decoding step.

use crate::header::BLOCK_COMMENT_OPEN;

/// Trait for license detectors.
///
/// Implementations of this trait are responsible for determining whether a file
/// already contains a license header based on its content.
pub trait LicenseDetector: Send + Sync {
  /// Checks if the content already has a license header.
  ///
  /// # Parameters
  ///
  /// * `content` - The raw file content to check
  ///
  /// # Returns
  ///
  /// `true` if the content appears to have a license header, `false` otherwise.
  fn has_license(&self, content: &[u8]) -> bool;
}

/// Default implementation of license detection.
///
/// A file counts as licensed when its very first bytes open a block comment
/// (`/*`). Nothing else is inspected: no leading whitespace is skipped, no
/// byte-order mark is stripped, and `//` comments do not count.
pub struct BlockCommentDetector;

impl BlockCommentDetector {
  /// Creates a new BlockCommentDetector.
  pub const fn new() -> Self {
    BlockCommentDetector
  }
}

impl Default for BlockCommentDetector {
  fn default() -> Self {
    Self::new()
  }
}

impl LicenseDetector for BlockCommentDetector {
  fn has_license(&self, content: &[u8]) -> bool {
    content.starts_with(BLOCK_COMMENT_OPEN)
  }
}
