//! # File Filter Module
//!
//! This module contains components for deciding which discovered files are
//! candidates for a license header.

use std::path::Path;

use crate::verbose_log;

/// File name suffixes that mark a C++ source or header file.
pub const DEFAULT_SUFFIXES: [&str; 2] = [".h", ".cc"];

/// Result of a file filtering operation.
#[derive(Debug)]
pub struct FilterResult {
  /// Whether the file should be processed
  pub should_process: bool,
  /// Reason why the file should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the file should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the file should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter files based on certain criteria.
pub trait FileFilter: Send + Sync {
  /// Determines whether a file should be processed.
  fn should_process(&self, path: &Path) -> FilterResult;
}

/// Filter that accepts files whose name ends with one of a set of suffixes.
///
/// Matching is an exact, case-sensitive byte comparison against the end of
/// the final path component, so `foo.h` matches `.h` while `foo.H` and
/// `foo.hh` do not.
#[derive(Debug, Clone)]
pub struct SuffixFilter {
  suffixes: Vec<String>,
}

impl SuffixFilter {
  /// Creates a new SuffixFilter from a list of suffixes.
  pub fn new<I, S>(suffixes: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      suffixes: suffixes.into_iter().map(Into::into).collect(),
    }
  }

  /// The suffixes this filter accepts.
  pub fn suffixes(&self) -> &[String] {
    &self.suffixes
  }

  /// Checks whether the file name of `path` ends with an accepted suffix.
  pub fn matches(&self, path: &Path) -> bool {
    let Some(name) = path.file_name() else {
      return false;
    };
    let name = name.as_encoded_bytes();
    self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_bytes()))
  }
}

impl Default for SuffixFilter {
  fn default() -> Self {
    Self::new(DEFAULT_SUFFIXES)
  }
}

impl FileFilter for SuffixFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    if self.matches(path) {
      FilterResult::process()
    } else {
      verbose_log!("Skipping: {} (not a source file)", path.display());
      FilterResult::skip("Extension not targeted")
    }
  }
}
