//! # File Collector Module
//!
//! This module provides directory traversal and path normalization for the
//! processor.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// File collector for directory traversal.
///
/// The `FileCollector` walks the source directory of a workspace and
/// returns every file below it. Symbolic links to files are returned like
/// regular files; symbolic links to directories are never descended into,
/// so the walk cannot leave the source tree or loop.
pub struct FileCollector {
  /// Directory the walk starts from
  source_dir: PathBuf,
}

impl FileCollector {
  /// Creates a new FileCollector rooted at `source_dir`.
  pub const fn new(source_dir: PathBuf) -> Self {
    Self { source_dir }
  }

  /// Traverses the source directory recursively and collects all regular
  /// files.
  ///
  /// A fresh walk is performed on every call. Any error reading a
  /// directory entry aborts the traversal.
  pub fn traverse_directory(&self) -> Result<Vec<PathBuf>> {
    debug!("Scanning directory: {}", self.source_dir.display());
    let start_time = std::time::Instant::now();

    let mut all_files = Vec::new();
    for entry in WalkDir::new(&self.source_dir).follow_links(false) {
      let entry = entry.with_context(|| format!("Failed to walk directory: {}", self.source_dir.display()))?;
      let file_type = entry.file_type();

      if file_type.is_file() {
        all_files.push(entry.into_path());
      } else if file_type.is_symlink() {
        // A dangling link is kept; reading it fails later.
        if std::fs::metadata(entry.path()).is_ok_and(|meta| meta.is_dir()) {
          trace!("Not following directory symlink: {}", entry.path().display());
        } else {
          all_files.push(entry.into_path());
        }
      }
    }

    debug!(
      "Found {} files in {}ms",
      all_files.len(),
      start_time.elapsed().as_millis()
    );

    Ok(all_files)
  }
}

/// Converts a potentially relative path to an absolute path.
pub fn absolutize_path(path: &Path) -> Result<PathBuf> {
  if path.is_absolute() {
    Ok(path.to_path_buf())
  } else {
    let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;
    Ok(current_dir.join(path))
  }
}

/// Normalizes a path to be relative to the given root, for display and
/// reports.
///
/// Falls back to the path with `.` components removed when no relative form
/// exists.
pub fn normalize_relative_path(path: &Path, root: &Path) -> PathBuf {
  if let Ok(stripped) = path.strip_prefix(root) {
    return stripped.to_path_buf();
  }

  if path.is_absolute() == root.is_absolute()
    && let Some(rel_path) = pathdiff::diff_paths(path, root)
  {
    return rel_path;
  }

  let mut normalized = PathBuf::new();
  for component in path.components() {
    if matches!(component, std::path::Component::CurDir) {
      continue;
    }
    normalized.push(component.as_os_str());
  }

  if normalized.as_os_str().is_empty() {
    PathBuf::from(".")
  } else {
    normalized
  }
}
