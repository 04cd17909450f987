//! # Workspace Module
//!
//! This module defines the repository root the tool operates on and checks
//! that it contains the source directory before anything else happens.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Name of the source directory expected directly under the repository root.
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Errors raised while resolving the workspace.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
  /// The source directory does not exist under the root.
  #[error("Please run this script from the root of the repository.")]
  MissingSourceDir { root: PathBuf, source_dir: PathBuf },
}

/// A repository root known to contain its source directory.
#[derive(Debug, Clone)]
pub struct Workspace {
  root: PathBuf,
  source_dir: PathBuf,
}

impl Workspace {
  /// Resolves the workspace rooted at `root`.
  ///
  /// `source_dir` is relative to `root`. Fails with
  /// [`WorkspaceError::MissingSourceDir`] when it is not an existing
  /// directory; no file is read or written in that case.
  pub fn resolve(root: &Path, source_dir: &Path) -> Result<Self, WorkspaceError> {
    let full_source_dir = root.join(source_dir);
    if !full_source_dir.is_dir() {
      debug!("Source directory not found: {}", full_source_dir.display());
      return Err(WorkspaceError::MissingSourceDir {
        root: root.to_path_buf(),
        source_dir: source_dir.to_path_buf(),
      });
    }

    Ok(Self {
      root: root.to_path_buf(),
      source_dir: full_source_dir,
    })
  }

  /// The repository root.
  pub fn root(&self) -> &Path {
    &self.root
  }

  /// The source directory, joined onto the root.
  pub fn source_dir(&self) -> &Path {
    &self.source_dir
  }
}
