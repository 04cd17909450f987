//! # Processor Module
//!
//! This module contains the core functionality: walking the source
//! directory, picking out candidate files, detecting an existing header and
//! prepending the license header where it is missing.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - Raw byte file reading and writing
//! - [`content_transformer`] - Building the new file content
//! - [`file_collector`] - Directory traversal and path normalization
//!
//! The [`Processor`] struct is the main entry point for all file operations.
//! Files are handled one at a time; each read, check and write finishes
//! before the next file is opened.

mod content_transformer;
mod file_collector;
mod file_io;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
pub use content_transformer::ContentTransformer;
pub use file_collector::{FileCollector, absolutize_path, normalize_relative_path};
pub use file_io::FileIO;
use tracing::{debug, trace};

use crate::diff::DiffManager;
use crate::file_filter::{FileFilter, SuffixFilter};
use crate::license_detection::{BlockCommentDetector, LicenseDetector};
use crate::report::{FileAction, FileReport, ProcessingSummary};
use crate::verbose_log;
use crate::workspace::Workspace;

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  pub workspace: Workspace,

  /// Only report files missing the header, never write
  pub check_only: bool,

  // Optional components
  pub file_filter: Option<Box<dyn FileFilter>>,
  pub diff_manager: Option<DiffManager>,
  pub license_detector: Option<Box<dyn LicenseDetector>>,
}

impl ProcessorConfig {
  /// Creates a new ProcessorConfig for the workspace with default behavior.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     check_only: true,
  ///     ..ProcessorConfig::new(workspace)
  /// }
  /// ```
  pub fn new(workspace: Workspace) -> Self {
    Self {
      workspace,
      check_only: false,
      file_filter: None,
      diff_manager: None,
      license_detector: None,
    }
  }
}

/// Outcome of a complete run.
#[derive(Debug, Clone)]
pub struct ProcessingResult {
  /// One report per candidate file, in walk order
  pub reports: Vec<FileReport>,
  /// Totals for the run
  pub summary: ProcessingSummary,
}

/// Processor for adding license headers to the files of a workspace.
///
/// The `Processor` is responsible for:
/// - Scanning the source directory recursively
/// - Identifying candidate files by suffix
/// - Checking for an existing header
/// - Prepending the header, or only reporting it missing in check mode
/// - Showing diffs of the change when requested
pub struct Processor {
  workspace: Workspace,

  /// Whether to only check for headers without modifying files
  check_only: bool,

  /// Filter deciding which files are candidates
  file_filter: Box<dyn FileFilter>,

  /// Manager for handling diff creation and rendering
  diff_manager: DiffManager,

  /// License detector for checking if files already have a header
  license_detector: Box<dyn LicenseDetector>,

  /// Content transformer that prepends the header
  content_transformer: ContentTransformer,

  /// File collector for directory traversal
  file_collector: FileCollector,
}

impl Processor {
  /// Creates a new processor with the specified configuration.
  pub fn new(config: ProcessorConfig) -> Self {
    let file_collector = FileCollector::new(config.workspace.source_dir().to_path_buf());

    Self {
      workspace: config.workspace,
      check_only: config.check_only,
      file_filter: config.file_filter.unwrap_or_else(|| Box::new(SuffixFilter::default())),
      diff_manager: config.diff_manager.unwrap_or_else(|| DiffManager::new(false, None)),
      license_detector: config
        .license_detector
        .unwrap_or_else(|| Box::new(BlockCommentDetector::new())),
      content_transformer: ContentTransformer::default(),
      file_collector,
    }
  }

  /// Walks the source directory and returns the candidate files, without
  /// reading them, along with the number of non-candidate files.
  pub fn collect_candidates(&self) -> Result<(Vec<PathBuf>, usize)> {
    let all_files = self.file_collector.traverse_directory()?;
    let total = all_files.len();

    let candidates: Vec<PathBuf> = all_files
      .into_iter()
      .filter(|path| self.file_filter.should_process(path).should_process)
      .collect();

    let skipped = total - candidates.len();
    debug!("{} candidate files, {} skipped", candidates.len(), skipped);
    Ok((candidates, skipped))
  }

  /// Processes every candidate file under the source directory.
  ///
  /// The first I/O error aborts the run; files handled before it keep their
  /// new content.
  pub fn process(&self) -> Result<ProcessingResult> {
    let (candidates, skipped) = self.collect_candidates()?;
    self.process_candidates(&candidates, skipped)
  }

  /// Processes an already collected list of candidate files.
  pub fn process_candidates(&self, candidates: &[PathBuf], skipped: usize) -> Result<ProcessingResult> {
    let start_time = Instant::now();

    let mut reports = Vec::with_capacity(candidates.len());
    for path in candidates {
      let action = self.process_file(path)?;
      reports.push(FileReport::new(
        normalize_relative_path(path, self.workspace.root()),
        action,
      ));
    }

    let summary = ProcessingSummary::from_reports(&reports, skipped, start_time.elapsed());
    Ok(ProcessingResult { reports, summary })
  }

  /// Processes a single candidate file.
  ///
  /// Reads the whole file, leaves it alone if it already starts with a block
  /// comment, and otherwise rewrites it as header followed by the original
  /// bytes (only reported in check mode).
  pub fn process_file(&self, path: &Path) -> Result<FileAction> {
    verbose_log!("Processing file: {}", path.display());

    let content = FileIO::read_bytes(path)?;

    if self.has_license(&content) {
      trace!("Already licensed: {}", path.display());
      return Ok(FileAction::AlreadyLicensed);
    }

    let updated = self.content_transformer.prepend_header(&content);
    let display_path = normalize_relative_path(path, self.workspace.root());
    self.diff_manager.display_diff(&display_path, &content, &updated)?;

    if self.check_only {
      debug!("Missing header: {}", path.display());
      return Ok(FileAction::Missing);
    }

    FileIO::write_bytes(path, &updated)?;
    debug!("Added header: {}", path.display());
    Ok(FileAction::Added)
  }

  /// Checks if the content already has a license header.
  pub fn has_license(&self, content: &[u8]) -> bool {
    self.license_detector.has_license(content)
  }
}
