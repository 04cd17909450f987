//! # Report Module
//!
//! This module provides functionality for generating reports of a header
//! fixing run in machine-readable formats (JSON, CSV).
//!
//! It captures the outcome for each candidate file and the totals for the
//! whole run.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;

/// Information about a processed candidate file for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
  /// Path to the file, relative to the repository root
  #[serde(with = "path_serialization")]
  pub path: PathBuf,
  /// What happened to the file
  pub action: FileAction,
}

impl FileReport {
  pub const fn new(path: PathBuf, action: FileAction) -> Self {
    Self { path, action }
  }
}

/// Possible outcomes for a candidate file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAction {
  /// The header was written to the file
  Added,
  /// The file lacks a header but was left alone (check mode)
  Missing,
  /// The file already started with a block comment
  AlreadyLicensed,
}

impl FileAction {
  /// Label used in CSV output
  pub const fn label(self) -> &'static str {
    match self {
      FileAction::Added => "added",
      FileAction::Missing => "missing",
      FileAction::AlreadyLicensed => "already_licensed",
    }
  }
}

/// Helper module for serializing PathBuf
mod path_serialization {
  use serde::Serializer;

  pub fn serialize<S>(path: &std::path::Path, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&path.to_string_lossy())
  }
}

/// Summary of the processing results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingSummary {
  /// Number of files matching the target suffixes
  pub candidates: usize,
  /// Number of candidates that already started with a block comment
  pub already_licensed: usize,
  /// Number of headers written
  pub headers_added: usize,
  /// Number of candidates missing a header that were not modified
  pub missing: usize,
  /// Number of files under the source directory that are not candidates
  pub skipped: usize,
  /// Total processing time
  #[serde(skip_serializing)]
  pub processing_time: Duration,
  /// Processing time in seconds for serialization
  #[serde(rename = "processing_time_seconds")]
  pub processing_time_secs: f64,
}

impl ProcessingSummary {
  /// Create a new ProcessingSummary initialized to zero
  pub const fn new(processing_time: Duration) -> Self {
    Self {
      candidates: 0,
      already_licensed: 0,
      headers_added: 0,
      missing: 0,
      skipped: 0,
      processing_time,
      processing_time_secs: processing_time.as_secs_f64(),
    }
  }

  /// Create a ProcessingSummary from the candidate reports and the number of
  /// skipped files
  pub fn from_reports(files: &[FileReport], skipped: usize, processing_time: Duration) -> Self {
    let mut summary = Self::new(processing_time);
    summary.candidates = files.len();
    summary.skipped = skipped;

    for file in files {
      match file.action {
        FileAction::Added => summary.headers_added += 1,
        FileAction::Missing => summary.missing += 1,
        FileAction::AlreadyLicensed => summary.already_licensed += 1,
      }
    }

    summary
  }

  /// Whether any candidate still lacks a header after the run
  pub const fn has_missing(&self) -> bool {
    self.missing > 0
  }
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
  /// JSON format for machine readability
  Json,
  /// CSV format for spreadsheet compatibility
  Csv,
}

impl std::fmt::Display for ReportFormat {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ReportFormat::Json => write!(f, "JSON"),
      ReportFormat::Csv => write!(f, "CSV"),
    }
  }
}

#[derive(Serialize)]
struct JsonReport<'a> {
  summary: &'a ProcessingSummary,
  files: &'a [FileReport],
}

/// Report Generator for writing run reports to disk
pub struct ReportGenerator<'a> {
  /// Format of the report to generate
  format: ReportFormat,
  /// Path where the report will be saved
  output_path: &'a Path,
}

impl<'a> ReportGenerator<'a> {
  /// Create a new report generator
  pub const fn new(format: ReportFormat, output_path: &'a Path) -> Self {
    Self { format, output_path }
  }

  /// Generate a report from a collection of file reports and write it to
  /// the output path.
  pub fn generate(&self, files: &[FileReport], summary: &ProcessingSummary) -> Result<()> {
    let content = self.render(files, summary)?;
    fs::write(self.output_path, content)
      .with_context(|| format!("Failed to write {} report to {}", self.format, self.output_path.display()))
  }

  /// Render the report content without writing it.
  pub fn render(&self, files: &[FileReport], summary: &ProcessingSummary) -> Result<String> {
    match self.format {
      ReportFormat::Json => Self::generate_json(files, summary),
      ReportFormat::Csv => Ok(Self::generate_csv(files, summary)),
    }
  }

  fn generate_json(files: &[FileReport], summary: &ProcessingSummary) -> Result<String> {
    let report = JsonReport { summary, files };
    serde_json::to_string_pretty(&report).context("Failed to serialize JSON report")
  }

  fn generate_csv(files: &[FileReport], summary: &ProcessingSummary) -> String {
    let mut csv = String::new();
    csv.push_str("file_path,action\n");

    for file in files {
      // Escape commas in path
      let path = file.path.to_string_lossy().replace(',', "%2C");
      csv.push_str(&format!("{},{}\n", path, file.action.label()));
    }

    csv.push_str("\n# Summary\n");
    csv.push_str(&format!("Candidate files,{}\n", summary.candidates));
    csv.push_str(&format!("Already licensed,{}\n", summary.already_licensed));
    csv.push_str(&format!("Headers added,{}\n", summary.headers_added));
    csv.push_str(&format!("Missing headers,{}\n", summary.missing));
    csv.push_str(&format!("Skipped files,{}\n", summary.skipped));
    csv.push_str(&format!(
      "Processing time (seconds),{:.2}\n",
      summary.processing_time.as_secs_f64()
    ));

    csv
  }
}
