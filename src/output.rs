//! # Output Module
//!
//! This module centralizes all user-facing output for the fix-copyrights
//! tool. It provides consistent formatting, colors, and symbols for terminal
//! output.
//!
//! Quiet mode prints only bare file paths so the output can be piped; verbose
//! mode lists every file instead of truncating.

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::{FileAction, FileReport, ProcessingSummary};

/// Symbols used in output
pub mod symbols {
  /// Success/has license
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Missing license/failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Maximum number of files to show in the default output before truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// Print the initial "Checking N files..." or "Processing N files..." message.
pub fn print_start_message(file_count: usize, modify_mode: bool) {
  if is_quiet() {
    return;
  }

  let verb = if modify_mode { "Processing" } else { "Checking" };
  println!("{} {} {}...", verb, file_count, plural(file_count));
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the list of files missing license headers.
///
/// In quiet mode only the paths are printed, one per line.
pub fn print_missing_files(files: &[&FileReport]) {
  if files.is_empty() {
    return;
  }

  if is_quiet() {
    for file in sorted(files) {
      println!("{}", file.path.display());
    }
    return;
  }

  let count = files.len();
  println!(
    "{} {} {} missing license headers:",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
    count,
    plural(count)
  );
  print_file_list(&sorted(files));
}

/// Print the list of files that had headers added.
pub fn print_added_files(files: &[&FileReport]) {
  if is_quiet() || files.is_empty() {
    return;
  }

  let count = files.len();
  println!(
    "{} Added license header to {} {}:",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    count,
    plural(count)
  );
  print_file_list(&sorted(files));
}

/// Print the success message when all files have license headers.
pub fn print_all_files_ok() {
  if is_quiet() {
    return;
  }

  println!(
    "{} All files have license headers.",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

/// Print the processing summary.
///
/// Format: "Summary: X OK, Y added, Z skipped" (or "Y missing" in check
/// mode). In verbose mode, also shows timing.
pub fn print_summary(summary: &ProcessingSummary, check_only: bool) {
  if is_quiet() {
    return;
  }

  let ok_str = summary.already_licensed.if_supports_color(Stream::Stdout, |s| s.cyan());
  let changed = if check_only {
    let missing = summary.missing;
    let missing_str = if missing > 0 {
      missing.if_supports_color(Stream::Stdout, |s| s.red()).to_string()
    } else {
      missing.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string()
    };
    format!("{} missing", missing_str)
  } else {
    format!(
      "{} added",
      summary.headers_added.if_supports_color(Stream::Stdout, |s| s.green())
    )
  };
  let skipped_str = summary.skipped.if_supports_color(Stream::Stdout, |s| s.dimmed());

  let mut summary_line = format!("Summary: {} OK, {}, {} skipped", ok_str, changed, skipped_str);

  if is_verbose() {
    summary_line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  }

  println!("{}", summary_line);
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}

/// Categorize file reports into different groups for output.
pub struct CategorizedReports<'a> {
  /// Files missing license headers (check mode)
  pub missing: Vec<&'a FileReport>,
  /// Files that had headers added
  pub added: Vec<&'a FileReport>,
}

impl<'a> CategorizedReports<'a> {
  /// Categorize a slice of file reports.
  pub fn from_reports(reports: &'a [FileReport]) -> Self {
    let mut missing = Vec::new();
    let mut added = Vec::new();

    for report in reports {
      match report.action {
        FileAction::Added => added.push(report),
        FileAction::Missing => missing.push(report),
        FileAction::AlreadyLicensed => {}
      }
    }

    Self { missing, added }
  }
}

const fn plural(count: usize) -> &'static str {
  if count == 1 { "file" } else { "files" }
}

fn sorted<'a>(files: &[&'a FileReport]) -> Vec<&'a FileReport> {
  let mut sorted_files = files.to_vec();
  sorted_files.sort_by(|a, b| a.path.cmp(&b.path));
  sorted_files
}

/// Prints an indented file list, truncated unless verbose.
fn print_file_list(files: &[&FileReport]) {
  let count = files.len();
  let show_all = is_verbose();
  let limit = if show_all { count } else { DEFAULT_FILE_LIST_LIMIT };

  for file in files.iter().take(limit) {
    println!("  {}", file.path.display());
  }

  if !show_all && count > limit {
    println!(
      "  {} ... and {} more (use -v to see all)",
      "".if_supports_color(Stream::Stdout, |s| s.dimmed()),
      count - limit
    );
  }
}
