//! # Fix Command
//!
//! This module implements the header fixing run behind the command line:
//! resolve the repository root, check for the source directory, then add
//! (or, with `--check`, only report) missing license headers.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use fix_copyrights::config::load_config;
use fix_copyrights::diff::DiffManager;
use fix_copyrights::file_filter::SuffixFilter;
use fix_copyrights::info_log;
use fix_copyrights::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use fix_copyrights::output::{
  CategorizedReports, print_added_files, print_all_files_ok, print_blank_line, print_hint, print_missing_files,
  print_start_message, print_summary,
};
use fix_copyrights::processor::{Processor, ProcessorConfig, absolutize_path};
use fix_copyrights::report::{ReportFormat, ReportGenerator};
use fix_copyrights::workspace::{DEFAULT_SOURCE_DIR, Workspace, WorkspaceError};

/// Arguments for the fix run
#[derive(Args, Debug, Default)]
pub struct FixArgs {
  /// Repository root containing the source directory (default: current
  /// directory)
  #[arg(long, short = 'C', value_name = "DIR")]
  pub root: Option<PathBuf>,

  /// Check mode: list files missing the header without modifying them, and
  /// exit non-zero if any are found
  #[arg(long)]
  pub check: bool,

  /// Show a diff of each header insertion on stderr
  #[arg(long)]
  pub show_diff: bool,

  /// Save a diff of each header insertion to a file
  #[arg(long, short = 'o', value_name = "FILE")]
  pub save_diff: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors and file lists
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,

  /// Path to config file (default: .fix-copyrights.toml in the repository
  /// root)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long, conflicts_with = "config")]
  pub no_config: bool,

  /// Write a JSON report of the run to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Write a CSV report of the run to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_csv: Option<PathBuf>,
}

/// Prints the precondition message on stdout and exits with status 1.
fn exit_missing_source_dir(error: &WorkspaceError) -> ! {
  println!("{error}");
  process::exit(1);
}

/// Run the header fixer with the given arguments
pub fn run_fix(args: FixArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let root = match args.root {
    Some(ref root) => absolutize_path(root)?,
    None => std::env::current_dir().context("Failed to get current directory")?,
  };
  debug!("Using repository root: {}", root.display());

  // A broken config in a directory without the default source dir is
  // reported as the missing source dir.
  let config = match load_config(args.config.as_deref(), &root, args.no_config) {
    Ok(config) => config,
    Err(e) => {
      if let Err(missing) = Workspace::resolve(&root, Path::new(DEFAULT_SOURCE_DIR)) {
        exit_missing_source_dir(&missing);
      }
      return Err(e);
    }
  };

  let workspace = match Workspace::resolve(&root, &config.source_dir) {
    Ok(workspace) => workspace,
    Err(e) => exit_missing_source_dir(&e),
  };

  let check_only = args.check;

  let diff_manager = DiffManager::new(args.show_diff, args.save_diff);
  diff_manager.init()?;

  let processor = Processor::new(ProcessorConfig {
    check_only,
    file_filter: Some(Box::new(SuffixFilter::new(config.extensions))),
    diff_manager: Some(diff_manager),
    ..ProcessorConfig::new(workspace)
  });

  let (candidates, skipped) = processor.collect_candidates()?;
  print_start_message(candidates.len(), !check_only);

  let result = processor.process_candidates(&candidates, skipped)?;
  let categorized = CategorizedReports::from_reports(&result.reports);

  print_blank_line();
  if check_only {
    if categorized.missing.is_empty() {
      print_all_files_ok();
    } else {
      print_missing_files(&categorized.missing);
    }
  } else if categorized.added.is_empty() {
    print_all_files_ok();
  } else {
    print_added_files(&categorized.added);
  }

  print_blank_line();
  print_summary(&result.summary, check_only);

  if check_only && result.summary.has_missing() {
    print_blank_line();
    print_hint("Run without --check to add the missing headers.");
  }

  let requested_reports = [
    (ReportFormat::Json, args.report_json.as_ref()),
    (ReportFormat::Csv, args.report_csv.as_ref()),
  ];
  for (format, output_path) in requested_reports {
    let Some(output_path) = output_path else {
      continue;
    };
    let report_generator = ReportGenerator::new(format, output_path);
    if let Err(e) = report_generator.generate(&result.reports, &result.summary) {
      eprintln!("Error generating {} report: {:#}", format, e);
    } else {
      info_log!("Generated {} report at {}", format, output_path.display());
    }
  }

  if check_only && result.summary.has_missing() {
    process::exit(1);
  }

  Ok(())
}
