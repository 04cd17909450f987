//! # fix-copyrights
//!
//! Walks the `src` directory of a repository and prepends the project's
//! Apache 2.0 license header to every `.h` and `.cc` file that does not
//! already start with a block comment (`/*`).
//!
//! Files are modified in place. A file that already begins with `/*` is never
//! touched, so running the tool repeatedly is safe. Everything after the
//! header is the original file, byte for byte.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let summary = fix_copyrights::run(Path::new("."))?;
//!     println!("Added {} headers", summary.headers_added);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Walking, filtering and rewriting files
//! * [`header`] - The embedded license header
//! * [`workspace`] - Repository root and the `src` precondition
//! * [`config`] - Optional `.fix-copyrights.toml` configuration
//! * [`logging`] - Logging utilities for verbose output

use std::path::Path;

use anyhow::Result;

pub mod config;
pub mod diff;
pub mod file_filter;
pub mod header;
pub mod license_detection;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
pub mod workspace;

use crate::processor::{Processor, ProcessorConfig};
use crate::report::ProcessingSummary;
use crate::workspace::{DEFAULT_SOURCE_DIR, Workspace};

/// Adds the license header to every unlicensed `.h` and `.cc` file under
/// `working_dir/src`.
///
/// # Errors
///
/// Returns [`workspace::WorkspaceError::MissingSourceDir`] (inside the
/// `anyhow::Error`) when `working_dir` has no `src` directory; no file is
/// touched in that case. Any read, write or traversal failure aborts the run
/// and is returned with the offending path in its context.
pub fn run(working_dir: &Path) -> Result<ProcessingSummary> {
  let workspace = Workspace::resolve(working_dir, Path::new(DEFAULT_SOURCE_DIR))?;
  let processor = Processor::new(ProcessorConfig::new(workspace));
  Ok(processor.process()?.summary)
}
