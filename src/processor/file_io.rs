//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the processor.
//! It encapsulates synchronous file operations on raw bytes. Each call opens,
//! uses and closes its own handle, so no descriptor outlives the call even
//! when it fails part way through.

use std::path::Path;

use anyhow::{Context, Result};

/// File I/O operations for the processor.
///
/// This struct provides static methods for reading and writing files.
pub struct FileIO;

impl FileIO {
  /// Reads the full content of a file as raw bytes.
  ///
  /// No decoding or line-ending translation is performed.
  pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Replaces the content of a file.
  ///
  /// The file is truncated and `content` written in full.
  pub fn write_bytes(path: &Path, content: &[u8]) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
  }
}
