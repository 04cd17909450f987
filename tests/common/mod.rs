#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Writes each `(relative path, content)` pair under `root`, creating parent
/// directories as needed.
pub fn write_tree(root: &Path, files: &[(&str, &[u8])]) -> Result<()> {
  for (rel, content) in files {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
  }
  Ok(())
}

/// Reads every regular file under `root` into a map keyed by relative path.
pub fn snapshot(root: &Path) -> Result<BTreeMap<PathBuf, Vec<u8>>> {
  let mut files = BTreeMap::new();
  for entry in WalkDir::new(root) {
    let entry = entry?;
    if entry.file_type().is_file() {
      let rel = entry.path().strip_prefix(root)?.to_path_buf();
      files.insert(rel, fs::read(entry.path())?);
    }
  }
  Ok(files)
}

/// A small mixed repository: unlicensed, licensed and non-candidate files.
pub fn sample_repo(root: &Path) -> Result<()> {
  write_tree(
    root,
    &[
      ("src/foo.h", b"int x;\n"),
      ("src/bar.cc", b"/* existing notice */\nvoid f() {}\n"),
      ("src/readme.md", b"int y;\n"),
      ("src/nested/deep/baz.cc", b"#include \"foo.h\"\r\nint main() { return 0; }\r\n"),
      ("src/nested/line_comment.h", b"// Copyright someone else\n#pragma once\n"),
      ("src/nested/upper.H", b"int z;\n"),
      ("src/nested/script.py", b"print('hi')\n"),
      ("tools/helper.cc", b"int helper();\n"),
      ("top_level.h", b"int top;\n"),
    ],
  )
}
