mod common;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use fix_copyrights::diff::DiffManager;
use fix_copyrights::file_filter::SuffixFilter;
use fix_copyrights::header::HEADER;
use fix_copyrights::processor::{Processor, ProcessorConfig};
use fix_copyrights::report::FileAction;
use fix_copyrights::workspace::{Workspace, WorkspaceError};
use tempfile::tempdir;

fn with_header(original: &[u8]) -> Vec<u8> {
  let mut expected = HEADER.as_bytes().to_vec();
  expected.extend_from_slice(original);
  expected
}

fn workspace(root: &Path) -> Result<Workspace> {
  Ok(Workspace::resolve(root, Path::new("src"))?)
}

#[test]
fn test_header_inserted_before_original_content() -> Result<()> {
  let temp_dir = tempdir()?;
  common::write_tree(temp_dir.path(), &[("src/foo.h", b"int x;\n")])?;

  fix_copyrights::run(temp_dir.path())?;

  let content = fs::read(temp_dir.path().join("src/foo.h"))?;
  assert_eq!(content, with_header(b"int x;\n"));
  assert_eq!(content.len(), HEADER.len() + "int x;\n".len());
  Ok(())
}

#[test]
fn test_already_licensed_file_unchanged() -> Result<()> {
  let temp_dir = tempdir()?;
  let original: &[u8] = b"/* existing notice */\nvoid f() {}\n";
  common::write_tree(temp_dir.path(), &[("src/bar.cc", original)])?;

  let summary = fix_copyrights::run(temp_dir.path())?;

  assert_eq!(fs::read(temp_dir.path().join("src/bar.cc"))?, original);
  assert_eq!(summary.already_licensed, 1);
  assert_eq!(summary.headers_added, 0);
  Ok(())
}

#[test]
fn test_non_candidate_files_unchanged() -> Result<()> {
  let temp_dir = tempdir()?;
  common::sample_repo(temp_dir.path())?;
  let before = common::snapshot(temp_dir.path())?;

  fix_copyrights::run(temp_dir.path())?;

  let after = common::snapshot(temp_dir.path())?;
  for rel in [
    "src/readme.md",
    "src/nested/upper.H",
    "src/nested/script.py",
    "tools/helper.cc",
    "top_level.h",
  ] {
    let rel = PathBuf::from(rel);
    assert_eq!(before[&rel], after[&rel], "{} was modified", rel.display());
  }
  Ok(())
}

#[test]
fn test_full_run_on_sample_repo() -> Result<()> {
  let temp_dir = tempdir()?;
  common::sample_repo(temp_dir.path())?;
  let before = common::snapshot(temp_dir.path())?;

  let summary = fix_copyrights::run(temp_dir.path())?;

  let after = common::snapshot(temp_dir.path())?;
  for rel in ["src/foo.h", "src/nested/deep/baz.cc", "src/nested/line_comment.h"] {
    let rel = PathBuf::from(rel);
    assert_eq!(after[&rel], with_header(&before[&rel]), "{}", rel.display());
  }
  let bar = PathBuf::from("src/bar.cc");
  assert_eq!(after[&bar], before[&bar]);

  assert_eq!(summary.candidates, 4);
  assert_eq!(summary.headers_added, 3);
  assert_eq!(summary.already_licensed, 1);
  assert_eq!(summary.missing, 0);
  assert_eq!(summary.skipped, 3);
  Ok(())
}

#[test]
fn test_second_run_is_idempotent() -> Result<()> {
  let temp_dir = tempdir()?;
  common::sample_repo(temp_dir.path())?;

  fix_copyrights::run(temp_dir.path())?;
  let after_first = common::snapshot(temp_dir.path())?;

  let summary = fix_copyrights::run(temp_dir.path())?;
  let after_second = common::snapshot(temp_dir.path())?;

  assert_eq!(after_first, after_second);
  assert_eq!(summary.headers_added, 0);
  assert_eq!(summary.already_licensed, 4);
  Ok(())
}

#[test]
fn test_missing_src_touches_nothing() -> Result<()> {
  let temp_dir = tempdir()?;
  common::write_tree(temp_dir.path(), &[("lib/foo.h", b"int x;\n"), ("foo.cc", b"int y;\n")])?;
  let before = common::snapshot(temp_dir.path())?;

  let err = fix_copyrights::run(temp_dir.path()).unwrap_err();

  assert!(matches!(
    err.downcast_ref::<WorkspaceError>(),
    Some(WorkspaceError::MissingSourceDir { .. })
  ));
  assert_eq!(
    err.to_string(),
    "Please run this script from the root of the repository."
  );
  assert_eq!(common::snapshot(temp_dir.path())?, before);
  Ok(())
}

#[test]
fn test_bytes_preserved_exactly() -> Result<()> {
  let temp_dir = tempdir()?;
  let original: &[u8] = b"\xEF\xBB\xBFint a;\r\n\xFF\xFE\x00binary tail\n\n  ";
  common::write_tree(temp_dir.path(), &[("src/odd.cc", original)])?;

  fix_copyrights::run(temp_dir.path())?;

  assert_eq!(fs::read(temp_dir.path().join("src/odd.cc"))?, with_header(original));
  Ok(())
}

#[test]
fn test_empty_file_gets_header_only() -> Result<()> {
  let temp_dir = tempdir()?;
  common::write_tree(temp_dir.path(), &[("src/empty.h", b"")])?;

  fix_copyrights::run(temp_dir.path())?;

  assert_eq!(fs::read(temp_dir.path().join("src/empty.h"))?, HEADER.as_bytes());
  Ok(())
}

#[test]
fn test_lone_slash_is_not_a_header() -> Result<()> {
  let temp_dir = tempdir()?;
  common::write_tree(temp_dir.path(), &[("src/slash.h", b"/")])?;

  fix_copyrights::run(temp_dir.path())?;

  assert_eq!(fs::read(temp_dir.path().join("src/slash.h"))?, with_header(b"/"));
  Ok(())
}

#[test]
fn test_empty_src_directory() -> Result<()> {
  let temp_dir = tempdir()?;
  fs::create_dir(temp_dir.path().join("src"))?;

  let summary = fix_copyrights::run(temp_dir.path())?;

  assert_eq!(summary.candidates, 0);
  assert_eq!(summary.skipped, 0);
  Ok(())
}

#[test]
fn test_check_only_reports_without_writing() -> Result<()> {
  let temp_dir = tempdir()?;
  common::sample_repo(temp_dir.path())?;
  let before = common::snapshot(temp_dir.path())?;

  let processor = Processor::new(ProcessorConfig {
    check_only: true,
    ..ProcessorConfig::new(workspace(temp_dir.path())?)
  });
  let result = processor.process()?;

  assert_eq!(common::snapshot(temp_dir.path())?, before);
  assert_eq!(result.summary.missing, 3);
  assert_eq!(result.summary.headers_added, 0);
  assert!(result.summary.has_missing());

  let mut missing: Vec<PathBuf> = result
    .reports
    .iter()
    .filter(|r| r.action == FileAction::Missing)
    .map(|r| r.path.clone())
    .collect();
  missing.sort();
  assert_eq!(
    missing,
    vec![
      PathBuf::from("src/foo.h"),
      PathBuf::from("src/nested/deep/baz.cc"),
      PathBuf::from("src/nested/line_comment.h"),
    ]
  );
  Ok(())
}

#[test]
fn test_process_file_actions() -> Result<()> {
  let temp_dir = tempdir()?;
  common::write_tree(
    temp_dir.path(),
    &[("src/new.h", b"int x;\n"), ("src/old.h", b"/* old */\n")],
  )?;
  let processor = Processor::new(ProcessorConfig::new(workspace(temp_dir.path())?));

  assert_eq!(
    processor.process_file(&temp_dir.path().join("src/new.h"))?,
    FileAction::Added
  );
  assert_eq!(
    processor.process_file(&temp_dir.path().join("src/new.h"))?,
    FileAction::AlreadyLicensed
  );
  assert_eq!(
    processor.process_file(&temp_dir.path().join("src/old.h"))?,
    FileAction::AlreadyLicensed
  );
  Ok(())
}

#[test]
fn test_custom_suffix_filter() -> Result<()> {
  let temp_dir = tempdir()?;
  common::write_tree(
    temp_dir.path(),
    &[("src/a.cpp", b"int a;\n"), ("src/b.h", b"int b;\n")],
  )?;

  let processor = Processor::new(ProcessorConfig {
    file_filter: Some(Box::new(SuffixFilter::new([".cpp"]))),
    ..ProcessorConfig::new(workspace(temp_dir.path())?)
  });
  let result = processor.process()?;

  assert_eq!(result.summary.headers_added, 1);
  assert_eq!(fs::read(temp_dir.path().join("src/a.cpp"))?, with_header(b"int a;\n"));
  assert_eq!(fs::read(temp_dir.path().join("src/b.h"))?, b"int b;\n");
  Ok(())
}

#[test]
fn test_diff_saved_for_inserted_headers() -> Result<()> {
  let temp_dir = tempdir()?;
  common::write_tree(
    temp_dir.path(),
    &[("src/foo.h", b"int x;\n"), ("src/bar.cc", b"/* ok */\n")],
  )?;
  let diff_path = temp_dir.path().join("changes.diff");
  let diff_manager = DiffManager::new(false, Some(diff_path.clone()));
  diff_manager.init()?;

  let processor = Processor::new(ProcessorConfig {
    check_only: true,
    diff_manager: Some(diff_manager),
    ..ProcessorConfig::new(workspace(temp_dir.path())?)
  });
  processor.process()?;

  let diff = fs::read_to_string(&diff_path)?;
  assert!(diff.contains("Diff for src/foo.h:"));
  assert!(diff.contains("+/* Copyright 2012 Brian Ellis\n"));
  assert!(diff.contains(" int x;\n"));
  assert!(!diff.contains("bar.cc"));
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_aborts_run() -> Result<()> {
  use std::os::unix::fs::PermissionsExt;

  let temp_dir = tempdir()?;
  common::write_tree(temp_dir.path(), &[("src/locked.h", b"int x;\n")])?;
  let locked = temp_dir.path().join("src/locked.h");
  fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

  // Root can read anything; nothing to assert in that case.
  if fs::read(&locked).is_ok() {
    return Ok(());
  }

  let err = fix_copyrights::run(temp_dir.path()).unwrap_err();
  assert!(format!("{:#}", err).contains("locked.h"));

  fs::set_permissions(&locked, fs::Permissions::from_mode(0o644))?;
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlinked_candidate_gets_header() -> Result<()> {
  let temp_dir = tempdir()?;
  common::write_tree(temp_dir.path(), &[("src/real/b.txt", b"int b;\n")])?;
  let src = temp_dir.path().join("src");
  std::os::unix::fs::symlink(src.join("real/b.txt"), src.join("b.cc"))?;

  let summary = fix_copyrights::run(temp_dir.path())?;

  assert_eq!(summary.candidates, 1);
  assert_eq!(summary.headers_added, 1);
  assert!(fs::symlink_metadata(src.join("b.cc"))?.file_type().is_symlink());
  assert_eq!(fs::read(src.join("b.cc"))?, with_header(b"int b;\n"));
  assert_eq!(fs::read(src.join("real/b.txt"))?, with_header(b"int b;\n"));
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_candidate_aborts_run() -> Result<()> {
  let temp_dir = tempdir()?;
  fs::create_dir(temp_dir.path().join("src"))?;
  let src = temp_dir.path().join("src");
  std::os::unix::fs::symlink(src.join("gone.h"), src.join("dangling.h"))?;

  let err = fix_copyrights::run(temp_dir.path()).unwrap_err();

  assert!(format!("{:#}", err).contains("dangling.h"));
  Ok(())
}
