//! # fix-copyrights
//!
//! Prepends the project license header to `.h` and `.cc` files under `src`.
//! Run it from the root of the repository.

mod cli;

use anyhow::Result;

use crate::cli::{Cli, run_fix};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_fix(cli.fix_args)
}
