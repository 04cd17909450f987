//! # Header Module
//!
//! The license header prepended to source files that do not already start
//! with a block comment.
//!
//! The text is fixed. Existing codebases expect this exact block, so it is
//! embedded verbatim, including the blank line that separates it from the
//! original file content.

/// The Apache 2.0 notice written at the top of every unlicensed source file.
///
/// Ends with `*/` followed by one blank line; the original content resumes
/// immediately after.
pub const HEADER: &str = r#"/* Copyright 2012 Brian Ellis
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

"#;

/// The marker a file must start with to be treated as already licensed.
pub const BLOCK_COMMENT_OPEN: &[u8] = b"/*";

/// Returns the header as raw bytes.
pub const fn header_bytes() -> &'static [u8] {
  HEADER.as_bytes()
}
