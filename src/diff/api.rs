//! Public entry points.

use log::debug;

use crate::error::Result;
use crate::options::ParseOptions;

use super::parser::parse_files;
use super::renames::detect_renames;
use super::types::File;

/// Parse diff text into a list of files.
///
/// Empty or whitespace-only input yields an empty list. Callers holding an
/// `Option<&str>` can pass `text.unwrap_or_default()`.
///
/// # Arguments
///
/// * `text` - Full diff output (git, hg, svn or GNU unified format)
/// * `options` - `find_renames` enables the rename detection pass
///
/// # Returns
///
/// * `Ok(Vec<File>)` - Files in the order their headers appear
/// * `Err(DiffError::MalformedHeader)` - A file header with no usable paths
/// * `Err(DiffError::MalformedHunkHeader)` - An `@@` line that is not a hunk header
///
/// # Example
///
/// ```
/// use diffparse::{ParseOptions, parse};
///
/// let diff = "--- a/x\n+++ b/x\n@@ -1 +1 @@\n-old\n+new\n";
/// let files = parse(diff, &ParseOptions::default()).unwrap();
/// assert_eq!(files[0].to, "x");
/// assert_eq!(files[0].chunks[0].changes.len(), 2);
/// ```
pub fn parse(text: &str, options: &ParseOptions) -> Result<Vec<File>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let files = parse_files(text)?;
    debug!("parsed {} file(s)", files.len());

    if options.find_renames {
        Ok(detect_renames(files))
    } else {
        Ok(files)
    }
}

/// [`parse`] with default options.
pub fn parse_str(text: &str) -> Result<Vec<File>> {
    parse(text, &ParseOptions::default())
}
