//! diffparse: structured parsing of unified diff output.
//!
//! Converts the text produced by `git diff`, `hg diff`, `svn diff` or GNU
//! `diff -u` into a list of [`File`] records. Each file holds its hunks
//! ([`Chunk`]) and every hunk line ([`Change`]) carries its change type,
//! its position in the hunk, and its line number in the old and new file.
//!
//! ```
//! use diffparse::{ChangeType, parse_str};
//!
//! let diff = "\
//! diff --git a/greeting.txt b/greeting.txt
//! index 3b18e51..a042389 100644
//! --- a/greeting.txt
//! +++ b/greeting.txt
//! @@ -1,2 +1,2 @@
//!  hello
//! -world
//! +there
//! ";
//! let files = parse_str(diff).unwrap();
//! let changes = &files[0].chunks[0].changes;
//! assert_eq!(changes[1].kind, ChangeType::Del);
//! assert_eq!(changes[1].old_line, Some(2));
//! assert_eq!(changes[2].new_line, Some(2));
//! ```

pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod options;

pub use diff::{Change, ChangeType, Chunk, DEV_NULL, File, detect_renames, parse, parse_str};
pub use error::{DiffError, Result};
pub use options::ParseOptions;
