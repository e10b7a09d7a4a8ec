//! Unified diff parsing.
//!
//! Turns `git diff`, `hg diff`, `svn diff` and GNU `diff -u` output into
//! [`File`] records holding [`Chunk`]s of annotated [`Change`]s.
//!
//! The parse is a single pass over the input lines:
//! - Every line is tagged by prefix ([`classify()`])
//! - File headers are read in one of three dialects (git, plain, svn)
//! - Hunk bodies get a position plus old/new line numbers per line
//!
//! Rename detection is a separate, opt-in pass over the finished list
//! ([`detect_renames`]).

mod api;
mod classify;
mod header;
mod hunk;
mod parser;
mod renames;
mod types;


// Re-export public API
pub use api::{parse, parse_str};
pub use classify::{LineTag, classify};
pub use hunk::{HunkRange, parse_hunk_header};
pub use parser::parse_files;
pub use renames::detect_renames;
pub use types::{Change, ChangeType, Chunk, DEV_NULL, File};
