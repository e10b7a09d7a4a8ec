//! Core diff parsing logic.

use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;

use crate::error::{DiffError, Result};

use super::classify::{LineTag, classify};
use super::header::{Dialect, apply_file_markers, apply_metadata, start_git_file, start_svn_file};
use super::hunk::{ChunkBuilder, parse_hunk_header};
use super::types::{ChangeType, File};

/// Version line git prints after the `-- ` signature of a format-patch mail.
static GIT_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)+").expect("version regex is valid"));

/// A file section that is still receiving lines.
struct OpenFile {
    file: File,
    dialect: Dialect,
    /// A `---`/`+++` pair has been applied to this file.
    markers_seen: bool,
    hunk: Option<ChunkBuilder>,
}

impl OpenFile {
    fn new(file: File, dialect: Dialect) -> Self {
        trace!("starting {:?} file section {} -> {}", dialect, file.from, file.to);
        Self {
            file,
            dialect,
            markers_seen: false,
            hunk: None,
        }
    }

    fn has_hunk(&self) -> bool {
        self.hunk.is_some()
    }

    fn hunk_is_open(&self) -> bool {
        self.hunk.as_ref().is_some_and(ChunkBuilder::is_open)
    }

    /// Whether a `---` line belongs to this file rather than starting a new one.
    fn accepts_markers(&self) -> bool {
        !self.markers_seen && self.hunk.is_none() && self.file.chunks.is_empty()
    }

    fn close_hunk(&mut self) {
        if let Some(hunk) = self.hunk.take() {
            self.file.chunks.push(hunk.finish());
        }
    }

    fn finish(mut self) -> File {
        self.close_hunk();
        let (mut additions, mut deletions) = (0, 0);
        for change in self.file.changes() {
            match change.kind {
                ChangeType::Add => additions += 1,
                ChangeType::Del => deletions += 1,
                ChangeType::Normal => {}
            }
        }
        self.file.additions = additions;
        self.file.deletions = deletions;
        self.file
    }
}

/// Parse raw diff text into file records, in the order they appear.
///
/// This is the single-pass core: it never reorders or merges files. Lines
/// outside any file section (commit messages, `diff -r` lines from hg,
/// svn separators) are skipped.
///
/// # Returns
///
/// * `Ok(Vec<File>)` - Parsed files (empty for input with no diff headers)
/// * `Err(DiffError::MalformedHeader)` - A file header without usable paths
/// * `Err(DiffError::MalformedHunkHeader)` - An `@@` line with bad numbers
pub fn parse_files(text: &str) -> Result<Vec<File>> {
    let lines: Vec<&str> = text.lines().collect();
    let mut files = Vec::new();
    let mut current: Option<OpenFile> = None;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let line_no = i + 1;
        let mut tag = classify(line);

        // Inside a hunk, "--- x" is a removed "-- x" unless a "+++ " line
        // follows, which makes it the next file's header. While the hunk
        // still expects lines, a blank or unprefixed line is context whose
        // leading space was trimmed.
        if current.as_ref().is_some_and(OpenFile::has_hunk) {
            let expects_lines = current.as_ref().is_some_and(OpenFile::hunk_is_open);
            tag = match tag {
                LineTag::OldFile if !next_is_new_file_marker(&lines, i) => LineTag::Del,
                LineTag::NewFile => LineTag::Add,
                LineTag::Index | LineTag::Other if expects_lines => LineTag::Normal,
                other => other,
            };
        }

        match tag {
            LineTag::FileStart => {
                if let Some(open) = current.take() {
                    files.push(open.finish());
                }
                let started = if let Some(rest) = line.strip_prefix("diff --git ") {
                    start_git_file(rest).map(|f| OpenFile::new(f, Dialect::Git))
                } else {
                    let rest = line.strip_prefix("Index: ").unwrap_or_default();
                    start_svn_file(rest).map(|f| OpenFile::new(f, Dialect::Svn))
                };
                current = Some(started.ok_or_else(|| malformed_header(line_no, line))?);
            }

            LineTag::Index => match current.as_mut() {
                Some(open) => {
                    open.close_hunk();
                    apply_metadata(&mut open.file, line);
                }
                None => debug!("skipping metadata outside a file section at line {line_no}"),
            },

            LineTag::OldFile => {
                let new_side = lines
                    .get(i + 1)
                    .and_then(|next| next.strip_prefix("+++ "))
                    .ok_or_else(|| malformed_header(line_no, line))?;
                let old_side = &line[4..];

                let open = match current.take() {
                    Some(open) if open.accepts_markers() => open,
                    previous => {
                        if let Some(previous) = previous {
                            files.push(previous.finish());
                        }
                        OpenFile::new(File::default(), Dialect::Plain)
                    }
                };
                let open = current.insert(open);
                apply_file_markers(&mut open.file, open.dialect, old_side, new_side);
                open.markers_seen = true;

                // The "+++" line has been consumed along with this one.
                i += 1;
            }

            LineTag::NewFile => debug!("skipping '+++' without '---' at line {line_no}"),

            LineTag::ChunkHeader => {
                let range = parse_hunk_header(line).ok_or_else(|| DiffError::MalformedHunkHeader {
                    line: line_no,
                    text: line.to_string(),
                })?;
                match current.as_mut() {
                    Some(open) => {
                        open.close_hunk();
                        open.hunk = Some(ChunkBuilder::new(line, range));
                    }
                    None => debug!("skipping hunk outside a file section at line {line_no}"),
                }
            }

            LineTag::Add | LineTag::Del | LineTag::Normal => {
                let kind = match tag {
                    LineTag::Add => ChangeType::Add,
                    LineTag::Del => ChangeType::Del,
                    _ => ChangeType::Normal,
                };
                if is_signature_separator(line, lines.get(i + 1).copied()) {
                    if let Some(open) = current.as_mut() {
                        open.close_hunk();
                    }
                    debug!("format-patch signature at line {line_no} ends the hunk");
                } else {
                    match current.as_mut().and_then(|open| open.hunk.as_mut()) {
                        Some(hunk) => hunk.push(kind, line),
                        None => debug!("skipping content line outside a hunk at line {line_no}"),
                    }
                }
            }

            LineTag::NoNewline => {
                if let Some(hunk) = current.as_mut().and_then(|open| open.hunk.as_mut()) {
                    hunk.mark_no_newline();
                }
            }

            LineTag::Other => {}
        }

        i += 1;
    }

    if let Some(open) = current {
        files.push(open.finish());
    }

    Ok(files)
}

fn next_is_new_file_marker(lines: &[&str], i: usize) -> bool {
    lines.get(i + 1).is_some_and(|next| next.starts_with("+++ "))
}

/// The `-- ` line `git format-patch` puts between the diff and the git
/// version, e.g. `-- \n2.39.0`.
fn is_signature_separator(line: &str, next: Option<&str>) -> bool {
    line == "-- " && next.is_none_or(|next| GIT_VERSION.is_match(next))
}

fn malformed_header(line_no: usize, line: &str) -> DiffError {
    DiffError::MalformedHeader {
        line: line_no,
        text: line.to_string(),
    }
}
