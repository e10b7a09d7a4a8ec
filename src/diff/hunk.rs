//! Hunk header parsing and hunk body accumulation.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{Change, ChangeType, Chunk};

/// `@@ -<oldStart>[,<oldLines>] +<newStart>[,<newLines>]` followed by
/// whitespace or the end of the line. The closing `@@` and any context text
/// after it are not checked.
static HUNK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))?(?:\s|$)")
        .expect("hunk header regex is valid")
});

/// Numeric fields of a hunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkRange {
    pub old_start: usize,
    pub old_lines: usize,
    pub new_start: usize,
    pub new_lines: usize,
}

/// Parse a hunk header line.
///
/// Format: "@@ -old_start,old_len +new_start,new_len @@ optional context".
/// A missing `,len` defaults to 1, so `@@ -1 +0,0 @@` is one old line and
/// zero new lines.
///
/// Returns `None` if the grammar does not match, a number overflows, or
/// `start + count` on either side does not fit in `usize`.
pub fn parse_hunk_header(line: &str) -> Option<HunkRange> {
    let caps = HUNK_HEADER.captures(line)?;
    let number = |i: usize| -> Option<usize> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(1),
        }
    };

    let range = HunkRange {
        old_start: number(1)?,
        old_lines: number(2)?,
        new_start: number(3)?,
        new_lines: number(4)?,
    };
    range.old_start.checked_add(range.old_lines)?;
    range.new_start.checked_add(range.new_lines)?;
    Some(range)
}

/// Accumulates the body of one hunk.
///
/// The old and new line counters live here and nowhere else; they start at
/// the header's start values and advance as content lines are pushed.
#[derive(Debug)]
pub(super) struct ChunkBuilder {
    content: String,
    range: HunkRange,
    old_line: usize,
    new_line: usize,
    old_remaining: usize,
    new_remaining: usize,
    changes: Vec<Change>,
}

impl ChunkBuilder {
    pub(super) fn new(header: &str, range: HunkRange) -> Self {
        Self {
            content: header.to_string(),
            range,
            old_line: range.old_start,
            new_line: range.new_start,
            old_remaining: range.old_lines,
            new_remaining: range.new_lines,
            changes: Vec::new(),
        }
    }

    /// True while the header's line counts have not been used up.
    pub(super) fn is_open(&self) -> bool {
        self.old_remaining > 0 || self.new_remaining > 0
    }

    /// Append a content line and assign its position and line numbers.
    ///
    /// Lines past the header's counts keep numbering from where the counts
    /// ended; the counters saturate instead of wrapping.
    pub(super) fn push(&mut self, kind: ChangeType, content: &str) {
        let (old_line, new_line) = match kind {
            ChangeType::Add => {
                let new = self.new_line;
                self.new_line = self.new_line.saturating_add(1);
                self.new_remaining = self.new_remaining.saturating_sub(1);
                (None, Some(new))
            }
            ChangeType::Del => {
                let old = self.old_line;
                self.old_line = self.old_line.saturating_add(1);
                self.old_remaining = self.old_remaining.saturating_sub(1);
                (Some(old), None)
            }
            ChangeType::Normal => {
                let (old, new) = (self.old_line, self.new_line);
                self.old_line = self.old_line.saturating_add(1);
                self.new_line = self.new_line.saturating_add(1);
                self.old_remaining = self.old_remaining.saturating_sub(1);
                self.new_remaining = self.new_remaining.saturating_sub(1);
                (Some(old), Some(new))
            }
        };

        self.changes.push(Change {
            content: content.to_string(),
            kind,
            position: self.changes.len() + 1,
            old_line,
            new_line,
            no_newline: false,
        });
    }

    /// Record a `\ No newline at end of file` marker against the last line.
    pub(super) fn mark_no_newline(&mut self) {
        if let Some(last) = self.changes.last_mut() {
            last.no_newline = true;
        }
    }

    pub(super) fn finish(self) -> Chunk {
        Chunk {
            content: self.content,
            old_start: self.range.old_start,
            old_lines: self.range.old_lines,
            new_start: self.range.new_start,
            new_lines: self.range.new_lines,
            changes: self.changes,
        }
    }
}
