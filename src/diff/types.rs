//! Parsed diff records: files, chunks and changes.

use serde::{Deserialize, Serialize};

/// Path used on the missing side of an added or deleted file.
pub const DEV_NULL: &str = "/dev/null";

/// One file's change set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Path on the old side, or `/dev/null` when the file is new.
    pub from: String,
    /// Path on the new side, or `/dev/null` when the file was deleted.
    pub to: String,
    pub new: bool,
    pub deleted: bool,
    pub binary: bool,
    /// Only set by rename detection. A renamed record carries no chunks.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub renamed: bool,
    /// Text following `index ` on a git index line, kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    pub additions: usize,
    pub deletions: usize,
    pub chunks: Vec<Chunk>,
}

impl File {
    /// Create a file record with both sides set to `path`.
    pub(crate) fn with_path(path: &str) -> Self {
        Self {
            from: path.to_string(),
            to: path.to_string(),
            ..Self::default()
        }
    }

    /// The record that replaces a deleted/new pair with identical content.
    pub(crate) fn renamed(from: String, to: String) -> Self {
        Self {
            from,
            to,
            renamed: true,
            ..Self::default()
        }
    }

    /// Iterate over every change in every chunk, in source order.
    pub fn changes(&self) -> impl Iterator<Item = &Change> {
        self.chunks.iter().flat_map(|chunk| chunk.changes.iter())
    }

    /// Whichever path names the file after the change, falling back to the
    /// old path for deletions.
    pub fn path(&self) -> &str {
        if self.to == DEV_NULL { &self.from } else { &self.to }
    }
}

/// One hunk: an `@@ ... @@` header plus its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    /// The header line verbatim, including any trailing context text.
    pub content: String,
    pub old_start: usize,
    pub old_lines: usize,
    pub new_start: usize,
    pub new_lines: usize,
    pub changes: Vec<Change>,
}

/// Change type of a single content line, from its leading marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    /// `+`
    Add,
    /// `-`
    Del,
    /// ` ` (context)
    Normal,
}

/// One content line inside a chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    /// The line verbatim, marker character included.
    pub content: String,
    #[serde(rename = "type")]
    pub kind: ChangeType,
    /// 1-based index within the chunk, shared across all change types.
    pub position: usize,
    /// Line number in the old file. `None` for additions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_line: Option<usize>,
    /// Line number in the new file. `None` for deletions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_line: Option<usize>,
    /// A `\ No newline at end of file` marker followed this line.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub no_newline: bool,
}

impl Change {
    pub fn is_add(&self) -> bool {
        self.kind == ChangeType::Add
    }

    pub fn is_del(&self) -> bool {
        self.kind == ChangeType::Del
    }

    pub fn is_normal(&self) -> bool {
        self.kind == ChangeType::Normal
    }

    /// The line text with its marker character removed.
    pub fn text(&self) -> &str {
        let mut chars = self.content.chars();
        match chars.next() {
            Some('+' | '-' | ' ') => chars.as_str(),
            _ => &self.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(kind: ChangeType, content: &str) -> Change {
        Change {
            content: content.to_string(),
            kind,
            position: 1,
            old_line: None,
            new_line: None,
            no_newline: false,
        }
    }

    #[test]
    fn flags_follow_kind() {
        for kind in [ChangeType::Add, ChangeType::Del, ChangeType::Normal] {
            let c = change(kind, "x");
            assert_eq!(c.is_add(), kind == ChangeType::Add);
            assert_eq!(c.is_del(), kind == ChangeType::Del);
            assert_eq!(c.is_normal(), kind == ChangeType::Normal);
        }
    }

    #[test]
    fn text_strips_only_the_marker() {
        assert_eq!(change(ChangeType::Add, "+ line2").text(), " line2");
        assert_eq!(change(ChangeType::Del, "--x").text(), "-x");
        assert_eq!(change(ChangeType::Normal, "").text(), "");
        assert_eq!(change(ChangeType::Normal, "unprefixed").text(), "unprefixed");
    }

    #[test]
    fn path_prefers_new_side() {
        let mut file = File::with_path("src/lib.rs");
        assert_eq!(file.path(), "src/lib.rs");
        file.to = DEV_NULL.to_string();
        assert_eq!(file.path(), "src/lib.rs");
        file.from = DEV_NULL.to_string();
        file.to = "src/new.rs".to_string();
        assert_eq!(file.path(), "src/new.rs");
    }

    #[test]
    fn serializes_with_js_style_keys() {
        let mut c = change(ChangeType::Del, "-gone");
        c.old_line = Some(3);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["type"], "del");
        assert_eq!(json["oldLine"], 3);
        assert!(json.get("newLine").is_none());
        assert!(json.get("noNewline").is_none());

        let file = File::renamed("foo".to_string(), "bar".to_string());
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["renamed"], true);
        assert_eq!(json["from"], "foo");

        let json = serde_json::to_value(File::with_path("a")).unwrap();
        assert!(json.get("renamed").is_none());
    }
}
