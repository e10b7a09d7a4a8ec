//! Line classification by fixed prefix.

/// Category of one physical diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTag {
    /// `diff --git ...` or svn `Index: ...`
    FileStart,
    /// git extended header metadata: modes, index, similarity, binary
    Index,
    /// `--- <path>`
    OldFile,
    /// `+++ <path>`
    NewFile,
    /// `@@ ...`
    ChunkHeader,
    Add,
    Del,
    Normal,
    /// `\ No newline at end of file`
    NoNewline,
    Other,
}

/// Prefixes of git extended header lines that carry file metadata.
const METADATA_PREFIXES: &[&str] = &[
    "index ",
    "new file mode ",
    "deleted file mode ",
    "old mode ",
    "new mode ",
    "similarity index ",
    "dissimilarity index ",
    "rename from ",
    "rename to ",
    "copy from ",
    "copy to ",
    "Binary files ",
    "GIT binary patch",
];

/// Classify a single line (without its trailing newline).
///
/// Order matters: the three-character file markers are checked before the
/// single-character content markers, and `@@` before everything that could
/// start a content line.
pub fn classify(line: &str) -> LineTag {
    if line.starts_with("diff --git ") || line.starts_with("Index: ") {
        LineTag::FileStart
    } else if METADATA_PREFIXES.iter().any(|p| line.starts_with(p)) {
        LineTag::Index
    } else if line.starts_with("--- ") {
        LineTag::OldFile
    } else if line.starts_with("+++ ") {
        LineTag::NewFile
    } else if line.starts_with("@@") {
        LineTag::ChunkHeader
    } else if line.starts_with('\\') {
        LineTag::NoNewline
    } else if line.starts_with('+') {
        LineTag::Add
    } else if line.starts_with('-') {
        LineTag::Del
    } else if line.starts_with(' ') {
        LineTag::Normal
    } else {
        LineTag::Other
    }
}
