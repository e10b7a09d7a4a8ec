//! File header parsing for the git, plain unified and svn dialects.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{DEV_NULL, File};

/// Header convention a file section was introduced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Dialect {
    /// `diff --git a/X b/Y` followed by extended header lines.
    Git,
    /// A bare `--- old` / `+++ new` pair (GNU diff, hg).
    Plain,
    /// `Index: path` followed by a `====` separator.
    Svn,
}

/// Trailing GNU diff timestamp, e.g. `  2002-02-21 23:30:39.942229878 -0800`.
static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}(?:\.\d+)?(?: [+-]\d{4})?$")
        .expect("timestamp regex is valid")
});

/// Start a file from the part of a `diff --git` line after `diff --git `.
///
/// Returns `None` when no old/new path pair can be extracted.
pub(super) fn start_git_file(rest: &str) -> Option<File> {
    let (from, to) = parse_diff_git_paths(rest)?;
    Some(File {
        from,
        to,
        ..File::default()
    })
}

/// Start a file from the part of an svn `Index: ` line after the prefix.
pub(super) fn start_svn_file(rest: &str) -> Option<File> {
    let path = rest.trim();
    if path.is_empty() {
        return None;
    }
    Some(File::with_path(path))
}

/// Apply one git extended header line (`new file mode`, `index`, ...).
pub(super) fn apply_metadata(file: &mut File, line: &str) {
    if line.starts_with("new file mode ") {
        file.new = true;
        file.from = DEV_NULL.to_string();
    } else if line.starts_with("deleted file mode ") {
        file.deleted = true;
        file.to = DEV_NULL.to_string();
    } else if let Some(rest) = line.strip_prefix("index ") {
        file.index = Some(rest.to_string());
    } else if line.starts_with("Binary files ") || line.starts_with("GIT binary patch") {
        file.binary = true;
    } else if let Some(path) = line
        .strip_prefix("rename from ")
        .or_else(|| line.strip_prefix("copy from "))
    {
        file.from = unquote(path);
    } else if let Some(path) = line
        .strip_prefix("rename to ")
        .or_else(|| line.strip_prefix("copy to "))
    {
        file.to = unquote(path);
    }
    // Mode changes and similarity scores carry nothing we record.
}

/// Apply a `--- old` / `+++ new` pair. Both arguments are the text after
/// the four-character marker.
pub(super) fn apply_file_markers(file: &mut File, dialect: Dialect, old: &str, new: &str) {
    let old = marker_path(old);
    let new = marker_path(new);

    let strip = match dialect {
        Dialect::Git => true,
        // hg emits git-style prefixes; GNU diff and svn never do.
        Dialect::Plain => has_prefix_or_null(&old, "a/") && has_prefix_or_null(&new, "b/"),
        Dialect::Svn => false,
    };

    file.from = if strip { strip_side_prefix(&old) } else { old };
    file.to = if strip { strip_side_prefix(&new) } else { new };

    if file.from == DEV_NULL {
        file.new = true;
    }
    if file.to == DEV_NULL {
        file.deleted = true;
    }
}

/// Extract the old and new paths from `a/<old> b/<new>`.
///
/// Handles quoted paths, paths containing spaces (by splitting on the last
/// ` b/`), and `diff.noprefix` output with two bare tokens.
fn parse_diff_git_paths(rest: &str) -> Option<(String, String)> {
    let rest = rest.trim();

    if rest.starts_with('"') {
        let (old, tail) = split_quoted(rest)?;
        let tail = tail.trim_start();
        let new = if tail.starts_with('"') {
            split_quoted(tail)?.0
        } else {
            tail.to_string()
        };
        return Some((strip_side_prefix(&old), strip_side_prefix(&new)));
    }

    if let Some(b_pos) = rest.rfind(" b/") {
        let old = &rest[..b_pos];
        let new = &rest[b_pos + 1..];
        if !old.is_empty() {
            return Some((strip_side_prefix(old), strip_side_prefix(&unquote(new))));
        }
    }

    let parts: Vec<&str> = rest.split_whitespace().collect();
    if parts.len() == 2 {
        return Some((strip_side_prefix(parts[0]), strip_side_prefix(parts[1])));
    }

    None
}

/// Path text from a `---`/`+++` line with any timestamp removed.
fn marker_path(raw: &str) -> String {
    let path = match raw.find('\t') {
        Some(tab) => &raw[..tab],
        None => raw,
    };
    let path = match TIMESTAMP.find(path) {
        Some(m) => &path[..m.start()],
        None => path,
    };
    unquote(path.trim())
}

fn has_prefix_or_null(path: &str, prefix: &str) -> bool {
    path == DEV_NULL || path.starts_with(prefix)
}

/// Strip the `a/` or `b/` side prefix git puts on paths.
fn strip_side_prefix(path: &str) -> String {
    path.strip_prefix("a/")
        .or_else(|| path.strip_prefix("b/"))
        .unwrap_or(path)
        .to_string()
}

/// Remove C-style quoting from a path if present.
fn unquote(path: &str) -> String {
    if path.len() >= 2 && path.starts_with('"') {
        if let Some((inner, tail)) = split_quoted(path) {
            if tail.trim().is_empty() {
                return inner;
            }
        }
    }
    path.to_string()
}

/// Split a leading double-quoted token off `s`, decoding its escapes.
///
/// Octal escapes (`\303\251`) are decoded as raw bytes, the way git quotes
/// non-ASCII paths.
fn split_quoted(s: &str) -> Option<(String, &str)> {
    let body = s.strip_prefix('"')?;
    let mut bytes = Vec::with_capacity(body.len());
    let mut iter = body.char_indices();

    while let Some((i, c)) = iter.next() {
        match c {
            '"' => {
                let decoded = String::from_utf8_lossy(&bytes).into_owned();
                return Some((decoded, &body[i + 1..]));
            }
            '\\' => {
                let (_, escaped) = iter.next()?;
                match escaped {
                    'n' => bytes.push(b'\n'),
                    't' => bytes.push(b'\t'),
                    '0'..='7' => {
                        let mut value = escaped.to_digit(8)?;
                        for _ in 0..2 {
                            let (_, d) = iter.next()?;
                            value = value * 8 + d.to_digit(8)?;
                        }
                        bytes.push(u8::try_from(value).ok()?);
                    }
                    other => {
                        let mut buf = [0u8; 4];
                        bytes.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
                    }
                }
            }
            other => {
                let mut buf = [0u8; 4];
                bytes.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn git_paths_strip_side_prefixes() {
        let file = start_git_file("a/src/lib.rs b/src/lib.rs").unwrap();
        assert_eq!(file.from, "src/lib.rs");
        assert_eq!(file.to, "src/lib.rs");
    }

    #[test]
    fn git_paths_with_spaces() {
        let file = start_git_file("a/my file.txt b/my file.txt").unwrap();
        assert_eq!(file.from, "my file.txt");
        assert_eq!(file.to, "my file.txt");
    }

    #[test]
    fn git_paths_quoted() {
        let file = start_git_file(r#""a/caf\303\251.txt" "b/caf\303\251.txt""#).unwrap();
        assert_eq!(file.from, "café.txt");
        assert_eq!(file.to, "café.txt");
    }

    #[test]
    fn git_paths_without_prefix() {
        let file = start_git_file("old.txt new.txt").unwrap();
        assert_eq!(file.from, "old.txt");
        assert_eq!(file.to, "new.txt");
    }

    #[test]
    fn git_paths_unparseable() {
        assert!(start_git_file("").is_none());
        assert!(start_git_file("onlyone").is_none());
    }

    #[test]
    fn svn_index_path() {
        assert_eq!(start_svn_file("new.txt").unwrap().to, "new.txt");
        assert!(start_svn_file("   ").is_none());
    }

    #[test]
    fn new_and_deleted_mode_synthesize_dev_null() {
        let mut file = start_git_file("a/test b/test").unwrap();
        apply_metadata(&mut file, "new file mode 100644");
        assert!(file.new);
        assert_eq!(file.from, DEV_NULL);
        assert_eq!(file.to, "test");

        let mut file = start_git_file("a/test b/test").unwrap();
        apply_metadata(&mut file, "deleted file mode 100644");
        assert!(file.deleted);
        assert_eq!(file.from, "test");
        assert_eq!(file.to, DEV_NULL);
    }

    #[test]
    fn index_and_binary_metadata() {
        let mut file = start_git_file("a/logo.png b/logo.png").unwrap();
        apply_metadata(&mut file, "index 123..456 100644");
        apply_metadata(&mut file, "Binary files a/logo.png and b/logo.png differ");
        assert_eq!(file.index.as_deref(), Some("123..456 100644"));
        assert!(file.binary);
    }

    #[test]
    fn rename_metadata_sets_paths() {
        let mut file = start_git_file("a/old name b/new name").unwrap();
        apply_metadata(&mut file, "similarity index 100%");
        apply_metadata(&mut file, "rename from old name");
        apply_metadata(&mut file, "rename to new name");
        assert_eq!(file.from, "old name");
        assert_eq!(file.to, "new name");
        assert!(!file.renamed);
    }

    #[test]
    fn gnu_markers_drop_timestamps() {
        let mut file = File::default();
        apply_file_markers(
            &mut file,
            Dialect::Plain,
            "lao  2002-02-21 23:30:39.942229878 -0800",
            "tzu  2002-02-21 23:30:50.442260588 -0800",
        );
        assert_eq!(file.from, "lao");
        assert_eq!(file.to, "tzu");
    }

    #[test]
    fn hg_markers_strip_git_style_prefixes() {
        let mut file = File::default();
        apply_file_markers(
            &mut file,
            Dialect::Plain,
            "a/hello.c\tFri Aug 26 01:21:28 2005 -0700",
            "b/hello.c\tSat Aug 16 22:05:04 2008 +0200",
        );
        assert_eq!(file.from, "hello.c");
        assert_eq!(file.to, "hello.c");
    }

    #[test]
    fn plain_markers_keep_unpaired_prefixes() {
        let mut file = File::default();
        apply_file_markers(&mut file, Dialect::Plain, "a/x.txt", "a/x.txt.orig");
        assert_eq!(file.from, "a/x.txt");
        assert_eq!(file.to, "a/x.txt.orig");
    }

    #[test]
    fn svn_markers_are_verbatim() {
        let mut file = start_svn_file("a/text.txt").unwrap();
        apply_file_markers(
            &mut file,
            Dialect::Svn,
            "a/text.txt\t(revision 6)",
            "a/text.txt\t(working copy)",
        );
        assert_eq!(file.from, "a/text.txt");
        assert_eq!(file.to, "a/text.txt");
    }

    #[test]
    fn dev_null_markers_set_flags() {
        let mut file = start_git_file("a/test b/test").unwrap();
        apply_file_markers(&mut file, Dialect::Git, "/dev/null", "b/test");
        assert!(file.new);
        assert!(!file.deleted);
        assert_eq!(file.from, DEV_NULL);
        assert_eq!(file.to, "test");

        let mut file = start_git_file("a/test b/test").unwrap();
        apply_file_markers(&mut file, Dialect::Git, "b/test", "/dev/null");
        assert!(file.deleted);
        assert_eq!(file.from, "test");
        assert_eq!(file.to, DEV_NULL);
    }
}
