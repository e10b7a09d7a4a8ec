//! Rename detection over a fully parsed file list.

use log::debug;

use super::types::{ChangeType, File};

/// Pair purely deleted files with purely new files of identical content.
///
/// Each matched pair is replaced by a single `renamed` record at the
/// earlier of the two positions. Matching is exact, line for line, on the
/// text of the removed lines versus the text of the added lines; empty and
/// binary files are never paired since there is no content to compare.
pub fn detect_renames(files: Vec<File>) -> Vec<File> {
    let payloads: Vec<Option<Vec<&str>>> = files.iter().map(payload).collect();
    let mut paired = vec![false; files.len()];
    let mut renamed_at: Vec<Option<File>> = vec![None; files.len()];

    for (del_idx, deleted) in files.iter().enumerate() {
        if !is_pure_delete(deleted) {
            continue;
        }
        let Some(removed) = &payloads[del_idx] else {
            continue;
        };

        let matched = files.iter().enumerate().position(|(new_idx, added)| {
            !paired[new_idx] && is_pure_add(added) && payloads[new_idx].as_ref() == Some(removed)
        });

        if let Some(new_idx) = matched {
            debug!("detected rename {} -> {}", deleted.from, files[new_idx].to);
            paired[del_idx] = true;
            paired[new_idx] = true;
            renamed_at[del_idx.min(new_idx)] =
                Some(File::renamed(deleted.from.clone(), files[new_idx].to.clone()));
        }
    }

    let mut result = Vec::with_capacity(files.len());
    for (idx, file) in files.into_iter().enumerate() {
        if !paired[idx] {
            result.push(file);
        } else if let Some(renamed) = renamed_at[idx].take() {
            result.push(renamed);
        }
    }
    result
}

fn is_pure_delete(file: &File) -> bool {
    file.deleted && !file.new && !file.binary
}

fn is_pure_add(file: &File) -> bool {
    file.new && !file.deleted && !file.binary
}

/// The changed-line text a rename has to preserve: removed lines of a
/// deleted file, added lines of a new file. `None` when there is none.
fn payload(file: &File) -> Option<Vec<&str>> {
    let wanted = if is_pure_delete(file) {
        ChangeType::Del
    } else if is_pure_add(file) {
        ChangeType::Add
    } else {
        return None;
    };

    let lines: Vec<&str> = file
        .changes()
        .filter(|change| change.kind == wanted)
        .map(|change| change.text())
        .collect();

    if lines.is_empty() { None } else { Some(lines) }
}
