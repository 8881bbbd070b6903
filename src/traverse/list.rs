// src/traverse/list.rs
// Directory listing: flat or depth-bounded recursive

use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::config::ignore::should_skip;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
        }
    }
}

/// One listed entry. Size and extension are populated for files in
/// recursive mode; the non-recursive listing is a simple name/kind tag.
#[derive(Debug, Clone)]
pub struct ListEntry {
    pub name: String,
    pub path: String,
    pub kind: EntryKind,
    pub size: Option<u64>,
    pub extension: Option<String>,
}

/// List `dir` either flat (direct children, file/directory tag only) or
/// recursively down to `max_depth`.
///
/// Depth counts from 0 at the root call: direct children sit at depth 0 and
/// recursion into a subdirectory is refused once its depth exceeds
/// `max_depth`, so entries are reported down to depth `max_depth` inclusive.
/// Excluded directory names are never descended into. An extension filter
/// (dot-prefixed, e.g. ".rs") admits matching files only; directories are
/// structural and always pass. Non-recursive mode ignores both the filter
/// and the depth bound.
pub fn list_directory(
    dir: &Path,
    recursive: bool,
    extensions: Option<&[String]>,
    max_depth: i64,
) -> Result<Vec<ListEntry>> {
    if !recursive {
        return list_flat(dir);
    }

    // root must be listable; nested failures are skipped during the walk
    fs::read_dir(dir)?;

    let mut entries = Vec::new();
    if max_depth < 0 {
        return Ok(entries);
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth as usize + 1)
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && should_skip(&e.file_name().to_string_lossy())));

    for entry in walker.filter_map(|r| r.ok()) {
        let name = entry.file_name().to_string_lossy().to_string();
        let path = entry.path().display().to_string();

        if entry.file_type().is_dir() {
            entries.push(ListEntry {
                name,
                path,
                kind: EntryKind::Directory,
                size: None,
                extension: None,
            });
        } else if entry.file_type().is_file() {
            let extension = entry
                .path()
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy()));

            if let Some(filter) = extensions {
                let keep = extension
                    .as_deref()
                    .is_some_and(|ext| filter.iter().any(|f| f == ext));
                if !keep {
                    continue;
                }
            }

            let size = entry.metadata().map(|m| m.len()).ok();
            entries.push(ListEntry {
                name,
                path,
                kind: EntryKind::File,
                size,
                extension,
            });
        }
    }

    debug!(dir = %dir.display(), total = entries.len(), "recursive listing");
    Ok(entries)
}

fn list_flat(dir: &Path) -> Result<Vec<ListEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let Ok(entry) = entry else {
            continue;
        };
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        entries.push(ListEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            path: entry.path().display().to_string(),
            kind,
            size: None,
            extension: None,
        });
    }
    Ok(entries)
}
