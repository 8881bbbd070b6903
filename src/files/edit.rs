// src/files/edit.rs
// Read, edit, insert, and delete by line number.
//
// Every mutation is a read -> validate -> transform in memory -> whole-file
// write sequence. The file on disk is never patched in place, and a failed
// validation commits nothing.

use std::path::Path;

use tracing::debug;

use crate::error::Result;

use super::io::{read_file, write_atomic};
use super::lines::{join_lines, split_lines, LineRecord};
use super::validate::{check_edits, check_position, check_range};

/// One entry of an edit batch: replace the content of a 1-based line.
#[derive(Debug, Clone)]
pub struct LineEdit {
    pub line: i64,
    pub content: String,
}

/// Result of a ranged read: the contiguous block and the addressable records.
/// Both shapes are returned because some callers want the text and others
/// want per-line addressing.
#[derive(Debug)]
pub struct ReadOutcome {
    pub total_lines: usize,
    pub text: String,
    pub records: Vec<LineRecord>,
}

#[derive(Debug)]
pub struct EditOutcome {
    pub edited_lines: Vec<usize>,
    pub total_lines: usize,
}

#[derive(Debug)]
pub struct InsertOutcome {
    pub total_lines: usize,
}

#[derive(Debug)]
pub struct DeleteOutcome {
    pub removed: usize,
    pub total_lines: usize,
}

/// Read an inclusive 1-based line range.
pub async fn read_lines(path: &Path, start: i64, end: i64) -> Result<ReadOutcome> {
    let content = read_file(path).await?;
    let lines = split_lines(&content);

    let (from, to) = check_range(lines.len(), start, end)?;

    let slice = &lines[from..=to];
    let records = slice
        .iter()
        .enumerate()
        .map(|(i, text)| LineRecord {
            line: from + i + 1,
            text: text.clone(),
        })
        .collect();

    Ok(ReadOutcome {
        total_lines: lines.len(),
        text: slice.join("\n"),
        records,
    })
}

/// Apply a batch of line replacements. The whole batch is validated against
/// the current line count before any entry is applied, so a batch either
/// fully succeeds or fully fails with the file unchanged.
pub async fn edit_lines(path: &Path, edits: &[LineEdit]) -> Result<EditOutcome> {
    let content = read_file(path).await?;
    let mut lines = split_lines(&content);

    check_edits(lines.len(), edits)?;

    let mut edited: Vec<usize> = Vec::with_capacity(edits.len());
    for edit in edits {
        lines[edit.line as usize - 1] = edit.content.clone();
        edited.push(edit.line as usize);
    }
    edited.sort_unstable();

    write_atomic(path, &join_lines(&lines)).await?;
    debug!(path = %path.display(), edited = edited.len(), "applied line edits");

    Ok(EditOutcome {
        edited_lines: edited,
        total_lines: lines.len(),
    })
}

/// Splice new lines in at a 0-based position (0 = before the first line,
/// n = after line n). No existing line is removed.
pub async fn insert_lines(path: &Path, position: i64, new_lines: &[String]) -> Result<InsertOutcome> {
    let content = read_file(path).await?;
    let mut lines = split_lines(&content);

    let at = check_position(lines.len(), position)?;
    lines.splice(at..at, new_lines.iter().cloned());

    write_atomic(path, &join_lines(&lines)).await?;
    debug!(path = %path.display(), inserted = new_lines.len(), at, "inserted lines");

    Ok(InsertOutcome {
        total_lines: lines.len(),
    })
}

/// Remove an inclusive 1-based line range.
pub async fn delete_lines(path: &Path, start: i64, end: i64) -> Result<DeleteOutcome> {
    let content = read_file(path).await?;
    let mut lines = split_lines(&content);

    let (from, to) = check_range(lines.len(), start, end)?;
    let removed: Vec<String> = lines.drain(from..=to).collect();

    write_atomic(path, &join_lines(&lines)).await?;
    debug!(path = %path.display(), removed = removed.len(), "deleted lines");

    Ok(DeleteOutcome {
        removed: removed.len(),
        total_lines: lines.len(),
    })
}
