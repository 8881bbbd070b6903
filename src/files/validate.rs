// src/files/validate.rs
// Range and position validation against the current line count

use crate::error::{LinesmithError, Result};

use super::edit::LineEdit;

/// Validate a 1-based inclusive line range against `total` lines.
/// Returns the equivalent 0-based inclusive index pair.
pub fn check_range(total: usize, start: i64, end: i64) -> Result<(usize, usize)> {
    if start < 1 || end > total as i64 || start > end {
        return Err(LinesmithError::bad_range(start, end, total));
    }
    Ok((start as usize - 1, end as usize - 1))
}

/// Validate every entry of an edit batch up front. The first out-of-range
/// entry fails the whole batch; nothing is applied on failure.
pub fn check_edits(total: usize, edits: &[LineEdit]) -> Result<()> {
    for edit in edits {
        if edit.line < 1 || edit.line > total as i64 {
            return Err(LinesmithError::bad_line(edit.line, total));
        }
    }
    Ok(())
}

/// Validate a 0-based insertion position. Position 0 means before the first
/// line, position `total` means after the last.
pub fn check_position(total: usize, position: i64) -> Result<usize> {
    if position < 0 || position > total as i64 {
        return Err(LinesmithError::bad_position(position, total));
    }
    Ok(position as usize)
}
