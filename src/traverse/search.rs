// src/traverse/search.rs
// Recursive per-line content search

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::config::ignore::should_skip;
use crate::config::SEARCH_RESULT_CAP;
use crate::error::Result;

/// A single line-level hit: absolute file path, 1-based line number,
/// trimmed line text.
#[derive(Debug, Clone)]
pub struct SearchMatch {
    pub file: String,
    pub line: usize,
    pub text: String,
}

#[derive(Debug)]
pub struct SearchOutcome {
    /// Matches truncated to [`SEARCH_RESULT_CAP`].
    pub matches: Vec<SearchMatch>,
    /// Count before truncation.
    pub total_matches: usize,
}

/// Search every text file under `dir` for `pattern`.
///
/// A line matches when it contains the pattern as a literal substring OR
/// when the pattern, compiled as a regex, matches the line. Both checks run
/// and either suffices; an uncompilable pattern degrades to literal-only.
/// This deliberately broadens recall and must not be narrowed to regex-only.
///
/// Excluded directory names are never descended into regardless of
/// `recursive`. Files that cannot be read as text are silently skipped; a
/// subdirectory that cannot be listed is skipped too. Only a root listing
/// failure is an error. Every eligible file is visited and every match
/// collected before the result is truncated to the budget.
pub fn search(dir: &Path, pattern: &str, recursive: bool) -> Result<SearchOutcome> {
    let re = Regex::new(pattern).ok();

    let mut matches = Vec::new();
    let entries = fs::read_dir(dir)?;
    scan_entries(entries, pattern, re.as_ref(), recursive, &mut matches);

    let total_matches = matches.len();
    matches.truncate(SEARCH_RESULT_CAP);
    debug!(dir = %dir.display(), total_matches, "search complete");

    Ok(SearchOutcome {
        matches,
        total_matches,
    })
}

fn scan_entries(
    entries: fs::ReadDir,
    pattern: &str,
    re: Option<&Regex>,
    recursive: bool,
    out: &mut Vec<SearchMatch>,
) {
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();

        if file_type.is_dir() {
            if should_skip(&entry.file_name().to_string_lossy()) {
                continue;
            }
            if recursive {
                // nested listing failures are skipped, not fatal
                if let Ok(sub) = fs::read_dir(&path) {
                    scan_entries(sub, pattern, re, recursive, out);
                }
            }
        } else if file_type.is_file() {
            scan_file(&path, pattern, re, out);
        }
    }
}

fn scan_file(path: &Path, pattern: &str, re: Option<&Regex>, out: &mut Vec<SearchMatch>) {
    // unreadable or non-UTF-8 files are silently skipped
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };

    for (idx, line) in content.split('\n').enumerate() {
        let hit = line.contains(pattern) || re.is_some_and(|r| r.is_match(line));
        if hit {
            out.push(SearchMatch {
                file: path.display().to_string(),
                line: idx + 1,
                text: line.trim().to_string(),
            });
        }
    }
}
