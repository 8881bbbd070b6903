// src/files/lines.rs
// Line index: split whole-file content into lines and back

/// A single addressable line. Line numbers are 1-based externally;
/// index 0 of a split corresponds to line 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    pub line: usize,
    pub text: String,
}

/// Split content on the newline character only. Carriage returns are left
/// in place: "fixing" them would silently change the byte layout of edited
/// files, so mixed terminators survive a round trip untouched.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split('\n').map(str::to_string).collect()
}

/// Join lines with the newline character. Inverse of [`split_lines`]:
/// `join_lines(&split_lines(c)) == c` for any `c`.
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}
