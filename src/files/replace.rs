// src/files/replace.rs
// Pattern substitution over whole-file content

use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::error::{LinesmithError, Result};

use super::io::{read_file, write_atomic};

#[derive(Debug)]
pub struct ReplaceOutcome {
    pub match_count: usize,
}

/// Compile `pattern` with caller-supplied flag characters and substitute
/// `replacement` over the full content of `path`.
///
/// Flags: `g` (replace every match; without it only the first), `i`, `m`,
/// `s` mapped onto inline regex flags. Any other flag character is a
/// pattern error. `$1`-style group references work in the replacement.
///
/// The match count is taken from the content before replacement, and the
/// file is rewritten even when nothing matched: a zero-match replace is a
/// successful no-op write, not an error.
pub async fn replace_pattern(
    path: &Path,
    pattern: &str,
    replacement: &str,
    flags: &str,
) -> Result<ReplaceOutcome> {
    let mut global = false;
    let mut inline = String::new();
    for c in flags.chars() {
        match c {
            'g' => global = true,
            'i' | 'm' | 's' => inline.push(c),
            _ => {
                return Err(LinesmithError::Pattern(format!(
                    "unsupported regex flag '{}'",
                    c
                )));
            }
        }
    }

    let full_pattern = if inline.is_empty() {
        pattern.to_string()
    } else {
        format!("(?{}){}", inline, pattern)
    };
    let re = Regex::new(&full_pattern)?;

    let content = read_file(path).await?;

    let match_count = if global {
        re.find_iter(&content).count()
    } else {
        usize::from(re.is_match(&content))
    };

    let new_content = if global {
        re.replace_all(&content, replacement)
    } else {
        re.replace(&content, replacement)
    };

    write_atomic(path, &new_content).await?;
    debug!(path = %path.display(), match_count, "pattern replace");

    Ok(ReplaceOutcome { match_count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn fixture(content: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.txt");
        tokio::fs::write(&path, content).await.unwrap();
        (dir, path)
    }

    #[tokio::test]
    async fn test_global_replace_counts_all_matches() {
        let (_dir, path) = fixture("foo bar foo baz foo").await;

        let out = replace_pattern(&path, "foo", "qux", "g").await.unwrap();
        assert_eq!(out.match_count, 3);

        let on_disk = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(on_disk, "qux bar qux baz qux");
    }

    #[tokio::test]
    async fn test_non_global_replaces_first_only() {
        let (_dir, path) = fixture("foo foo").await;

        let out = replace_pattern(&path, "foo", "bar", "").await.unwrap();
        assert_eq!(out.match_count, 1);

        let on_disk = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(on_disk, "bar foo");
    }

    #[tokio::test]
    async fn test_count_reflects_pre_replace_content() {
        // replacement re-introduces the pattern; the count must not see it
        let (_dir, path) = fixture("ab ab").await;

        let out = replace_pattern(&path, "ab", "abab", "g").await.unwrap();
        assert_eq!(out.match_count, 2);

        let on_disk = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(on_disk, "abab abab");
    }

    #[tokio::test]
    async fn test_zero_match_is_successful_noop_write() {
        let (_dir, path) = fixture("nothing here").await;

        let out = replace_pattern(&path, "absent", "x", "g").await.unwrap();
        assert_eq!(out.match_count, 0);

        let on_disk = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(on_disk, "nothing here");
    }

    #[tokio::test]
    async fn test_case_insensitive_flag() {
        let (_dir, path) = fixture("Foo FOO foo").await;

        let out = replace_pattern(&path, "foo", "x", "gi").await.unwrap();
        assert_eq!(out.match_count, 3);
    }

    #[tokio::test]
    async fn test_multiline_flag_anchors_per_line() {
        let (_dir, path) = fixture("a\nb\na").await;

        let out = replace_pattern(&path, "^a$", "z", "gm").await.unwrap();
        assert_eq!(out.match_count, 2);

        let on_disk = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(on_disk, "z\nb\nz");
    }

    #[tokio::test]
    async fn test_group_reference_in_replacement() {
        let (_dir, path) = fixture("name: alice").await;

        replace_pattern(&path, r"name: (\w+)", "user=$1", "g")
            .await
            .unwrap();

        let on_disk = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(on_disk, "user=alice");
    }

    #[tokio::test]
    async fn test_invalid_pattern_is_pattern_error_and_no_write() {
        let (_dir, path) = fixture("content").await;

        let err = replace_pattern(&path, "[unclosed", "x", "g").await.unwrap_err();
        assert!(matches!(err, LinesmithError::Pattern(_)));

        let on_disk = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(on_disk, "content");
    }

    #[tokio::test]
    async fn test_unknown_flag_is_pattern_error() {
        let (_dir, path) = fixture("content").await;

        let err = replace_pattern(&path, "c", "x", "gz").await.unwrap_err();
        assert!(matches!(err, LinesmithError::Pattern(_)));
        assert!(err.to_string().contains('z'));
    }
}
