// src/config/ignore.rs
// Centralized directory exclusion list shared by search and listing

/// Directories never descended into during traversal: version-control
/// metadata and the dependency cache.
pub const SKIP_DIRS: &[&str] = &[".git", "node_modules"];

/// Check if a directory entry name is on the fixed exclusion list.
pub fn should_skip(name: &str) -> bool {
    SKIP_DIRS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_vcs_metadata() {
        assert!(should_skip(".git"));
    }

    #[test]
    fn test_skips_dependency_cache() {
        assert!(should_skip("node_modules"));
    }

    #[test]
    fn test_keeps_ordinary_names() {
        assert!(!should_skip("src"));
        assert!(!should_skip(".gitignore"));
        assert!(!should_skip("node_modules_backup"));
    }
}
