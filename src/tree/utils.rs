//! Shared helpers for tree walking

use std::cmp::Ordering;
use std::path::Path;

/// Get the display name of a path, falling back to the whole path for roots like `/`.
pub fn get_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Sibling order: directories before files, then case-insensitive by name.
///
/// Names equal ignoring case fall back to a byte comparison so the order is total.
pub fn compare_entries(a_is_dir: bool, a_name: &str, b_is_dir: bool, b_name: &str) -> Ordering {
    b_is_dir
        .cmp(&a_is_dir)
        .then_with(|| a_name.to_lowercase().cmp(&b_name.to_lowercase()))
        .then_with(|| a_name.cmp(b_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_name() {
        assert_eq!(get_name(Path::new("/home/user/project")), "project");
        assert_eq!(get_name(Path::new("relative/dir")), "dir");
        assert_eq!(get_name(Path::new("/")), "/");
    }

    #[test]
    fn test_directories_before_files() {
        assert_eq!(compare_entries(true, "zeta", false, "alpha"), Ordering::Less);
        assert_eq!(compare_entries(false, "alpha", true, "zeta"), Ordering::Greater);
    }

    #[test]
    fn test_case_insensitive_within_group() {
        assert_eq!(compare_entries(false, "B.txt", false, "a.txt"), Ordering::Greater);
        assert_eq!(compare_entries(false, "a.txt", false, "B.txt"), Ordering::Less);
        assert_eq!(compare_entries(true, "Src", true, "docs"), Ordering::Greater);
    }

    #[test]
    fn test_sort_is_stable_for_case_variants() {
        let mut names = vec!["readme", "README", "Readme"];
        names.sort_by(|a, b| compare_entries(false, a, false, b));
        assert_eq!(names, vec!["README", "Readme", "readme"]);
    }
}
