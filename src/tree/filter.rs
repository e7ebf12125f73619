//! Entry filtering for tree walking

use super::config::ExportOptions;

/// Decide whether an entry is left out of the tree.
///
/// Exclusion names are matched literally and case-sensitively. Names starting
/// with `.` are dropped unless `options.include_hidden` is set.
pub fn should_exclude(name: &str, options: &ExportOptions, exclude_patterns: &[String]) -> bool {
    if exclude_patterns.iter().any(|pattern| pattern == name) {
        return true;
    }

    !options.include_hidden && name.starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn hidden(include_hidden: bool) -> ExportOptions {
        ExportOptions {
            include_hidden,
            ..Default::default()
        }
    }

    #[test]
    fn test_listed_names_always_excluded() {
        let set = patterns(&["node_modules", ".git", "dist"]);
        for name in &set {
            assert!(should_exclude(name, &hidden(false), &set));
            assert!(should_exclude(name, &hidden(true), &set));
        }
    }

    #[test]
    fn test_hidden_entries_follow_option() {
        let set = patterns(&["dist"]);
        assert!(should_exclude(".env", &hidden(false), &set));
        assert!(!should_exclude(".env", &hidden(true), &set));
        assert!(!should_exclude("env", &hidden(false), &set));
    }

    #[test]
    fn test_literal_case_sensitive_match() {
        let set = patterns(&["dist", "*.log"]);
        assert!(!should_exclude("Dist", &hidden(false), &set));
        assert!(!should_exclude("debug.log", &hidden(false), &set));
        assert!(should_exclude("*.log", &hidden(false), &set));
        assert!(!should_exclude("distribution", &hidden(false), &set));
    }

    #[test]
    fn test_empty_exclusion_set() {
        assert!(!should_exclude("node_modules", &hidden(false), &[]));
        assert!(should_exclude(".hidden", &hidden(false), &[]));
    }
}
