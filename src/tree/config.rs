//! Export options and traversal constants

use clap::ValueEnum;

/// Directories nested deeper than this below the root are never visited.
pub const MAX_DEPTH: usize = 50;

/// Names excluded when no exclusion list is configured.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "out",
    ".next",
    "__pycache__",
    ".DS_Store",
];

/// Owned copy of [`DEFAULT_EXCLUDE_PATTERNS`].
pub fn default_exclude_patterns() -> Vec<String> {
    DEFAULT_EXCLUDE_PATTERNS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// How a node's path is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PathFormat {
    /// Entry name only; depth is shown by indentation
    #[default]
    Relative,
    /// Absolute path with `/` separators
    Full,
}

/// Which renderer produces the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportType {
    #[default]
    Markdown,
    PlainText,
}

/// User choices for one export run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub include_hidden: bool,
    pub path_format: PathFormat,
    pub export_type: ExportType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ExportOptions::default();
        assert!(!options.include_hidden);
        assert_eq!(options.path_format, PathFormat::Relative);
        assert_eq!(options.export_type, ExportType::Markdown);
    }

    #[test]
    fn test_default_exclude_patterns() {
        let patterns = default_exclude_patterns();
        assert_eq!(patterns.len(), 7);
        assert!(patterns.contains(&"node_modules".to_string()));
        assert!(patterns.contains(&".DS_Store".to_string()));
    }

    #[test]
    fn test_path_format_value_names() {
        assert_eq!(PathFormat::from_str("relative", false), Ok(PathFormat::Relative));
        assert_eq!(PathFormat::from_str("full", false), Ok(PathFormat::Full));
        assert!(PathFormat::from_str("absolute", false).is_err());
    }
}
