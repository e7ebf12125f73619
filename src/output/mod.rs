//! Tree rendering
//!
//! This module turns a built `TreeNode` into a text document:
//! - Markdown with connectors and glyphs, fenced, with a summary line
//! - Plain text with indentation only
//! - JSON (the serialized tree)
//!
//! # Module Structure
//!
//! - `utils` - Path formatting and prefix calculation
//! - `markdown` - Markdown renderer
//! - `plain` - Plain-text renderer
//! - `json` - JSON output

mod json;
mod markdown;
mod plain;
mod utils;

use std::path::Path;

use crate::log::LogSink;
use crate::tree::{ExportOptions, ExportType, TreeNode, build_tree};

// Re-export public types and functions
pub use json::render_json;
pub use markdown::MarkdownRenderer;
pub use plain::PlainTextRenderer;
pub use utils::{connector, continuation_prefix, format_node_path, normalize_separators};

/// Rendered document plus the number of entries it lists (root excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub text: String,
    pub file_count: usize,
    pub dir_count: usize,
}

/// A stateless walk over a built tree.
pub trait TreeRenderer {
    fn render(&self, root: &TreeNode) -> GenerationResult;
}

/// Renderer selected by `export_type`.
pub fn renderer_for(options: ExportOptions) -> Box<dyn TreeRenderer> {
    match options.export_type {
        ExportType::Markdown => Box::new(MarkdownRenderer::new(options)),
        ExportType::PlainText => Box::new(PlainTextRenderer::new(options)),
    }
}

/// Walk `root` and render it with the renderer chosen by `options`.
pub fn generate_tree(
    root: &Path,
    options: &ExportOptions,
    exclude_patterns: &[String],
    log: &dyn LogSink,
) -> GenerationResult {
    let tree = build_tree(root, options, exclude_patterns, log);
    renderer_for(*options).render(&tree)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::log::MemoryLog;
    use crate::tree::PathFormat;

    /// `a.txt`, `.env` and `sub/b.txt` under a fresh root.
    fn sample_root() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join(".env"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/b.txt"), "").unwrap();
        dir
    }

    fn plain(include_hidden: bool) -> ExportOptions {
        ExportOptions {
            include_hidden,
            path_format: PathFormat::Relative,
            export_type: ExportType::PlainText,
        }
    }

    #[test]
    fn test_plaintext_scenario_without_hidden() {
        let dir = sample_root();
        let log = MemoryLog::new();

        let result = generate_tree(dir.path(), &plain(false), &[], &log);

        let lines: Vec<&str> = result.text.lines().collect();
        assert_eq!(lines[1], "  sub/");
        assert_eq!(lines[2], "    b.txt");
        assert_eq!(lines[3], "  a.txt");
        assert!(!result.text.contains(".env"));
        assert_eq!(result.file_count, 2);
        assert_eq!(result.dir_count, 1);
    }

    #[test]
    fn test_plaintext_scenario_with_hidden() {
        let dir = sample_root();
        let log = MemoryLog::new();

        let result = generate_tree(dir.path(), &plain(true), &[], &log);

        assert!(result.text.lines().any(|l| l == "  .env"));
        assert_eq!(result.file_count, 3);
        assert_eq!(result.dir_count, 1);
    }

    #[test]
    fn test_counts_match_tree() {
        let dir = sample_root();
        fs::create_dir_all(dir.path().join("sub/nested/empty")).unwrap();
        fs::write(dir.path().join("sub/nested/c.rs"), "").unwrap();
        let log = MemoryLog::new();

        for export_type in [ExportType::Markdown, ExportType::PlainText] {
            let options = ExportOptions {
                export_type,
                ..Default::default()
            };
            let tree = build_tree(dir.path(), &options, &[], &log);
            let result = renderer_for(options).render(&tree);
            assert_eq!((result.dir_count, result.file_count), tree.count());
            assert_eq!(result.dir_count, 3);
            assert_eq!(result.file_count, 3);
        }
    }

    #[test]
    fn test_renderer_selection() {
        let tree = TreeNode::dir("w", "/w", vec![TreeNode::file("a.txt", "/w/a.txt")]);

        let markdown = renderer_for(ExportOptions::default()).render(&tree);
        assert!(markdown.text.starts_with("```"));

        let plain = renderer_for(plain(false)).render(&tree);
        assert_eq!(plain.text, "w/\n  a.txt");
    }
}
