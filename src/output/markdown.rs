//! Markdown output formatting
//!
//! Draws the tree with box connectors and folder/document glyphs inside a
//! fenced code block, followed by a one-line summary:
//!
//! ````text
//! ```
//! 📁 project/
//!    ├── 📁 src/
//!    │   └── 📄 main.rs
//!    └── 📄 README.md
//! ```
//!
//! > Generated by **WorkspaceTree** — 2 files, 1 folders
//! ````

use crate::tree::{ExportOptions, TreeNode};

use super::utils::{connector, continuation_prefix, format_node_path};
use super::{GenerationResult, TreeRenderer};

const ROOT_INDENT: &str = "   ";
const FENCE: &str = "```";

/// Markdown renderer with connectors and glyphs.
pub struct MarkdownRenderer {
    options: ExportOptions,
}

impl MarkdownRenderer {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    fn render_nodes(&self, nodes: &[TreeNode], lines: &mut Vec<String>, indent: &str) -> (usize, usize) {
        let mut dir_count = 0;
        let mut file_count = 0;

        for (i, node) in nodes.iter().enumerate() {
            let is_last = i == nodes.len() - 1;
            let display = format_node_path(node, &self.options);

            if node.is_dir() {
                dir_count += 1;
                lines.push(format!("{}{}📁 {}/", indent, connector(is_last), display));
                let child_indent = continuation_prefix(indent, is_last);
                let (dirs, files) = self.render_nodes(node.children(), lines, &child_indent);
                dir_count += dirs;
                file_count += files;
            } else {
                file_count += 1;
                lines.push(format!("{}{}📄 {}", indent, connector(is_last), display));
            }
        }

        (dir_count, file_count)
    }
}

impl TreeRenderer for MarkdownRenderer {
    fn render(&self, root: &TreeNode) -> GenerationResult {
        let mut lines = vec![FENCE.to_string(), format!("📁 {}/", root.name())];
        let (dir_count, file_count) = self.render_nodes(root.children(), &mut lines, ROOT_INDENT);
        lines.push(FENCE.to_string());
        lines.push(String::new());
        lines.push(format!(
            "> Generated by **WorkspaceTree** — {} files, {} folders",
            file_count, dir_count
        ));

        GenerationResult {
            text: lines.join("\n"),
            file_count,
            dir_count,
        }
    }
}
