//! Plain-text output formatting

use crate::tree::{ExportOptions, TreeNode};

use super::utils::format_node_path;
use super::{GenerationResult, TreeRenderer};

const INDENT_UNIT: &str = "  ";

/// Indentation-only renderer, suitable for READMEs.
pub struct PlainTextRenderer {
    options: ExportOptions,
}

impl PlainTextRenderer {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    fn render_nodes(&self, nodes: &[TreeNode], lines: &mut Vec<String>, indent: &str) -> (usize, usize) {
        let mut dir_count = 0;
        let mut file_count = 0;

        for node in nodes {
            let display = format_node_path(node, &self.options);

            if node.is_dir() {
                dir_count += 1;
                lines.push(format!("{}{}/", indent, display));
                let child_indent = format!("{}{}", indent, INDENT_UNIT);
                let (dirs, files) = self.render_nodes(node.children(), lines, &child_indent);
                dir_count += dirs;
                file_count += files;
            } else {
                file_count += 1;
                lines.push(format!("{}{}", indent, display));
            }
        }

        (dir_count, file_count)
    }
}

impl TreeRenderer for PlainTextRenderer {
    fn render(&self, root: &TreeNode) -> GenerationResult {
        let mut lines = vec![format!("{}/", root.name())];
        let (dir_count, file_count) = self.render_nodes(root.children(), &mut lines, INDENT_UNIT);

        GenerationResult {
            text: lines.join("\n"),
            file_count,
            dir_count,
        }
    }
}
