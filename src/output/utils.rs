//! Shared utility functions for renderers

use std::path::MAIN_SEPARATOR;

use crate::tree::{ExportOptions, PathFormat, TreeNode};

/// Display string for a node: its name, or its absolute path with `/` separators.
pub fn format_node_path(node: &TreeNode, options: &ExportOptions) -> String {
    match options.path_format {
        PathFormat::Relative => node.name().to_string(),
        PathFormat::Full => normalize_separators(&node.path().to_string_lossy()),
    }
}

/// Replace the host separator with `/`. Other characters, `\` included on
/// Unix, are part of entry names and stay as they are.
pub fn normalize_separators(path: &str) -> String {
    path.replace(MAIN_SEPARATOR, "/")
}

/// Connector drawn in front of a sibling.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Prefix for the children of a node drawn with `prefix`.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}
