//! JSON output formatting

use crate::tree::TreeNode;

use super::GenerationResult;

/// Serialize the tree as pretty-printed JSON, with counts taken from the tree.
pub fn render_json(node: &TreeNode) -> serde_json::Result<GenerationResult> {
    let text = serde_json::to_string_pretty(node)?;
    let (dir_count, file_count) = node.count();
    Ok(GenerationResult {
        text,
        file_count,
        dir_count,
    })
}
