//! In-memory tree built by the walker

use std::path::{Path, PathBuf};

use serde::Serialize;

/// One filesystem entry. Only directories carry children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
    },
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        TreeNode::File {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn dir(name: impl Into<String>, path: impl Into<PathBuf>, children: Vec<TreeNode>) -> Self {
        TreeNode::Dir {
            name: name.into(),
            path: path.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            TreeNode::File { path, .. } => path,
            TreeNode::Dir { path, .. } => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    /// Children of a directory; always empty for files.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children.as_slice(),
        }
    }

    /// Count `(directories, files)` below this node, excluding the node itself.
    pub fn count(&self) -> (usize, usize) {
        self.children()
            .iter()
            .fold((0, 0), |(dirs, files), child| {
                let (child_dirs, child_files) = child.count();
                if child.is_dir() {
                    (dirs + 1 + child_dirs, files)
                } else {
                    (dirs, files + 1)
                }
            })
    }
}
