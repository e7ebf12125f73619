//! TreeWalker - builds the full tree in memory

use std::io;
use std::path::Path;

use crate::log::LogSink;

use super::config::{ExportOptions, MAX_DEPTH};
use super::filter::should_exclude;
use super::node::TreeNode;
use super::reader::{DirReader, Entry, EntryKind, FsReader};
use super::utils::{compare_entries, get_name};

/// Tree walker that builds the full tree in memory.
///
/// Unreadable directories and the depth cap are reported to the log sink;
/// the walk itself never fails.
pub struct TreeWalker<'a> {
    options: ExportOptions,
    exclude_patterns: Vec<String>,
    reader: Box<dyn DirReader + 'a>,
    log: &'a dyn LogSink,
}

impl<'a> TreeWalker<'a> {
    pub fn new(options: &ExportOptions, exclude_patterns: &[String], log: &'a dyn LogSink) -> Self {
        Self {
            options: *options,
            exclude_patterns: exclude_patterns.to_vec(),
            reader: Box::new(FsReader),
            log,
        }
    }

    /// List directories through `reader` instead of the filesystem.
    pub fn with_reader(mut self, reader: impl DirReader + 'a) -> Self {
        self.reader = Box::new(reader);
        self
    }

    pub fn walk(&self, root: &Path) -> TreeNode {
        self.build_tree(root, 0)
    }

    /// Build the node for the directory at `path`, which sits `depth` levels below the root.
    pub fn build_tree(&self, path: &Path, depth: usize) -> TreeNode {
        let name = get_name(path);

        let entries = match self.read_entries(path) {
            Ok(entries) => entries,
            Err(e) => {
                self.log.warn(&format!(
                    "Cannot read directory \"{}\": {}",
                    path.display(),
                    e
                ));
                return TreeNode::dir(name, path, Vec::new());
            }
        };

        let mut children = Vec::new();

        for entry in entries {
            if should_exclude(&entry.name, &self.options, &self.exclude_patterns) {
                continue;
            }

            match entry.kind {
                EntryKind::Dir if depth < MAX_DEPTH => {
                    children.push(self.build_tree(&entry.path, depth + 1));
                }
                EntryKind::Dir => {
                    self.log.warn(&format!(
                        "Max depth ({}) reached at \"{}\". Skipping subtree.",
                        MAX_DEPTH,
                        entry.path.display()
                    ));
                }
                EntryKind::File => children.push(TreeNode::file(entry.name, entry.path)),
                EntryKind::Other => {}
            }
        }

        TreeNode::dir(name, path, children)
    }

    /// Read and sort the immediate entries of a directory.
    fn read_entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
        let mut entries = self.reader.read_dir(path)?;
        entries.sort_by(|a, b| {
            compare_entries(
                a.kind == EntryKind::Dir,
                &a.name,
                b.kind == EntryKind::Dir,
                &b.name,
            )
        });
        Ok(entries)
    }
}

/// Build the tree rooted at `root`, starting at depth 0.
pub fn build_tree(
    root: &Path,
    options: &ExportOptions,
    exclude_patterns: &[String],
    log: &dyn LogSink,
) -> TreeNode {
    TreeWalker::new(options, exclude_patterns, log).walk(root)
}
