//! Directory tree walking logic
//!
//! `TreeWalker` reads one directory level at a time, drops excluded and
//! hidden entries, sorts the rest (directories first) and recurses until
//! `MAX_DEPTH`. The result is a `TreeNode` owned by the caller.

mod config;
mod filter;
mod node;
mod reader;
mod utils;
mod walker;

// Re-export public types
pub use config::{
    DEFAULT_EXCLUDE_PATTERNS, ExportOptions, ExportType, MAX_DEPTH, PathFormat,
    default_exclude_patterns,
};
pub use filter::should_exclude;
pub use node::TreeNode;
pub use reader::{DirReader, Entry, EntryKind, FsReader};
pub use utils::{compare_entries, get_name};
pub use walker::{TreeWalker, build_tree};
