//! WorkspaceTree - export a directory tree as Markdown or plain text

pub mod clipboard;
pub mod deliver;
pub mod log;
pub mod output;
pub mod settings;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use deliver::{Delivery, DeliveryError};
pub use log::{LogSink, MemoryLog, StderrLog};
pub use output::{
    GenerationResult, MarkdownRenderer, PlainTextRenderer, TreeRenderer, format_node_path,
    generate_tree, render_json, renderer_for,
};
pub use settings::{Settings, SettingsError};
pub use tree::{
    DEFAULT_EXCLUDE_PATTERNS, DirReader, Entry, EntryKind, ExportOptions, ExportType, FsReader,
    MAX_DEPTH, PathFormat, TreeNode, TreeWalker, build_tree, default_exclude_patterns,
    should_exclude,
};
