//! Directory listing used by the walker

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What an entry is, taken from the entry itself without following links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    /// Symlinks, sockets, devices and the like.
    Other,
}

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Source of directory listings for [`TreeWalker`](super::TreeWalker).
pub trait DirReader {
    /// List the immediate entries of `path` in any order.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<Entry>>;
}

/// Lists directories on the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl DirReader for FsReader {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<Entry>> {
        let entries = fs::read_dir(path)?
            .filter_map(|e| e.ok())
            .filter_map(|e| {
                let file_type = e.file_type().ok()?;
                let kind = if file_type.is_dir() {
                    EntryKind::Dir
                } else if file_type.is_file() {
                    EntryKind::File
                } else {
                    EntryKind::Other
                };
                Some(Entry {
                    name: e.file_name().to_string_lossy().to_string(),
                    path: e.path(),
                    kind,
                })
            })
            .collect();
        Ok(entries)
    }
}
