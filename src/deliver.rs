//! Final delivery of a rendered document

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::clipboard::{self, ClipboardError};

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("cannot write '{path}': {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

/// Where the rendered text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Clipboard,
    Stdout,
    File(PathBuf),
}

impl Delivery {
    /// Deliver `text`. `out` receives it for [`Delivery::Stdout`].
    pub fn deliver<W: Write>(&self, text: &str, out: &mut W) -> Result<(), DeliveryError> {
        match self {
            Delivery::Clipboard => clipboard::copy_to_clipboard(text)?,
            Delivery::Stdout => {
                writeln!(out, "{}", text)?;
                out.flush()?;
            }
            Delivery::File(path) => {
                fs::write(path, format!("{}\n", text)).map_err(|source| DeliveryError::File {
                    path: path.clone(),
                    source,
                })?;
            }
        }
        Ok(())
    }

    /// Success notice shown to the user.
    pub fn success_message(&self, dir_count: usize, file_count: usize) -> String {
        let action = match self {
            Delivery::Clipboard => "Copied to clipboard!".to_string(),
            Delivery::Stdout => "Printed to stdout.".to_string(),
            Delivery::File(path) => format!("Wrote {}.", path.display()),
        };
        format!(
            "WorkspaceTree: {} ({} folders, {} files)",
            action, dir_count, file_count
        )
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_stdout_delivery_writes_text() {
        let mut out = Vec::new();
        Delivery::Stdout.deliver("root/\n  a.txt", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "root/\n  a.txt\n");
    }

    #[test]
    fn test_file_delivery() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tree.md");
        let mut out = Vec::new();

        Delivery::File(path.clone()).deliver("root/", &mut out).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "root/\n");
        assert!(out.is_empty());
    }

    #[test]
    fn test_file_delivery_error_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir/tree.md");
        let err = Delivery::File(path).deliver("root/", &mut Vec::<u8>::new()).unwrap_err();
        assert!(err.to_string().contains("missing-dir"));
    }

    #[test]
    fn test_success_message() {
        assert_eq!(
            Delivery::Clipboard.success_message(3, 10),
            "WorkspaceTree: Copied to clipboard! (3 folders, 10 files)"
        );
    }
}
