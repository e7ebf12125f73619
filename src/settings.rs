//! Settings file handling
//!
//! Settings live in a small JSON document, by default `.workspacetree.json`
//! in the exported root:
//!
//! ```json
//! { "excludePatterns": ["node_modules", "target"] }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::tree::default_exclude_patterns;

/// Errors raised while loading a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot read settings file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, SettingsError>;

/// User settings. Absent keys fall back to built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub exclude_patterns: Option<Vec<String>>,
}

impl Settings {
    /// File looked up in the root when no explicit settings path is given.
    pub const FILE_NAME: &'static str = ".workspacetree.json";

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load settings from an explicit path; a missing file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `FILE_NAME` from `root` if it exists, otherwise use defaults.
    pub fn discover(root: &Path) -> Result<Self> {
        let path = root.join(Self::FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// The configured exclusion names, or the default set when unconfigured.
    pub fn exclude_patterns(&self) -> Vec<String> {
        self.exclude_patterns
            .clone()
            .unwrap_or_else(default_exclude_patterns)
    }
}
