//! Registry of plugin wordlists bundled with plecost.
//!
//! An embedded wordlist is referenced by its short name (for example
//! `plugin_list_200.txt`) and resolves to a file inside the data directory.
//! Any other value is treated as a filesystem path and must exist.

use crate::error::{PlecostError, Result};
use crate::platform;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Names of the bundled wordlists, smallest first.
pub const EMBEDDED_WORDLISTS: &[&str] = &[
    "plugin_list_10.txt",
    "plugin_list_50.txt",
    "plugin_list_100.txt",
    "plugin_list_200.txt",
    "plugin_list_250.txt",
    "plugin_list_1000.txt",
    "plugin_list_huge.txt",
];

/// Wordlist used when none is requested.
pub const DEFAULT_WORDLIST: &str = "plugin_list_200.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordlistRegistry {
    data_dir: PathBuf,
}

impl WordlistRegistry {
    /// Registry rooted at [`platform::wordlist_dir`].
    ///
    /// # Errors
    ///
    /// Returns [`PlecostError::Configuration`] when the platform reports no
    /// data directory and `PLECOST_DATA_DIR` is unset.
    pub fn embedded() -> Result<Self> {
        let data_dir = platform::wordlist_dir().ok_or_else(|| {
            PlecostError::configuration(
                "wordlist",
                format!("no data directory found, set {}", platform::DATA_DIR_ENV),
            )
        })?;
        Ok(Self::with_data_dir(data_dir))
    }

    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn names(&self) -> &'static [&'static str] {
        EMBEDDED_WORDLISTS
    }

    pub fn contains(&self, name: &str) -> bool {
        EMBEDDED_WORDLISTS.contains(&name)
    }

    /// Storage path of an embedded wordlist, or `None` for unknown names.
    pub fn path_of(&self, name: &str) -> Option<PathBuf> {
        self.contains(name).then(|| self.data_dir.join(name))
    }

    pub fn default_path(&self) -> PathBuf {
        self.data_dir.join(DEFAULT_WORDLIST)
    }

    /// Resolves a requested wordlist to a path.
    ///
    /// Embedded names map into the data directory, `None` maps to the
    /// default wordlist, and anything else must be an existing path.
    ///
    /// # Errors
    ///
    /// Returns [`PlecostError::WordListNotFound`] when the value is neither
    /// an embedded name nor an existing path.
    pub fn resolve(&self, requested: Option<&str>) -> Result<PathBuf> {
        let resolved = match requested {
            Some(name) if self.contains(name) => self.data_dir.join(name),
            None => self.default_path(),
            Some(path) => {
                let path = PathBuf::from(path);
                if !path.exists() {
                    return Err(PlecostError::WordListNotFound { path });
                }
                path
            }
        };

        debug!(requested = ?requested, resolved = %resolved.display(), "Resolved wordlist.");
        Ok(resolved)
    }
}
