//! Error types shared by every part of the library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while validating options, resolving wordlists or
/// comparing versions.
///
/// Every variant is produced eagerly at construction time, so no value is
/// ever handed back in a partially valid state.
#[derive(Debug, Error)]
pub enum PlecostError {
    /// A required option is missing or holds an unusable value.
    #[error("Invalid configuration for `{field}`: {reason}")]
    Configuration { field: &'static str, reason: String },

    /// The requested wordlist is neither embedded nor an existing file.
    #[error("Word list not found: {}", path.display())]
    WordListNotFound { path: PathBuf },

    /// A version string holds a component that is not a non-negative integer.
    #[error("Invalid version `{version}`: component `{component}` is not a non-negative integer")]
    VersionParse { version: String, component: String },

    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl PlecostError {
    pub(crate) fn configuration(field: &'static str, reason: impl Into<String>) -> Self {
        PlecostError::Configuration {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlecostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_display() {
        let error = PlecostError::configuration("target", "missing");
        assert_eq!(
            error.to_string(),
            "Invalid configuration for `target`: missing"
        );
    }

    #[test]
    fn test_wordlist_not_found_display() {
        let error = PlecostError::WordListNotFound {
            path: PathBuf::from("missing.txt"),
        };
        assert_eq!(error.to_string(), "Word list not found: missing.txt");
    }

    #[test]
    fn test_version_parse_display() {
        let error = PlecostError::VersionParse {
            version: "1.2-beta".to_string(),
            component: "2-beta".to_string(),
        };
        assert!(error.to_string().contains("`1.2-beta`"));
        assert!(error.to_string().contains("`2-beta`"));
    }
}
