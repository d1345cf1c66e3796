use super::{VersionPair, Versioned};
use crate::checker;
use crate::error::{PlecostError, Result};
use serde::Serialize;

/// Version information for the scanned platform itself.
///
/// Both versions are required, so the outdated status is always known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledAppInfo {
    #[serde(flatten)]
    versions: VersionPair,
    outdated: bool,
}

impl InstalledAppInfo {
    /// Builds the record and classifies it against `latest_version`.
    ///
    /// # Errors
    ///
    /// Returns [`PlecostError::Configuration`] if either version is empty and
    /// [`PlecostError::VersionParse`] if either is malformed.
    ///
    /// # Example
    ///
    /// ```
    /// use plecost::model::{InstalledAppInfo, Versioned};
    ///
    /// let app = InstalledAppInfo::new("4.9.1", "6.4.2").unwrap();
    /// assert_eq!(app.is_outdated(), Some(true));
    /// ```
    pub fn new(current_version: impl Into<String>, latest_version: impl Into<String>) -> Result<Self> {
        let current_version = require_version("current_version", current_version.into())?;
        let latest_version = require_version("latest_version", latest_version.into())?;

        let outdated = checker::is_older(&current_version, &latest_version)?;
        let versions = VersionPair::new(Some(current_version), Some(latest_version));

        Ok(Self { versions, outdated })
    }
}

impl Versioned for InstalledAppInfo {
    fn versions(&self) -> &VersionPair {
        &self.versions
    }

    fn is_outdated(&self) -> Option<bool> {
        Some(self.outdated)
    }
}

fn require_version(field: &'static str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(PlecostError::configuration(field, "version must not be empty"));
    }
    Ok(value)
}
