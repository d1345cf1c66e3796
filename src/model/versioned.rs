use crate::checker;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// The installed and newest known versions of a component.
///
/// Either side may be unknown; an unknown side makes the outdated status
/// unknown as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionPair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,
}

impl VersionPair {
    pub fn new(current_version: Option<String>, latest_version: Option<String>) -> Self {
        Self {
            current_version,
            latest_version,
        }
    }

    /// Derives the outdated status of this pair.
    ///
    /// Returns `Ok(None)` when either version is missing, otherwise whether
    /// the current version orders strictly before the latest one.
    ///
    /// # Errors
    ///
    /// Propagates [`PlecostError::VersionParse`](crate::PlecostError::VersionParse)
    /// from the comparison.
    pub fn outdated(&self) -> Result<Option<bool>> {
        match (&self.current_version, &self.latest_version) {
            (Some(current), Some(latest)) => Ok(Some(checker::is_older(current, latest)?)),
            _ => Ok(None),
        }
    }
}

/// Shared read access for records that carry a [`VersionPair`].
pub trait Versioned {
    fn versions(&self) -> &VersionPair;

    /// `Some(true)` if outdated, `Some(false)` if up to date, `None` if unknown.
    fn is_outdated(&self) -> Option<bool>;

    fn current_version(&self) -> Option<&str> {
        self.versions().current_version.as_deref()
    }

    fn latest_version(&self) -> Option<&str> {
        self.versions().latest_version.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(current: Option<&str>, latest: Option<&str>) -> VersionPair {
        VersionPair::new(current.map(String::from), latest.map(String::from))
    }

    #[test]
    fn test_outdated_when_current_is_older() {
        assert_eq!(pair(Some("1.2.3"), Some("1.3.0")).outdated().unwrap(), Some(true));
    }

    #[test]
    fn test_not_outdated_when_equal_or_newer() {
        assert_eq!(pair(Some("2.0"), Some("2.0.0.0")).outdated().unwrap(), Some(false));
        assert_eq!(pair(Some("2.1"), Some("2.0")).outdated().unwrap(), Some(false));
        assert_eq!(pair(Some("trunk"), Some("2.0")).outdated().unwrap(), Some(false));
    }

    #[test]
    fn test_unknown_when_any_side_missing() {
        assert_eq!(pair(None, None).outdated().unwrap(), None);
        assert_eq!(pair(Some("1.0"), None).outdated().unwrap(), None);
        assert_eq!(pair(None, Some("1.0")).outdated().unwrap(), None);
    }

    #[test]
    fn test_invalid_version_is_an_error() {
        assert!(pair(Some("1.x"), Some("1.0")).outdated().is_err());
    }
}
