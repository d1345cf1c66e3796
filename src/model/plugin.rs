use super::{VersionPair, Versioned};
use crate::error::{PlecostError, Result};
use serde::Serialize;

/// A plugin discovered on the target, with its versions and known issues.
///
/// Instances are immutable. Build them with [`PluginInfo::builder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    uri: String,
    #[serde(flatten)]
    versions: VersionPair,
    #[serde(skip_serializing_if = "Option::is_none")]
    outdated: Option<bool>,
    cves: Vec<String>,
    exploits: Vec<String>,
}

impl PluginInfo {
    /// Starts a builder for the plugin found at `uri`.
    ///
    /// # Example
    ///
    /// ```
    /// use plecost::model::{PluginInfo, Versioned};
    ///
    /// let plugin = PluginInfo::builder("akismet")
    ///     .with_name("Akismet Anti-Spam")
    ///     .with_current_version("4.1")
    ///     .with_latest_version("5.3")
    ///     .with_cves(vec!["CVE-2015-9357".to_string()])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(plugin.is_outdated(), Some(true));
    /// ```
    pub fn builder(uri: impl Into<String>) -> PluginInfoBuilder {
        PluginInfoBuilder {
            uri: uri.into(),
            name: None,
            versions: VersionPair::default(),
            cves: Vec::new(),
            exploits: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The plugin name, or its URI when no name was discovered.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.uri,
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// CVE identifiers in discovery order.
    pub fn cves(&self) -> &[String] {
        &self.cves
    }

    /// Exploit references in discovery order.
    pub fn exploits(&self) -> &[String] {
        &self.exploits
    }
}

impl Versioned for PluginInfo {
    fn versions(&self) -> &VersionPair {
        &self.versions
    }

    fn is_outdated(&self) -> Option<bool> {
        self.outdated
    }
}

/// Builder for [`PluginInfo`]; the outdated status is derived in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct PluginInfoBuilder {
    uri: String,
    name: Option<String>,
    versions: VersionPair,
    cves: Vec<String>,
    exploits: Vec<String>,
}

impl PluginInfoBuilder {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_current_version(mut self, version: impl Into<String>) -> Self {
        self.versions.current_version = Some(version.into());
        self
    }

    pub fn with_latest_version(mut self, version: impl Into<String>) -> Self {
        self.versions.latest_version = Some(version.into());
        self
    }

    pub fn with_versions(mut self, versions: VersionPair) -> Self {
        self.versions = versions;
        self
    }

    pub fn with_cves(mut self, cves: Vec<String>) -> Self {
        self.cves = cves;
        self
    }

    pub fn with_exploits(mut self, exploits: Vec<String>) -> Self {
        self.exploits = exploits;
        self
    }

    /// # Errors
    ///
    /// Returns [`PlecostError::Configuration`] for an empty URI and
    /// [`PlecostError::VersionParse`] when both versions are present and
    /// either is malformed.
    pub fn build(self) -> Result<PluginInfo> {
        if self.uri.trim().is_empty() {
            return Err(PlecostError::configuration("uri", "plugin URI must not be empty"));
        }

        let outdated = self.versions.outdated()?;

        Ok(PluginInfo {
            name: self.name,
            uri: self.uri,
            versions: self.versions,
            outdated,
            cves: self.cves,
            exploits: self.exploits,
        })
    }
}
