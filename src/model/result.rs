use super::{InstalledAppInfo, PluginInfo, Versioned};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Final, immutable outcome of a scan session.
///
/// `outdated_plugins` shares its records with `plugins`; it is computed once
/// in [`ScanResults::build`] and never refreshed.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResults {
    target: String,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    app_info: InstalledAppInfo,
    plugins: Vec<Arc<PluginInfo>>,
    outdated_plugins: Vec<Arc<PluginInfo>>,
}

impl ScanResults {
    /// Aggregates every plugin collected during a session.
    ///
    /// Call this once, after all workers have reported. `end_time` is not
    /// checked against `start_time`.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::Utc;
    /// use plecost::model::{InstalledAppInfo, PluginInfo, ScanResults};
    ///
    /// let app = InstalledAppInfo::new("6.4.2", "6.4.2").unwrap();
    /// let plugin = PluginInfo::builder("akismet")
    ///     .with_current_version("4.0")
    ///     .with_latest_version("5.3")
    ///     .build()
    ///     .unwrap();
    ///
    /// let now = Utc::now();
    /// let results = ScanResults::build("http://example.com", now, now, app, vec![plugin]);
    /// assert_eq!(results.outdated_plugins().len(), 1);
    /// ```
    pub fn build<P>(
        target: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        app_info: InstalledAppInfo,
        plugins: Vec<P>,
    ) -> Self
    where
        P: Into<Arc<PluginInfo>>,
    {
        let plugins: Vec<Arc<PluginInfo>> = plugins.into_iter().map(Into::into).collect();

        let outdated_plugins: Vec<Arc<PluginInfo>> = plugins
            .iter()
            .filter(|plugin| plugin.is_outdated() == Some(true))
            .cloned()
            .collect();

        let target = target.into();
        debug!(
            scan_target = %target,
            plugins = plugins.len(),
            outdated = outdated_plugins.len(),
            "Aggregated scan results."
        );

        Self {
            target,
            start_time,
            end_time,
            app_info,
            plugins,
            outdated_plugins,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    /// Elapsed time between start and end; negative if the caller swapped them.
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    pub fn app_info(&self) -> &InstalledAppInfo {
        &self.app_info
    }

    /// All discovered plugins in discovery order.
    pub fn plugins(&self) -> &[Arc<PluginInfo>] {
        &self.plugins
    }

    /// Plugins known to be outdated, in the same relative order as [`plugins`](Self::plugins).
    pub fn outdated_plugins(&self) -> &[Arc<PluginInfo>] {
        &self.outdated_plugins
    }
}
