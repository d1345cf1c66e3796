//! Scan records that carry version information.
//!
//! - [`VersionPair`] - current and latest version of a component
//! - [`Versioned`] - read access shared by every versioned record
//! - [`InstalledAppInfo`] - the scanned platform itself
//! - [`PluginInfo`] - a discovered plugin with its CVEs and exploits
//! - [`ScanResults`] - the aggregated, immutable outcome of a session
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use plecost::model::{InstalledAppInfo, PluginInfo, ScanResults, Versioned};
//!
//! let app = InstalledAppInfo::new("6.2", "6.4.2").unwrap();
//! let plugin = PluginInfo::builder("akismet").build().unwrap();
//! assert_eq!(plugin.is_outdated(), None);
//!
//! let started = Utc::now();
//! let results = ScanResults::build("http://example.com", started, Utc::now(), app, vec![plugin]);
//! assert!(results.outdated_plugins().is_empty());
//! ```

mod app;
mod plugin;
mod result;
mod versioned;

pub use app::*;
pub use plugin::*;
pub use result::*;
pub use versioned::*;
