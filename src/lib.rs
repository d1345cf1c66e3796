pub mod checker;
pub mod config;
pub mod error;
pub mod model;
pub mod options;
pub mod platform;
pub mod wordlist;

pub use config::Config;
pub use error::{PlecostError, Result};
pub use model::{InstalledAppInfo, PluginInfo, ScanResults, VersionPair, Versioned};
pub use options::{LogFunction, RawOptions, ScanOptions};
pub use wordlist::WordlistRegistry;
