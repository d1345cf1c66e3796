//! Scan-session options and their normalization.
//!
//! [`RawOptions`] is the loosely filled bag handed over by a CLI or an
//! embedding application. [`ScanOptions::normalize`] validates it once per
//! session and produces the immutable [`ScanOptions`] consumed by the
//! scanning engine.
//!
//! # Example
//!
//! ```
//! use plecost::options::{LogFunction, RawOptions, ScanOptions};
//! use plecost::wordlist::WordlistRegistry;
//!
//! let raw = RawOptions::new("example.com").with_log_function(LogFunction::new(|_, _| {}));
//! let registry = WordlistRegistry::with_data_dir("/usr/share/plecost");
//! let options = ScanOptions::normalize_with(raw, &registry).unwrap();
//!
//! assert_eq!(options.target(), "http://example.com");
//! assert_eq!(options.concurrency(), 4);
//! ```

use crate::error::{PlecostError, Result};
use crate::wordlist::WordlistRegistry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// Default number of simultaneous connections.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Callback used by the scanning engine to report progress: `(message, level)`.
///
/// This crate stores the callback but never invokes it.
#[derive(Clone)]
pub struct LogFunction(Arc<dyn Fn(&str, i32) + Send + Sync>);

impl LogFunction {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str, i32) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn log(&self, message: &str, level: i32) {
        (self.0)(message, level)
    }
}

impl fmt::Debug for LogFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LogFunction(..)")
    }
}

/// A [`LogFunction`] that forwards messages to `tracing`.
///
/// Level 0 logs at info, 1 at debug, 2 and above at trace, negative levels at warn.
pub fn tracing_log_function() -> LogFunction {
    LogFunction::new(|message, level| match level {
        i32::MIN..=-1 => warn!("{}", message),
        0 => info!("{}", message),
        1 => debug!("{}", message),
        _ => trace!("{}", message),
    })
}

/// Unvalidated options for a scan session. Every field may be left unset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOptions {
    pub target: Option<String>,
    pub proxy: Option<HashMap<String, u16>>,
    pub concurrency: Option<usize>,
    pub verbosity: Option<u8>,
    pub report_filename: Option<String>,
    pub colorize: Option<bool>,
    pub wordlist: Option<String>,
    #[serde(skip)]
    pub log_function: Option<LogFunction>,
}

impl RawOptions {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            ..Self::default()
        }
    }

    pub fn with_log_function(mut self, log_function: LogFunction) -> Self {
        self.log_function = Some(log_function);
        self
    }
}

/// Validated, immutable options for one scan session.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOptions {
    target: String,
    proxy: HashMap<String, u16>,
    concurrency: usize,
    verbosity: u8,
    report_filename: Option<String>,
    colorize: bool,
    wordlist: PathBuf,
    #[serde(skip)]
    log_function: LogFunction,
}

impl ScanOptions {
    /// Normalizes `raw` against the embedded wordlist registry.
    ///
    /// See [`ScanOptions::normalize_with`]. Also fails with
    /// [`PlecostError::Configuration`] when no data directory is available.
    pub fn normalize(raw: RawOptions) -> Result<Self> {
        Self::normalize_with(raw, &WordlistRegistry::embedded()?)
    }

    /// Validates `raw` and fills in defaults.
    ///
    /// A target without an `http` prefix gets `http://` prepended. The
    /// wordlist is resolved through `registry`.
    ///
    /// # Errors
    ///
    /// - [`PlecostError::Configuration`] if the target is missing or blank,
    ///   concurrency is zero, or no log function was supplied.
    /// - [`PlecostError::WordListNotFound`] if the wordlist cannot be resolved.
    pub fn normalize_with(raw: RawOptions, registry: &WordlistRegistry) -> Result<Self> {
        let target = match raw.target {
            Some(target) if !target.trim().is_empty() => target,
            _ => return Err(PlecostError::configuration("target", "a target URL is required")),
        };

        let concurrency = raw.concurrency.unwrap_or(DEFAULT_CONCURRENCY);
        if concurrency == 0 {
            return Err(PlecostError::configuration(
                "concurrency",
                "must be at least 1",
            ));
        }

        let log_function = raw.log_function.ok_or_else(|| {
            PlecostError::configuration("log_function", "a log function is required")
        })?;

        let target = if target.starts_with("http") {
            target
        } else {
            format!("http://{}", target)
        };

        let wordlist = registry.resolve(raw.wordlist.as_deref())?;

        let options = Self {
            target,
            proxy: raw.proxy.unwrap_or_default(),
            concurrency,
            verbosity: raw.verbosity.unwrap_or(0),
            report_filename: raw.report_filename,
            colorize: raw.colorize.unwrap_or(true),
            wordlist,
            log_function,
        };

        debug!(
            scan_target = %options.target,
            concurrency = options.concurrency,
            wordlist = %options.wordlist.display(),
            "Normalized scan options."
        );
        Ok(options)
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Proxy as `host -> port`; empty when no proxy is configured.
    pub fn proxy(&self) -> &HashMap<String, u16> {
        &self.proxy
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }

    pub fn report_filename(&self) -> Option<&str> {
        self.report_filename.as_deref()
    }

    pub fn colorize(&self) -> bool {
        self.colorize
    }

    /// Resolved path of the wordlist used for plugin discovery.
    pub fn wordlist(&self) -> &Path {
        &self.wordlist
    }

    pub fn log_function(&self) -> &LogFunction {
        &self.log_function
    }
}

/// Parses `host:port` entries into a proxy map.
///
/// # Errors
///
/// Returns [`PlecostError::Configuration`] for an entry without a host or
/// with a port outside `0..=65535`.
pub fn parse_proxy<S: AsRef<str>>(entries: &[S]) -> Result<HashMap<String, u16>> {
    let mut proxy = HashMap::new();

    for entry in entries {
        let entry = entry.as_ref();
        let (host, port) = entry.rsplit_once(':').ok_or_else(|| {
            PlecostError::configuration("proxy", format!("expected HOST:PORT, got `{}`", entry))
        })?;

        if host.is_empty() {
            return Err(PlecostError::configuration(
                "proxy",
                format!("missing host in `{}`", entry),
            ));
        }

        let port: u16 = port.parse().map_err(|_| {
            PlecostError::configuration("proxy", format!("invalid port in `{}`", entry))
        })?;

        proxy.insert(host.to_string(), port);
    }

    Ok(proxy)
}
