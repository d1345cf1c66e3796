//! Cross-platform path resolution.
//!
//! Embedded wordlists and the config file live in the per-user directories
//! reported by the operating system.
//!
//! All functions return `Option<PathBuf>` - returning `None` if the
//! directory can't be determined.

use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the wordlist data directory.
pub const DATA_DIR_ENV: &str = "PLECOST_DATA_DIR";

/// Returns the directory holding the embedded wordlists.
///
/// Platform-specific locations:
/// - Linux: `~/.local/share/plecost/wordlists/`
/// - macOS: `~/Library/Application Support/plecost/wordlists/`
/// - Windows: `%APPDATA%\plecost\wordlists\`
///
/// `PLECOST_DATA_DIR` takes precedence when set and non-empty.
pub fn wordlist_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(dir));
    }

    Some(dirs::data_dir()?.join("plecost").join("wordlists"))
}

/// Returns the directory holding `config.toml`.
pub fn config_dir() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("plecost"))
}

/// Serializes tests that touch `PLECOST_DATA_DIR`.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wordlist_dir_env_override() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        env::set_var(DATA_DIR_ENV, "/srv/plecost/lists");
        assert_eq!(wordlist_dir(), Some(PathBuf::from("/srv/plecost/lists")));

        env::set_var(DATA_DIR_ENV, "");
        assert_eq!(
            wordlist_dir(),
            dirs::data_dir().map(|dir| dir.join("plecost").join("wordlists"))
        );

        env::remove_var(DATA_DIR_ENV);
        assert_eq!(
            wordlist_dir(),
            dirs::data_dir().map(|dir| dir.join("plecost").join("wordlists"))
        );
    }

    #[test]
    fn test_config_dir() {
        assert_eq!(
            config_dir(),
            dirs::config_dir().map(|dir| dir.join("plecost"))
        );
    }
}
