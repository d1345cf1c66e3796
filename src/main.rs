use anyhow::Result;
use clap::{Parser, Subcommand};
use plecost::{
    checker,
    config::Config,
    options::{parse_proxy, tracing_log_function, RawOptions, ScanOptions},
    wordlist::{WordlistRegistry, DEFAULT_WORDLIST},
};
use std::cmp::Ordering;
use std::path::Path;
use std::process::ExitCode;
use tabled::{settings::Style, Table, Tabled};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const ERROR: u8 = 1;
}

#[derive(Parser)]
#[command(name = "plecost")]
#[command(author, version, about = "Classify outdated plugins of a web application")]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and print the options a scan of TARGET would use
    Options {
        /// Target URL; `http://` is added when no scheme is given
        target: String,

        /// Maximum number of simultaneous connections
        #[arg(short, long)]
        concurrency: Option<usize>,

        /// Proxy as HOST:PORT (repeatable)
        #[arg(short, long)]
        proxy: Vec<String>,

        /// Embedded wordlist name or path to a wordlist file
        #[arg(short, long)]
        wordlist: Option<String>,

        /// Report filename
        #[arg(short, long)]
        output: Option<String>,

        /// Disable colorized output
        #[arg(long)]
        no_color: bool,
    },

    /// Compare two version strings
    Compare { v1: String, v2: String },

    /// List embedded wordlists
    Wordlists,

    /// Show the effective scan defaults or write a default config file
    Config {
        /// Write the default configuration to the config file
        #[arg(long)]
        init: bool,

        /// Overwrite an existing config file with --init
        #[arg(long, requires = "init")]
        force: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Tabled)]
struct WordlistRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Default")]
    default: String,
    #[tabled(rename = "Path")]
    path: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<u8> {
    match cli.command {
        Commands::Options {
            target,
            concurrency,
            proxy,
            wordlist,
            output,
            no_color,
        } => {
            let mut raw = RawOptions::new(target).with_log_function(tracing_log_function());
            raw.concurrency = concurrency;
            raw.wordlist = wordlist;
            raw.report_filename = output;
            if cli.verbose > 0 {
                raw.verbosity = Some(cli.verbose);
            }
            if no_color {
                raw.colorize = Some(false);
            }
            if !proxy.is_empty() {
                raw.proxy = Some(parse_proxy(&proxy)?);
            }

            let config = Config::load()?;
            let options = ScanOptions::normalize(config.apply(raw))?;
            println!("{}", serde_json::to_string_pretty(&options)?);
        }
        Commands::Compare { v1, v2 } => {
            let label = match checker::compare(&v1, &v2)? {
                Ordering::Less => "less",
                Ordering::Equal => "equal",
                Ordering::Greater => "greater",
            };
            println!("{}", label);
        }
        Commands::Wordlists => list_wordlists()?,
        Commands::Config { init, force, path } => {
            let config_path = Config::config_path()
                .ok_or_else(|| anyhow::anyhow!("No config directory available on this platform"))?;
            handle_config(&config_path, init, force, path)?;
        }
    }

    Ok(exit_codes::SUCCESS)
}

fn list_wordlists() -> Result<()> {
    let registry = WordlistRegistry::embedded()?;
    let rows: Vec<WordlistRow> = registry
        .names()
        .iter()
        .map(|name| WordlistRow {
            name: name.to_string(),
            default: if *name == DEFAULT_WORDLIST { "yes" } else { "" }.to_string(),
            path: registry.data_dir().join(name).display().to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    Ok(())
}

/// Prints the effective scan defaults, or writes them to disk with `--init`.
fn handle_config(config_path: &Path, init: bool, force: bool, show_path: bool) -> Result<()> {
    if show_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if init {
        if config_path.exists() && !force {
            anyhow::bail!(
                "{} already exists; pass --force to overwrite it with defaults",
                config_path.display()
            );
        }

        Config::default().save_to(config_path)?;
        info!(path = %config_path.display(), "Wrote default scan configuration.");
        println!("{}", config_path.display());
        return Ok(());
    }

    let config = Config::load_from(config_path)?;
    let origin = if config_path.exists() {
        config_path.display().to_string()
    } else {
        "built-in defaults".to_string()
    };

    println!("# Effective scan defaults ({})", origin);
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plecost").join("config.toml");

        handle_config(&path, true, false, false).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_config_init_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "concurrency = 9\n").unwrap();

        let err = handle_config(&path, true, false, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(Config::load_from(&path).unwrap().concurrency, 9);

        handle_config(&path, true, true, false).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().concurrency, 4);
    }

    #[test]
    fn test_config_show_rejects_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "colorize = \"yes\"\n").unwrap();

        assert!(handle_config(&path, false, false, false).is_err());
        assert!(handle_config(&path, false, false, true).is_ok());
    }

    #[test]
    fn test_config_show_without_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        handle_config(&path, false, false, false).unwrap();
        assert!(!path.exists());
    }
}
