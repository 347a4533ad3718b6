// src/config.rs
// =============================================================================
// Runtime settings, built once from the parsed command line.
//
// The rest of the app never looks at clap types directly; it gets a Config.
// That keeps the core testable without going through argument parsing.
// =============================================================================

use clap::ValueEnum;
use std::path::PathBuf;

use crate::cli::Cli;

// How a fetched page is laid out on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SaveMode {
    /// <output>/<site>/index.html plus every stylesheet, script and image
    #[default]
    SiteFolder,
    /// <output>/<site>.html only, no assets
    Flat,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory everything is written under
    pub output_dir: PathBuf,
    pub mode: SaveMode,
    /// Print link/image counts and fetch time per page
    pub metadata: bool,
    /// Print metadata as JSON instead of plain lines
    pub json: bool,
    /// None = reqwest's default (no overall timeout)
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            mode: SaveMode::default(),
            metadata: false,
            json: false,
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            output_dir: cli.output_dir.clone(),
            mode: cli.mode,
            metadata: cli.metadata,
            json: cli.json,
            timeout_secs: cli.timeout,
            user_agent: cli
                .user_agent
                .clone()
                .unwrap_or_else(default_user_agent),
        }
    }
}

// "site-saver/0.1.0", taken from Cargo.toml at compile time
fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.mode, SaveMode::SiteFolder);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(!config.metadata);
        assert!(config.user_agent.starts_with("site-saver/"));
    }

    #[test]
    fn test_from_cli() {
        let cli = Cli::parse_from([
            "site-saver",
            "--mode",
            "flat",
            "--metadata",
            "-o",
            "/tmp/out",
            "--timeout",
            "5",
            "--user-agent",
            "bot/1.0",
            "https://example.com",
        ]);
        let config = Config::from(&cli);

        assert_eq!(config.mode, SaveMode::Flat);
        assert!(config.metadata);
        assert!(!config.json);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.timeout_secs, Some(5));
        assert_eq!(config.user_agent, "bot/1.0");
    }
}
