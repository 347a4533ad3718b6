// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Usage:
//   site-saver https://example.com https://rust-lang.org --metadata
//   site-saver --mode flat -o pages/ https://example.com
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

use crate::config::SaveMode;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "site-saver",
    version,
    about = "Save web pages (and their stylesheets, scripts and images) to disk",
    long_about = "site-saver fetches every URL given on the command line concurrently, \
                  writes the HTML and its linked assets to a folder per site, and can \
                  print link/image counts for each page."
)]
pub struct Cli {
    /// URLs to fetch (e.g., https://example.com)
    ///
    /// Not marked required: an empty list is rejected with our own
    /// usage message before any work starts
    pub urls: Vec<String>,

    /// Print link count, image count and fetch time for each page
    #[arg(long)]
    pub metadata: bool,

    /// Print metadata as JSON instead of plain lines
    #[arg(long, requires = "metadata")]
    pub json: bool,

    /// How pages are laid out on disk
    #[arg(long, value_enum, default_value_t = SaveMode::SiteFolder)]
    pub mode: SaveMode,

    /// Directory to write pages into
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Request timeout in seconds (no timeout if not given)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Custom User-Agent header
    #[arg(long)]
    pub user_agent: Option<String>,

    /// More logging (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_flag_anywhere() {
        let cli = Cli::parse_from(["site-saver", "https://a.com", "--metadata", "https://b.com"]);
        assert!(cli.metadata);
        assert_eq!(cli.urls, vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn test_no_urls_parses() {
        let cli = Cli::parse_from(["site-saver"]);
        assert!(cli.urls.is_empty());
        assert_eq!(cli.mode, SaveMode::SiteFolder);
    }

    #[test]
    fn test_json_requires_metadata() {
        let result = Cli::try_parse_from(["site-saver", "--json", "https://a.com"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_mode_value_names() {
        let cli = Cli::parse_from(["site-saver", "--mode", "site-folder", "https://a.com"]);
        assert_eq!(cli.mode, SaveMode::SiteFolder);
    }
}
