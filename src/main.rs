// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Build the HTTP fetcher and run every URL through the pipeline
// 4. Exit with proper code (0 = done, 1 = no URLs given, 2 = error)
//
// Individual pages failing is NOT an error at this level: they are logged
// and the run still finishes normally.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;       // src/cli.rs - command-line parsing
mod config;    // src/config.rs - runtime settings
mod fetch;     // src/fetch/ - HTTP downloads
mod logging;   // src/logging.rs - tracing setup
mod page;      // src/page/ - saving pages and extracting metadata
mod report;    // src/report.rs - printing metadata
mod run;       // src/run/ - the concurrent pipeline

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use cli::Cli;
use config::Config;
use fetch::HttpFetcher;
use report::ConsoleReport;
use run::{PageStatus, RunError};

#[tokio::main]
async fn main() {
    let exit_code = match run_app().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = all URLs processed (some may have failed individually)
//   Ok(1) = usage error, no URLs given
//   Err = unexpected error (e.g. the HTTP client could not be built)
async fn run_app() -> Result<i32> {
    // Parse before logging so --help and --version print cleanly
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    debug!(?cli, "arguments parsed");

    let config = Config::from(&cli);
    let fetcher = HttpFetcher::new(&config)?;
    let sink = ConsoleReport::new(config.json);

    match run::run(&cli.urls, &config, &fetcher, &sink).await {
        Ok(summary) => {
            for page in &summary.pages {
                if !matches!(page.status, PageStatus::Saved(_)) {
                    debug!(url = %page.url, status = ?page.status, "not saved");
                }
                if let Some(metadata) = &page.metadata {
                    debug!(url = %page.url, links = metadata.link_count, images = metadata.image_count, "metadata reported");
                }
            }
            Ok(0)
        }
        Err(e @ RunError::NoUrls) => {
            eprintln!("{}", e);
            Ok(1)
        }
    }
}
