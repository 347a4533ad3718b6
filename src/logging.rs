// src/logging.rs
// =============================================================================
// Sets up `tracing` so every module can use info!/warn!/error!.
//
// Log lines go to stderr. stdout is reserved for the metadata report, so
// `site-saver --metadata --json ... > pages.json` stays clean.
//
// Priority: RUST_LOG env var > --quiet > --verbose > default (info)
// =============================================================================

use tracing_subscriber::EnvFilter;

pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(0, false), "info");
        assert_eq!(default_level(1, false), "debug");
        assert_eq!(default_level(5, false), "trace");
        assert_eq!(default_level(2, true), "error");
    }
}
