// src/report.rs
// =============================================================================
// Prints page metadata to stdout, either as plain lines or as JSON.
//
// Plain output, four lines per page:
//   site: https://example.com
//   num_links: 12
//   images: 3
//   last_fetch: 2024-05-01T12:30:00.123Z
//
// JSON output, one object per line (easy to pipe into jq):
//   {"site":"https://example.com","link_count":12,"image_count":3,"fetched_at":"..."}
// =============================================================================

use serde::Serialize;
use tracing::error;

use crate::page::Metadata;

// Where metadata reports go
//
// The console is the real sink; tests collect reports in memory instead.
pub trait ReportSink: Send + Sync {
    fn report(&self, url: &str, metadata: &Metadata);
}

pub struct ConsoleReport {
    json: bool,
}

impl ConsoleReport {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl ReportSink for ConsoleReport {
    fn report(&self, url: &str, metadata: &Metadata) {
        if self.json {
            match format_json(url, metadata) {
                Ok(line) => println!("{}", line),
                Err(e) => error!("Failed to serialize metadata for {}: {}", url, e),
            }
        } else {
            // One println! for all four lines so concurrent pages
            // can't interleave their output
            println!("{}", format_lines(url, metadata));
        }
    }
}

#[derive(Serialize)]
struct PageReport<'a> {
    site: &'a str,
    #[serde(flatten)]
    metadata: &'a Metadata,
}

fn format_lines(url: &str, metadata: &Metadata) -> String {
    format!(
        "site: {}\nnum_links: {}\nimages: {}\nlast_fetch: {}",
        url, metadata.link_count, metadata.image_count, metadata.fetched_at
    )
}

fn format_json(url: &str, metadata: &Metadata) -> serde_json::Result<String> {
    serde_json::to_string(&PageReport {
        site: url,
        metadata,
    })
}
