// src/run/pipeline.rs
// =============================================================================
// This module drives the whole batch: for every URL, concurrently,
//
//   fetch  ->  save to disk  ->  (optionally) extract + print metadata
//
// Every URL is on its own. If one fails to fetch or save, that URL stops
// there and the others carry on. There is no concurrency limit and no
// cancellation: we start them all and wait for all of them.
//
// Rust concepts:
// - join_all: Like Promise.all(), but every future always finishes
// - let-else: Early return when an Option is None
// - Borrowing: The fetcher, persister and sink are shared by reference
// =============================================================================

use futures::future::join_all;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, info};

use crate::config::Config;
use crate::fetch::Fetcher;
use crate::page::{extract_metadata, Metadata, PagePersister};
use crate::report::ReportSink;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Please provide at least one URL")]
    NoUrls,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    /// Saved; holds the path of the HTML file
    Saved(PathBuf),
    FetchFailed,
    /// Fetched fine, but the HTML could not be written
    SaveFailed,
}

// What happened to one URL
#[derive(Debug, Clone)]
pub struct PageOutcome {
    pub url: String,
    pub status: PageStatus,
    /// Only present when metadata was requested and the fetch worked
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub pages: Vec<PageOutcome>,
}

impl RunSummary {
    pub fn saved(&self) -> usize {
        self.pages
            .iter()
            .filter(|p| matches!(p.status, PageStatus::Saved(_)))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.pages.len() - self.saved()
    }
}

// Processes every URL concurrently and waits for all of them
//
// Returns Err(RunError::NoUrls) before doing anything if `urls` is empty.
// Otherwise always returns Ok: individual failures live in the summary.
pub async fn run(
    urls: &[String],
    config: &Config,
    fetcher: &dyn Fetcher,
    sink: &dyn ReportSink,
) -> Result<RunSummary, RunError> {
    if urls.is_empty() {
        return Err(RunError::NoUrls);
    }

    let persister = PagePersister::new(fetcher, &config.output_dir, config.mode);

    let tasks = urls
        .iter()
        .map(|url| process_url(url, fetcher, &persister, config.metadata, sink));
    let pages = join_all(tasks).await;

    let summary = RunSummary { pages };
    info!(
        "Done: {} saved, {} failed, {} total",
        summary.saved(),
        summary.failed(),
        summary.pages.len()
    );
    Ok(summary)
}

// The pipeline for a single URL
async fn process_url(
    url: &str,
    fetcher: &dyn Fetcher,
    persister: &PagePersister<'_>,
    metadata_requested: bool,
    sink: &dyn ReportSink,
) -> PageOutcome {
    let Some(body) = fetcher.fetch(url).await else {
        error!("Failed to fetch HTML from {}", url);
        return PageOutcome {
            url: url.to_string(),
            status: PageStatus::FetchFailed,
            metadata: None,
        };
    };

    // Invalid UTF-8 sequences are replaced rather than rejected
    let html = String::from_utf8_lossy(&body).into_owned();

    let status = match persister.persist(url, &html).await {
        Some(path) => PageStatus::Saved(path),
        None => PageStatus::SaveFailed,
    };

    // Metadata comes from the HTML in memory, so it is reported even if
    // the save failed
    let metadata = metadata_requested.then(|| {
        let metadata = extract_metadata(&html);
        sink.report(url, &metadata);
        metadata
    });

    PageOutcome {
        url: url.to_string(),
        status,
        metadata,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. join_all vs tokio::spawn
//    - join_all polls every future on the current task; nothing needs Send
//    - That matters because scraper's parsed Html is not Send
//    - All the waiting is network and disk I/O, so one task is plenty
//
// 2. What is bool::then?
//    - metadata_requested.then(|| ...) runs the closure only when true
//    - It returns Some(result) or None, which is exactly our Option field
// -----------------------------------------------------------------------------
