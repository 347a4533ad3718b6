// src/page/metadata.rs
// =============================================================================
// Computes simple structural metadata for a fetched page:
// - how many <a> elements it has
// - how many <img> elements it has
// - when we fetched it (UTC, ISO-8601)
//
// The counts come from the HTML we fetched, never from the file on disk.
// =============================================================================

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use super::document::Document;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub link_count: usize,
    pub image_count: usize,
    /// e.g. "2024-05-01T12:30:00.123Z"
    pub fetched_at: String,
}

// Counts anchors and images and stamps the current time
pub fn extract(html: &str) -> Metadata {
    let document = Document::parse(html);

    Metadata {
        // Both selectors are plain tag names, which always parse
        link_count: document.count("a").unwrap_or_default(),
        image_count: document.count("img").unwrap_or_default(),
        fetched_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}
