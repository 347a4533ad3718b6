// src/page/mod.rs
// =============================================================================
// Everything we do with a page once it has been fetched.
//
// Submodules:
// - document: Typed wrapper over scraper (query_all / attribute)
// - assets: Finds stylesheet/script/image references and resolves them
// - persist: Writes the page (and its assets) to disk
// - metadata: Counts links and images, stamps the fetch time
// =============================================================================

mod assets;
mod document;
mod metadata;
mod persist;

pub use metadata::{extract as extract_metadata, Metadata};
pub use persist::PagePersister;
