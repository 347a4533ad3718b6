// src/page/persist.rs
// =============================================================================
// This module writes a fetched page (and optionally its assets) to disk.
//
// Two layouts are supported (see SaveMode):
//
//   site-folder (default)            flat
//   ---------------------            ----
//   out/example.com/docs/            out/example.com/docs.html
//       index.html
//       site.css
//       app.js
//       logo.png
//
// How a site-folder save works:
// 1. Create the folder (recursively; it's fine if it already exists)
// 2. Write index.html
// 3. Scan the HTML for stylesheets, scripts and images
// 4. Download and write every asset concurrently
//
// Failure rules:
// - If the folder or index.html can't be written, the whole save fails (None)
// - If an asset fails, we log it and carry on; the save still succeeds
//
// Rust concepts:
// - async fn + join_all: Run many downloads at once and wait for all of them
// - Option<T>: "it worked and here's the path" vs "it didn't"
// - Lifetimes: PagePersister borrows the fetcher instead of owning it
// =============================================================================

use futures::future::join_all;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use url::Url;

use super::assets::{self, AssetReference};
use crate::config::SaveMode;
use crate::fetch::Fetcher;

// Name of the HTML file inside a site folder
const INDEX_FILE: &str = "index.html";

// Used when a URL has nothing left after stripping the scheme
const EMPTY_NAME: &str = "index";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("could not create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// Turns a URL into a relative local name by stripping the scheme
//
// Slashes are kept, so a URL with a path becomes nested folders.
// Empty, "." and ".." segments are dropped so a URL can never point
// outside the output directory.
//
// Examples:
//   "https://example.com"          -> "example.com"
//   "http://example.com/docs/"     -> "example.com/docs"
//   "https://example.com/a/../b"   -> "example.com/a/b"
pub fn derive_local_name(url: &str) -> String {
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);

    let segments: Vec<&str> = without_scheme
        .split('/')
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .collect();

    if segments.is_empty() {
        EMPTY_NAME.to_string()
    } else {
        segments.join("/")
    }
}

// Joins a local name onto a root, one segment at a time
fn local_path(root: &Path, local_name: &str) -> PathBuf {
    local_name
        .split('/')
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}

pub struct PagePersister<'a> {
    fetcher: &'a dyn Fetcher,
    output_dir: PathBuf,
    mode: SaveMode,
}

impl<'a> PagePersister<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, output_dir: impl Into<PathBuf>, mode: SaveMode) -> Self {
        Self {
            fetcher,
            output_dir: output_dir.into(),
            mode,
        }
    }

    // Saves a page and returns the path of the written HTML file
    //
    // Returns None (after logging why) if the HTML itself could not be
    // written. Asset failures never cause None.
    pub async fn persist(&self, url: &str, html: &str) -> Option<PathBuf> {
        let result = match self.mode {
            SaveMode::Flat => self.save_flat(url, html).await,
            SaveMode::SiteFolder => self.save_site_folder(url, html).await,
        };

        match result {
            Ok(path) => Some(path),
            Err(e) => {
                error!("Error saving {} to file: {}", url, e);
                None
            }
        }
    }

    // <output>/<name>.html, no assets
    async fn save_flat(&self, url: &str, html: &str) -> Result<PathBuf, PersistError> {
        let file_name = format!("{}.html", derive_local_name(url));
        let path = local_path(&self.output_dir, &file_name);

        if let Some(parent) = path.parent() {
            create_dir(parent).await?;
        }
        write_file(&path, html.as_bytes()).await?;

        info!("Saved {} to {}", url, path.display());
        Ok(path)
    }

    // <output>/<name>/index.html plus assets
    async fn save_site_folder(&self, url: &str, html: &str) -> Result<PathBuf, PersistError> {
        let site_folder = local_path(&self.output_dir, &derive_local_name(url));
        create_dir(&site_folder).await?;

        let index_path = site_folder.join(INDEX_FILE);
        write_file(&index_path, html.as_bytes()).await?;

        let references = find_assets(url, html);
        let total = references.len();

        // One future per asset, all awaited together
        let downloads = references
            .into_iter()
            .map(|(reference, asset_url)| self.save_asset(&site_folder, reference, asset_url));
        let saved = join_all(downloads).await.into_iter().flatten().count();

        info!(
            "Saved {} to {} with assets ({}/{} downloaded)",
            url,
            index_path.display(),
            saved,
            total
        );
        Ok(index_path)
    }

    // Downloads one asset into the site folder
    //
    // Every failure is logged here and turned into None, so one broken
    // image can't take down the rest of the page.
    async fn save_asset(
        &self,
        site_folder: &Path,
        asset: AssetReference,
        asset_url: Url,
    ) -> Option<PathBuf> {
        let body = match self.fetcher.get(asset_url.as_str()).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Error saving asset {}: {}", asset.reference, e);
                return None;
            }
        };

        let path = site_folder.join(site_asset_name(&asset_url));
        match write_file(&path, &body).await {
            Ok(()) => {
                debug!(kind = ?asset.kind, url = %asset_url, path = %path.display(), "saved asset");
                Some(path)
            }
            Err(e) => {
                warn!("Error saving asset {}: {}", asset.reference, e);
                None
            }
        }
    }
}

// The asset's file name inside a site folder
//
// An asset called index.html would overwrite the page itself, so it gets
// the placeholder name instead.
fn site_asset_name(asset_url: &Url) -> String {
    let name = assets::asset_file_name(asset_url);
    if name.eq_ignore_ascii_case(INDEX_FILE) {
        assets::PLACEHOLDER_NAME.to_string()
    } else {
        name
    }
}

// Scans the page and resolves every asset reference against its URL
//
// Anything that can't be scanned or resolved is logged and left out.
// Not async: the parsed document must be dropped before any .await.
fn find_assets(url: &str, html: &str) -> Vec<(AssetReference, Url)> {
    let base = match Url::parse(url) {
        Ok(base) => base,
        Err(e) => {
            warn!("Cannot resolve assets of {}: invalid page URL: {}", url, e);
            return Vec::new();
        }
    };

    let references = match assets::scan_assets(html) {
        Ok(references) => references,
        Err(e) => {
            warn!("Cannot scan assets of {}: {}", url, e);
            return Vec::new();
        }
    };

    references
        .into_iter()
        .filter_map(|asset| match assets::resolve(&base, &asset.reference) {
            Ok(asset_url) => Some((asset, asset_url)),
            Err(e) => {
                warn!("Error saving asset {}: {}", asset.reference, e);
                None
            }
        })
        .collect()
}

// create_dir_all is idempotent: an existing directory is not an error
async fn create_dir(path: &Path) -> Result<(), PersistError> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| PersistError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
}

async fn write_file(path: &Path, contents: &[u8]) -> Result<(), PersistError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| PersistError::Write {
            path: path.to_path_buf(),
            source,
        })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why tokio::fs instead of std::fs?
//    - std::fs blocks the thread until the disk write finishes
//    - tokio::fs hands the write to a background thread and lets other
//      pages and assets make progress meanwhile
//
// 2. What does join_all(...).into_iter().flatten() do?
//    - join_all gives back a Vec<Option<PathBuf>>, one per asset
//    - flatten() on Options skips the Nones, so .count() = assets saved
//
// 3. Why does PagePersister have a lifetime ('a)?
//    - It holds &'a dyn Fetcher, a borrowed fetcher
//    - The lifetime says "the persister can't outlive the fetcher"
// -----------------------------------------------------------------------------
