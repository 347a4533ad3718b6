// src/page/assets.rs
// =============================================================================
// This module finds the assets a page links to and works out where each one
// should come from and what it should be called on disk.
//
// An "asset" is any of:
//   <link rel="stylesheet" href="...">
//   <script src="...">
//   <img src="...">
//
// Resolution uses the `url` crate, which follows the same rules a browser
// does for relative references:
//   base = "https://example.com/dir/page.html"
//   "../style.css"            -> "https://example.com/style.css"
//   "/img/logo.png"           -> "https://example.com/img/logo.png"
//   "//cdn.other.com/a.js"    -> "https://cdn.other.com/a.js"
//   "https://cdn.other.com/a.js" -> unchanged
// =============================================================================

use tracing::debug;
use url::Url;

use super::document::{Document, DocumentError};

// CSS selector for every element that can pull in an asset
const ASSET_SELECTOR: &str = r#"link[rel="stylesheet"], script, img"#;

// Name used when a URL has no usable last path segment
pub(super) const PLACEHOLDER_NAME: &str = "asset";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Stylesheet,
    Script,
    Image,
}

impl AssetKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "link" => Some(Self::Stylesheet),
            "script" => Some(Self::Script),
            "img" => Some(Self::Image),
            _ => None,
        }
    }
}

// One asset reference as written in the HTML (not yet resolved)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReference {
    pub kind: AssetKind,
    pub reference: String,
}

// Scans HTML for stylesheet, script and image references
//
// `href` is checked first, then `src`. Elements that have neither (inline
// <script> blocks, for example) are skipped.
pub fn scan_assets(html: &str) -> Result<Vec<AssetReference>, DocumentError> {
    let document = Document::parse(html);
    let mut assets = Vec::new();

    for element in document.query_all(ASSET_SELECTOR)? {
        let Some(kind) = AssetKind::from_tag(element.tag_name()) else {
            continue;
        };

        // An empty href counts as missing, so src is still tried
        let reference = element
            .attribute("href")
            .filter(|href| !href.trim().is_empty())
            .or_else(|| element.attribute("src"));

        match reference {
            Some(reference) if !reference.trim().is_empty() => assets.push(AssetReference {
                kind,
                reference: reference.trim().to_string(),
            }),
            _ => debug!(tag = element.tag_name(), "skipping element without href/src"),
        }
    }

    Ok(assets)
}

// Resolves an asset reference against the page it appeared on
pub fn resolve(base: &Url, reference: &str) -> Result<Url, url::ParseError> {
    base.join(reference)
}

// Derives the on-disk file name for an asset: the last path segment
//
// The query string and fragment are never part of the name.
// Examples:
//   https://example.com/css/site.css?v=3 -> "site.css"
//   https://example.com/                 -> "asset"
//   data:image/png;base64,...            -> "asset"
pub fn asset_file_name(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
        .unwrap_or(PLACEHOLDER_NAME)
        .to_string()
}
