// src/page/document.rs
// =============================================================================
// A small typed wrapper around `scraper` for querying parsed HTML.
//
// The rest of the app only needs two things from a DOM:
// - "give me every element matching this CSS selector" (query_all)
// - "give me this attribute, if it exists" (attribute)
//
// Note: scraper's Html is not Send, so a Document must never be held across
// an .await. Callers parse, query, copy out owned Strings, then drop it.
// =============================================================================

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid CSS selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

pub struct Document {
    html: Html,
}

// A borrowed element inside a Document
#[derive(Clone, Copy)]
pub struct Element<'a> {
    inner: ElementRef<'a>,
}

impl Document {
    // Parses a full HTML document
    //
    // html5ever never fails: broken markup is repaired the same way a
    // browser would, so this returns Self rather than Result.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    // Returns every element matching `selector`, in document order
    pub fn query_all(&self, selector: &str) -> Result<Vec<Element<'_>>, DocumentError> {
        let parsed = Selector::parse(selector).map_err(|e| DocumentError::InvalidSelector {
            selector: selector.to_string(),
            message: e.to_string(),
        })?;

        Ok(self
            .html
            .select(&parsed)
            .map(|inner| Element { inner })
            .collect())
    }

    // Convenience for counting, used by the metadata extractor
    pub fn count(&self, selector: &str) -> Result<usize, DocumentError> {
        Ok(self.query_all(selector)?.len())
    }
}

impl<'a> Element<'a> {
    pub fn tag_name(&self) -> &'a str {
        self.inner.value().name()
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.inner.value().attr(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_all_in_document_order() {
        let doc = Document::parse(r#"<img src="a.png"><p>x</p><img src="b.png">"#);
        let images = doc.query_all("img").unwrap();

        let sources: Vec<_> = images.iter().filter_map(|e| e.attribute("src")).collect();
        assert_eq!(sources, vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_missing_attribute_is_none() {
        let doc = Document::parse("<script>var x = 1;</script>");
        let scripts = doc.query_all("script").unwrap();

        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts[0].tag_name(), "script");
        assert_eq!(scripts[0].attribute("src"), None);
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        let doc = Document::parse("<p>hi</p>");
        assert!(matches!(
            doc.query_all("p[[["),
            Err(DocumentError::InvalidSelector { .. })
        ));
    }

    #[test]
    fn test_broken_markup_still_parses() {
        let doc = Document::parse("<a href='/x'>unclosed <img src=y.png");
        assert_eq!(doc.count("a").unwrap(), 1);
        assert_eq!(doc.count("img").unwrap(), 1);
    }
}
