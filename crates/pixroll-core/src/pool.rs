use crate::pick::pick_random;
use crate::url::is_valid_url;
use std::ops::Deref;
use std::sync::Arc;

/// The validated image URLs of one category, in file order.
///
/// A pool is never empty and never changes after it is built. Cloning is
/// cheap, so cached pools are handed out by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPool(Arc<[String]>);

impl UrlPool {
    /// Wraps `urls`, or returns `None` if there are none.
    pub fn new(urls: Vec<String>) -> Option<Self> {
        if urls.is_empty() {
            return None;
        }
        Some(Self(urls.into()))
    }

    /// Builds a pool from category file content.
    ///
    /// Lines are trimmed; blank lines and lines that are not absolute
    /// `http`/`https` URLs are skipped. Returns `None` if nothing survives.
    pub fn parse(content: &str) -> Option<Self> {
        let urls = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && is_valid_url(line))
            .map(str::to_owned)
            .collect();
        Self::new(urls)
    }

    /// Picks one URL uniformly at random.
    pub fn pick(&self) -> &str {
        pick_random(self.urls()).as_str()
    }

    pub fn urls(&self) -> &[String] {
        &self.0
    }
}

impl Deref for UrlPool {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
