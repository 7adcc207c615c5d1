use crate::source::CategorySource;
use pixroll_core::category::category_label;
use pixroll_core::{CatalogError, Result, TtlCache, UrlPool};
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace};

/// Reads category files into validated URL pools.
///
/// Only non-empty pools are cached; a missing file or a file without valid
/// URLs is reported on every call.
#[derive(Debug)]
pub struct CategoryLoader<S> {
    source: Arc<S>,
    cache: TtlCache<UrlPool>,
}

impl<S: CategorySource> CategoryLoader<S> {
    pub fn new(source: Arc<S>, cache: TtlCache<UrlPool>) -> Self {
        Self { source, cache }
    }

    pub fn cache(&self) -> &TtlCache<UrlPool> {
        &self.cache
    }

    /// Loads the URL pool of the category file at `path`.
    ///
    /// # Errors
    ///
    /// * [`CatalogError::CategoryNotFound`] if the file does not exist
    /// * [`CatalogError::CategoryNoValidUrls`] if no line is an http(s) URL
    /// * [`CatalogError::FileReadFailed`] for any other read failure
    pub async fn load_urls(&self, path: &Path) -> Result<UrlPool> {
        if let Some(pool) = self.cache.get(path) {
            return Ok(pool);
        }

        trace!(path = %path.display(), "reading category file");
        let content = self
            .source
            .read_to_string(path)
            .await
            .map_err(|e| read_error(path, e))?;

        let pool = UrlPool::parse(&content).ok_or_else(|| CatalogError::CategoryNoValidUrls {
            category: category_label(path),
            path: path.to_path_buf(),
        })?;

        debug!(path = %path.display(), urls = pool.len(), "loaded category file");
        self.cache.set(path, pool.clone());
        Ok(pool)
    }
}

fn read_error(path: &Path, error: io::Error) -> CatalogError {
    match error.kind() {
        io::ErrorKind::NotFound => CatalogError::CategoryNotFound {
            category: category_label(path),
            path: path.to_path_buf(),
        },
        _ => CatalogError::FileReadFailed {
            path: path.to_path_buf(),
            cause: error.to_string(),
        },
    }
}
