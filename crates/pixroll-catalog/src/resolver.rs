use crate::source::CategorySource;
use pixroll_core::category::is_category_file;
use pixroll_core::{CatalogError, Result, TtlCache};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace};

/// Cached listing of category file names.
pub type CategoryListing = Arc<[String]>;

/// Lists the category files in a directory.
///
/// Listings are cached per directory; the order is whatever the source
/// returns and carries no meaning.
#[derive(Debug)]
pub struct CategoryResolver<S> {
    source: Arc<S>,
    cache: TtlCache<CategoryListing>,
}

impl<S: CategorySource> CategoryResolver<S> {
    pub fn new(source: Arc<S>, cache: TtlCache<CategoryListing>) -> Self {
        Self { source, cache }
    }

    pub fn cache(&self) -> &TtlCache<CategoryListing> {
        &self.cache
    }

    /// Returns the names of the `.txt` files in `dir`.
    pub async fn list_categories(&self, dir: &Path) -> Result<CategoryListing> {
        if let Some(listing) = self.cache.get(dir) {
            return Ok(listing);
        }

        trace!(dir = %dir.display(), "listing categories directory");
        let entries = self
            .source
            .list_dir(dir)
            .await
            .map_err(|e| CatalogError::DirectoryReadFailed {
                dir: dir.to_path_buf(),
                cause: e.to_string(),
            })?;

        let listing: CategoryListing = entries
            .into_iter()
            .filter(|name| is_category_file(name))
            .collect();

        debug!(dir = %dir.display(), count = listing.len(), "listed category files");
        self.cache.set(dir, Arc::clone(&listing));
        Ok(listing)
    }
}
