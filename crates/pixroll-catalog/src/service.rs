use crate::catalog::ImageCatalog;
use crate::loader::CategoryLoader;
use crate::resolver::CategoryResolver;
use crate::settings::CatalogSettings;
use crate::source::{CategorySource, FsSource};
use async_trait::async_trait;
use pixroll_core::{
    pick_random, CatalogError, Category, Clock, Result, SystemClock, TtlCache,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, trace, warn};

/// Picks random images out of a directory of category files.
///
/// Owns both caches: the directory listing cache used by the resolver and the
/// URL pool cache used by the loader.
#[derive(Debug)]
pub struct CatalogService<S> {
    base_dir: PathBuf,
    resolver: CategoryResolver<S>,
    loader: Arc<CategoryLoader<S>>,
}

impl CatalogService<FsSource> {
    /// Creates a service reading from the local filesystem.
    pub fn from_settings(settings: CatalogSettings) -> Self {
        Self::new(settings, FsSource)
    }
}

impl<S: CategorySource> CatalogService<S> {
    pub fn new(settings: CatalogSettings, source: S) -> Self {
        Self::with_clock(settings, source, Arc::new(SystemClock))
    }

    /// Creates a service whose caches read time from `clock`.
    pub fn with_clock(settings: CatalogSettings, source: S, clock: Arc<dyn Clock>) -> Self {
        let source = Arc::new(source);
        Self {
            base_dir: settings.base_dir,
            resolver: CategoryResolver::new(
                Arc::clone(&source),
                TtlCache::with_clock(settings.cache_ttl, Arc::clone(&clock)),
            ),
            loader: Arc::new(CategoryLoader::new(
                source,
                TtlCache::with_clock(settings.cache_ttl, clock),
            )),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns the categories currently present, sorted by name.
    ///
    /// Files whose stem is not a valid category name are left out.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let listing = self.resolver.list_categories(&self.base_dir).await?;
        let mut categories: Vec<Category> = listing
            .iter()
            .filter_map(|name| Category::from_file_name(name))
            .collect();
        categories.sort();
        Ok(categories)
    }

    /// Drops every cached listing and URL pool.
    pub fn clear_caches(&self) {
        self.resolver.cache().clear();
        self.loader.cache().clear();
        debug!("cleared catalog caches");
    }

    /// Picks a random image URL from one category.
    pub async fn pick_from_category(&self, category: &Category) -> Result<String> {
        ImageCatalog::pick_from_category(self, category).await
    }

    /// Picks a random image URL across all categories.
    ///
    /// Every category is loaded concurrently. Categories that are missing or
    /// hold no valid URLs are skipped; the call only fails if none succeeds.
    pub async fn pick_from_any_category(&self) -> Result<String> {
        ImageCatalog::pick_from_any_category(self).await
    }
}

#[async_trait]
impl<S: CategorySource> ImageCatalog for CatalogService<S> {
    async fn pick_from_category(&self, category: &Category) -> Result<String> {
        trace!(category = %category, "picking from category");

        let path = category.file_path(&self.base_dir);
        let pool = self.loader.load_urls(&path).await?;
        let url = pool.pick().to_owned();

        debug!(category = %category, url = %url, "picked image");
        Ok(url)
    }

    async fn pick_from_any_category(&self) -> Result<String> {
        let listing = self.resolver.list_categories(&self.base_dir).await?;
        if listing.is_empty() {
            return Err(CatalogError::NoCategoryFiles {
                dir: self.base_dir.clone(),
            });
        }

        let mut attempts = JoinSet::new();
        for file_name in listing.iter() {
            let loader = Arc::clone(&self.loader);
            let path = self.base_dir.join(file_name);
            attempts.spawn(async move {
                let picked = loader
                    .load_urls(&path)
                    .await
                    .map(|pool| pool.pick().to_owned());
                (path, picked)
            });
        }

        // settle all attempts; one failing category never cancels the rest
        let mut picks = Vec::with_capacity(listing.len());
        while let Some(joined) = attempts.join_next().await {
            match joined {
                Ok((_, Ok(url))) => picks.push(url),
                Ok((path, Err(e))) => {
                    debug!(path = %path.display(), code = %e.code(), error = %e, "skipping category");
                }
                Err(e) => {
                    warn!(error = %e, "category attempt did not complete");
                }
            }
        }

        if picks.is_empty() {
            return Err(CatalogError::NoImagesAvailable {
                attempted: listing.len(),
            });
        }

        let url = pick_random(picks.as_slice()).clone();
        debug!(
            url = %url,
            categories = listing.len(),
            usable = picks.len(),
            "picked image from any category"
        );
        Ok(url)
    }
}
