use pixroll_core::CacheTtl;
use std::path::PathBuf;
use typed_builder::TypedBuilder;

/// Configures a [`CatalogService`][crate::CatalogService].
#[derive(Debug, Clone, TypedBuilder)]
pub struct CatalogSettings {
    /// Directory holding the `<category>.txt` files.
    #[builder(setter(into))]
    pub base_dir: PathBuf,
    /// TTL shared by the listing and URL pool caches.
    #[builder(default)]
    pub cache_ttl: CacheTtl,
}
