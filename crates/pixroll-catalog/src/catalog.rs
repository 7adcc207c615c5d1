use async_trait::async_trait;
use pixroll_core::{Category, Result};

#[async_trait]
pub trait ImageCatalog: Send + Sync + 'static {
    /// Picks a random image URL from one category.
    async fn pick_from_category(&self, category: &Category) -> Result<String>;

    /// Picks a random image URL from any category that has one.
    async fn pick_from_any_category(&self) -> Result<String>;
}
