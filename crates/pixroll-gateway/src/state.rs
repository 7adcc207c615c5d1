use std::sync::Arc;

use pixroll_catalog::ImageCatalog;

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<dyn ImageCatalog>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn ImageCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &dyn ImageCatalog {
        self.catalog.as_ref()
    }
}
