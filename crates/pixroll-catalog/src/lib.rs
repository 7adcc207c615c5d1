//! Category catalog for pixroll.
//!
//! This crate turns a directory of `<category>.txt` files into random image
//! picks. A [`CategoryResolver`] lists the category files, a
//! [`CategoryLoader`] turns one file into a validated [`UrlPool`], and the
//! [`CatalogService`] ties them together, fanning out across every category
//! when asked for an image from any of them. Both listings and pools are held
//! in expiring caches.
//!
//! # Example
//!
//! ```rust,no_run
//! use pixroll_catalog::{CatalogService, CatalogSettings};
//! use pixroll_core::{CacheTtl, Category};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = CatalogSettings::builder()
//!     .base_dir("categories")
//!     .cache_ttl(CacheTtl::parse("30000"))
//!     .build();
//! let service = CatalogService::from_settings(settings);
//!
//! let cats = Category::new("cats")?;
//! println!("Redirect to: {}", service.pick_from_category(&cats).await?);
//! println!("Or maybe: {}", service.pick_from_any_category().await?);
//! # Ok(())
//! # }
//! ```
//!
//! [`UrlPool`]: pixroll_core::UrlPool

pub mod catalog;
pub mod loader;
pub mod resolver;
pub mod service;
pub mod settings;
pub mod source;

pub use catalog::ImageCatalog;
pub use loader::CategoryLoader;
pub use resolver::{CategoryListing, CategoryResolver};
pub use service::CatalogService;
pub use settings::CatalogSettings;
pub use source::{CategorySource, FsSource, MemorySource};
