//! Core types for pixroll.
//!
//! This crate holds the pieces the catalog is built from: validated category
//! names, the URL validator, the expiring path-keyed cache, URL pools and the
//! random selector, plus the error taxonomy shared with the HTTP gateway.

pub mod cache;
pub mod category;
pub mod clock;
pub mod error;
pub mod pick;
pub mod pool;
pub mod url;

pub use cache::{CacheTtl, TtlCache};
pub use category::Category;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CatalogError, ErrorClass, ErrorCode, Result};
pub use pick::pick_random;
pub use pool::UrlPool;
pub use self::url::is_valid_url;
